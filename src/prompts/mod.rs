//! Prompt templates for the agent loop
//!
//! Fixed templates with named input variables, substituted by the backend
//! before each model call. The templates are declarative data; issuing the
//! call belongs to the request layer.

mod templates;

pub use templates::{
    ANALYZE_TASK_PROMPT, CODE_PROMPT, CREATE_TASKS_PROMPT, CREATE_TASKS_SYSTEM_PROMPT,
    EXECUTE_TASK_PROMPT, START_GOAL_PROMPT, START_GOAL_SYSTEM_PROMPT, SUMMARIZE_PROMPT,
};

/// A prompt template plus the variables it expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    template: &'static str,
    input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    /// Raw template text with `{variable}` placeholders intact
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Variables that must be supplied to [`render`](Self::render)
    pub fn input_variables(&self) -> &'static [&'static str] {
        self.input_variables
    }

    /// Substitute every declared variable into the template
    ///
    /// Each declared variable must appear in `inputs`, even when the
    /// template text does not reference it. Extra inputs are ignored.
    pub fn render(&self, inputs: &[(&str, &str)]) -> Result<String, PromptError> {
        let mut rendered = self.template.to_string();
        for variable in self.input_variables.iter().copied() {
            let value = inputs
                .iter()
                .find(|(name, _)| *name == variable)
                .map(|(_, value)| *value)
                .ok_or_else(|| PromptError::MissingVariable(variable.to_string()))?;
            rendered = rendered.replace(&format!("{{{variable}}}"), value);
        }
        Ok(rendered)
    }
}

/// Prompt rendering failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromptError {
    #[error("missing value for prompt variable '{0}'")]
    MissingVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate =
        PromptTemplate::new("Answer in {language}: {question}", &["language", "question"]);

    #[test]
    fn test_render_substitutes_all_variables() {
        let rendered = GREETING
            .render(&[("language", "French"), ("question", "why?")])
            .unwrap();
        assert_eq!(rendered, "Answer in French: why?");
    }

    #[test]
    fn test_render_rejects_missing_variable() {
        let err = GREETING.render(&[("language", "French")]).unwrap_err();
        assert_eq!(err, PromptError::MissingVariable("question".to_string()));
    }

    #[test]
    fn test_render_ignores_extra_inputs() {
        let rendered = GREETING
            .render(&[
                ("question", "why?"),
                ("language", "French"),
                ("unused", "x"),
            ])
            .unwrap();
        assert_eq!(rendered, "Answer in French: why?");
    }

    #[test]
    fn test_shipped_templates_render_completely() {
        // Every placeholder in every shipped template is a declared variable
        for template in [
            START_GOAL_SYSTEM_PROMPT,
            START_GOAL_PROMPT,
            ANALYZE_TASK_PROMPT,
            CODE_PROMPT,
            EXECUTE_TASK_PROMPT,
            CREATE_TASKS_SYSTEM_PROMPT,
            CREATE_TASKS_PROMPT,
            SUMMARIZE_PROMPT,
        ] {
            let inputs: Vec<(&str, &str)> = template
                .input_variables()
                .iter()
                .map(|variable| (*variable, "value"))
                .collect();
            let rendered = template.render(&inputs).unwrap();
            assert!(
                !rendered.contains('{') && !rendered.contains('}'),
                "unsubstituted placeholder in: {rendered}"
            );
        }
    }
}
