//! User-tunable model settings
//!
//! The settings form on the web client produces this record and the request
//! builder consumes it. Construction and deserialization accept any field
//! values; [`ModelSettings::validate`] is the single place that checks them
//! against the token budget table and the accepted bounds.

use serde::{Deserialize, Serialize};

use crate::config::constants::{defaults, limits};
use crate::config::languages::Language;
use crate::config::models::ModelId;

/// Composite configuration record for a user's agent session
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    /// Display language the agent answers in
    #[serde(default)]
    pub language: Language,

    /// API credential supplied by the user; empty means the shared backend key
    #[serde(default = "default_custom_api_key")]
    pub custom_api_key: String,

    /// Selected backend model
    #[serde(default)]
    pub custom_model_name: ModelId,

    /// Sampling temperature
    #[serde(default = "default_custom_temperature")]
    pub custom_temperature: f32,

    /// Upper bound on agent loop iterations per run
    #[serde(default = "default_custom_max_loops")]
    pub custom_max_loops: u32,

    /// Completion token limit for a single request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            custom_api_key: default_custom_api_key(),
            custom_model_name: ModelId::default(),
            custom_temperature: default_custom_temperature(),
            custom_max_loops: default_custom_max_loops(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ModelSettings {
    /// Context-token budget of the selected model
    pub fn token_budget(&self) -> u32 {
        self.custom_model_name.max_tokens()
    }

    /// Check the record against the budget table and the accepted bounds
    ///
    /// Values are stored as given; nothing is clamped. Callers that forward
    /// settings to the request layer are expected to validate first.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(limits::TEMPERATURE_MIN..=limits::TEMPERATURE_MAX).contains(&self.custom_temperature) {
            return Err(SettingsError::TemperatureOutOfRange {
                value: self.custom_temperature,
            });
        }
        if !(limits::MAX_LOOPS_MIN..=limits::MAX_LOOPS_MAX).contains(&self.custom_max_loops) {
            return Err(SettingsError::LoopLimitOutOfRange {
                value: self.custom_max_loops,
            });
        }
        if self.max_tokens < limits::MAX_TOKENS_MIN {
            return Err(SettingsError::EmptyTokenLimit);
        }
        let budget = self.token_budget();
        if self.max_tokens > budget {
            return Err(SettingsError::TokenBudgetExceeded {
                model: self.custom_model_name,
                requested: self.max_tokens,
                budget,
            });
        }
        Ok(())
    }
}

/// Settings validation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("model {model} only supports {budget} tokens, {requested} requested")]
    TokenBudgetExceeded {
        model: ModelId,
        requested: u32,
        budget: u32,
    },
    #[error("max_tokens must be at least {min}", min = limits::MAX_TOKENS_MIN)]
    EmptyTokenLimit,
    #[error(
        "temperature {value} outside allowed range {min}..={max}",
        min = limits::TEMPERATURE_MIN,
        max = limits::TEMPERATURE_MAX
    )]
    TemperatureOutOfRange { value: f32 },
    #[error(
        "loop limit {value} outside allowed range {min}..={max}",
        min = limits::MAX_LOOPS_MIN,
        max = limits::MAX_LOOPS_MAX
    )]
    LoopLimitOutOfRange { value: u32 },
}

fn default_custom_api_key() -> String {
    defaults::DEFAULT_CUSTOM_API_KEY.to_string()
}

fn default_custom_temperature() -> f32 {
    defaults::DEFAULT_TEMPERATURE
}

fn default_custom_max_loops() -> u32 {
    defaults::DEFAULT_MAX_LOOPS
}

fn default_max_tokens() -> u32 {
    defaults::DEFAULT_MAX_TOKENS
}
