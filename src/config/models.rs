//! Model identification and token budgets
//!
//! Centralized enum for the backend model identifiers the platform accepts,
//! paired with the maximum-token budget for each. The settings form, the
//! request builder, and the backend all resolve model names through this
//! module so the offered set and the accepted set cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::constants::models;

/// Closed set of selectable backend model identifiers
///
/// Serialized as the exact wire identifier (for example `"RWKV-world-7B"`).
/// Deserializing any string outside this set is an error; an open model name
/// is never valid anywhere in the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    /// RWKV world 7B, served from the platform's own backend
    #[serde(rename = "RWKV-world-7B")]
    RwkvWorld7b,
    /// GPT-3.5 turbo with the 16k context window
    #[serde(rename = "gpt-3.5-turbo-16k")]
    Gpt35Turbo16k,
    /// GPT-4 standard tier
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl ModelId {
    /// Wire identifier used in API calls and stored settings
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::RwkvWorld7b => models::RWKV_WORLD_7B,
            ModelId::Gpt35Turbo16k => models::GPT_3_5_TURBO_16K,
            ModelId::Gpt4 => models::GPT_4,
        }
    }

    /// Human-readable name shown in the model selector
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::RwkvWorld7b => "RWKV World 7B",
            ModelId::Gpt35Turbo16k => "GPT-3.5 Turbo 16k",
            ModelId::Gpt4 => "GPT-4",
        }
    }

    /// Short description of the model's tier
    pub fn description(&self) -> &'static str {
        match self {
            ModelId::RwkvWorld7b => "Self-hosted RWKV world model, the default",
            ModelId::Gpt35Turbo16k => "Hosted tier with an extended context window",
            ModelId::Gpt4 => "Hosted standard tier",
        }
    }

    /// Maximum context-token budget for this model
    ///
    /// Total over the enumeration: adding a variant without a budget here is
    /// a compile error, so the budget table can never be partial.
    pub fn max_tokens(&self) -> u32 {
        match self {
            ModelId::RwkvWorld7b => 4000,
            ModelId::Gpt35Turbo16k => 16000,
            ModelId::Gpt4 => 4000,
        }
    }

    /// All selectable models, in the order the settings form offers them
    pub fn all_models() -> &'static [ModelId] {
        &[ModelId::RwkvWorld7b, ModelId::Gpt35Turbo16k, ModelId::Gpt4]
    }
}

impl Default for ModelId {
    fn default() -> Self {
        ModelId::RwkvWorld7b
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == models::RWKV_WORLD_7B => Ok(ModelId::RwkvWorld7b),
            s if s == models::GPT_3_5_TURBO_16K => Ok(ModelId::Gpt35Turbo16k),
            s if s == models::GPT_4 => Ok(ModelId::Gpt4),
            _ => Err(ModelParseError::InvalidModel(s.to_string())),
        }
    }
}

/// Error type for model parsing failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelParseError {
    #[error("invalid model identifier '{0}', supported models: {supported}", supported = models::SUPPORTED_MODELS.join(", "))]
    InvalidModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_string_conversion() {
        assert_eq!(ModelId::RwkvWorld7b.as_str(), "RWKV-world-7B");
        assert_eq!(ModelId::Gpt35Turbo16k.as_str(), "gpt-3.5-turbo-16k");
        assert_eq!(ModelId::Gpt4.as_str(), "gpt-4");
    }

    #[test]
    fn test_model_from_string() {
        assert_eq!("RWKV-world-7B".parse::<ModelId>().unwrap(), ModelId::RwkvWorld7b);
        assert_eq!(
            "gpt-3.5-turbo-16k".parse::<ModelId>().unwrap(),
            ModelId::Gpt35Turbo16k
        );
        assert_eq!("gpt-4".parse::<ModelId>().unwrap(), ModelId::Gpt4);
        // Identifiers outside the closed set are rejected
        assert!("gpt-3.5-turbo".parse::<ModelId>().is_err());
        assert!("".parse::<ModelId>().is_err());
    }

    #[test]
    fn test_token_budgets() {
        assert_eq!(ModelId::RwkvWorld7b.max_tokens(), 4000);
        assert_eq!(ModelId::Gpt35Turbo16k.max_tokens(), 16000);
        assert_eq!(ModelId::Gpt4.max_tokens(), 4000);
        // The budget table is total and positive over the enumeration
        for model in ModelId::all_models() {
            assert!(model.max_tokens() > 0);
        }
    }

    #[test]
    fn test_all_models_matches_supported_list() {
        let listed: Vec<&str> = ModelId::all_models().iter().map(|m| m.as_str()).collect();
        assert_eq!(listed, models::SUPPORTED_MODELS);
        // Round trip: every supported identifier parses back to a member
        for name in models::SUPPORTED_MODELS {
            assert!(name.parse::<ModelId>().is_ok());
        }
    }

    #[test]
    fn test_model_default() {
        assert_eq!(ModelId::default(), ModelId::RwkvWorld7b);
    }

    #[test]
    fn test_model_serde_wire_format() {
        let json = serde_json::to_string(&ModelId::RwkvWorld7b).unwrap();
        assert_eq!(json, "\"RWKV-world-7B\"");
        let parsed: ModelId = serde_json::from_str("\"gpt-3.5-turbo-16k\"").unwrap();
        assert_eq!(parsed, ModelId::Gpt35Turbo16k);
        assert!(serde_json::from_str::<ModelId>("\"claude-2\"").is_err());
    }
}
