//! Display languages selectable in the settings form
//!
//! The agent answers in the user's chosen language; the closed set here is
//! what the language picker offers. Serialized as the BCP-47 code.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Supported display languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// BCP-47 code used on the wire and in the client's URL state
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Chinese => "zh",
            Self::Russian => "ru",
        }
    }

    /// Name the prompts interpolate, always stated in English
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::German => "German",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
            Self::Russian => "Russian",
        }
    }

    /// Attempt to parse a language from configuration input, accepting
    /// either the code or the English name
    pub fn from_str(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::all_languages().iter().copied().find(|language| {
            normalized.eq_ignore_ascii_case(language.code())
                || normalized.eq_ignore_ascii_case(language.display_name())
        })
    }

    /// Enumerate the accepted codes for validation messaging
    pub fn allowed_values() -> &'static [&'static str] {
        &["en", "fr", "es", "de", "ja", "ko", "zh", "ru"]
    }

    /// All selectable languages, in picker order
    pub fn all_languages() -> &'static [Language] {
        &[
            Self::English,
            Self::French,
            Self::Spanish,
            Self::German,
            Self::Japanese,
            Self::Korean,
            Self::Chinese,
            Self::Russian,
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Some(parsed) = Self::from_str(&raw) {
            Ok(parsed)
        } else {
            tracing::warn!(
                input = raw,
                allowed = ?Self::allowed_values(),
                "Invalid display language provided; falling back to default"
            );
            Ok(Self::default())
        }
    }
}
