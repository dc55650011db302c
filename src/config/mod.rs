//! AgentRWKV configuration module
//!
//! This module centralizes the model identifiers the platform accepts, the
//! token budget for each, and the user-tunable settings record the web
//! client's configuration form produces. Literal values live in
//! [`constants`] so neither the client nor the request layer hardcodes them.

pub mod constants;
pub mod languages;
pub mod models;
pub mod settings;

pub use languages::Language;
pub use models::{ModelId, ModelParseError};
pub use settings::{ModelSettings, SettingsError};
