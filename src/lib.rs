//! # agentrwkv-core - shared contracts for AgentRWKV
//!
//! AgentRWKV lets users assemble, configure, and deploy autonomous AI agents
//! in the browser. This crate is the typed contract the web client and the
//! backend service agree on; it contains no I/O and no agent loop of its own.
//!
//! ## What lives here
//!
//! - `config/`: the closed set of selectable model identifiers, the token
//!   budget for each, the display-language enumeration, and the
//!   [`ModelSettings`] record the settings form produces, with all literal
//!   values centralized in `config::constants`.
//! - `head`: the fixed page metadata (title, social card, icon) the
//!   rendering layer places into the document head.
//! - `prompts`: the plan-and-solve prompt templates the agent loop renders
//!   before each model call.
//! - `schemas`: request and response payload shapes for the run API.
//!
//! ## Quickstart
//!
//! ```rust
//! use agentrwkv_core::{ModelId, ModelSettings};
//!
//! let settings = ModelSettings {
//!     custom_model_name: ModelId::Gpt35Turbo16k,
//!     max_tokens: 16000,
//!     ..ModelSettings::default()
//! };
//! assert!(settings.validate().is_ok());
//! assert_eq!(settings.token_budget(), 16000);
//! ```

pub mod config;
pub mod head;
pub mod prompts;
pub mod schemas;

pub use config::{Language, ModelId, ModelParseError, ModelSettings, SettingsError};
pub use head::{HeadElement, PageMetadata};
pub use prompts::{PromptError, PromptTemplate};
