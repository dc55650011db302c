/// Model identifier constants to avoid hardcoding strings throughout the
/// platform and the web client
pub mod models {
    /// Self-hosted RWKV world model, the platform default
    pub const RWKV_WORLD_7B: &str = "RWKV-world-7B";
    /// Hosted GPT-3.5 tier with the extended 16k context window
    pub const GPT_3_5_TURBO_16K: &str = "gpt-3.5-turbo-16k";
    /// Hosted GPT-4 standard tier
    pub const GPT_4: &str = "gpt-4";

    /// Every identifier the settings form may offer, in UI order
    pub const SUPPORTED_MODELS: &[&str] = &[RWKV_WORLD_7B, GPT_3_5_TURBO_16K, GPT_4];
}

/// Default configuration values for freshly created settings
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::RWKV_WORLD_7B;
    pub const DEFAULT_CUSTOM_API_KEY: &str = "";
    pub const DEFAULT_TEMPERATURE: f32 = 1.5;
    pub const DEFAULT_MAX_TOKENS: u32 = 500;
    pub const DEFAULT_MAX_LOOPS: u32 = 4;
}

/// Bounds accepted by settings validation
pub mod limits {
    pub const TEMPERATURE_MIN: f32 = 0.0;
    pub const TEMPERATURE_MAX: f32 = 2.0;
    pub const MAX_LOOPS_MIN: u32 = 1;
    pub const MAX_LOOPS_MAX: u32 = 100;
    /// A completion budget of zero tokens can never produce output
    pub const MAX_TOKENS_MIN: u32 = 1;
}
