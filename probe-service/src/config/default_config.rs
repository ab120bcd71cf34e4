//! Compiled-in defaults and environment overrides.
//!
//! [`default_config`] returns the probe exactly as shipped; [`config_from_env`]
//! layers optional `PROBE_*` variables on top. Every variable is optional, so
//! the binary runs with zero setup.
//!
//! # Environment variables
//!
//! - `PROBE_URL`          = chat-completions endpoint, full URL (optional)
//! - `PROBE_API_KEY`      = bearer credential (optional; the shipped default
//!   is a placeholder, so real runs want this one set)
//! - `PROBE_MODEL`        = model identifier (optional)
//! - `PROBE_PROMPT`       = user message to send (optional)
//! - `PROBE_TEMPERATURE`  = sampling temperature, f32 (optional)
//! - `PROBE_MAX_TOKENS`   = completion-length cap, u32 (optional, unset by default)
//! - `PROBE_TIMEOUT_SECS` = whole-exchange timeout, u64 (optional)

use crate::error_handler::{Result, env_opt_f32, env_opt_u32, env_opt_u64};

use super::probe_config::ProbeConfig;

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://llm.chutes.ai/v1/chat/completions";

/// Placeholder API key; replace via `PROBE_API_KEY` before a real run.
pub const DEFAULT_API_KEY: &str = "cpk_replace_me";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b-TEE";

/// Default user prompt.
pub const DEFAULT_PROMPT: &str = "Say hello";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default whole-exchange timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Returns the compiled-in probe configuration.
pub fn default_config() -> ProbeConfig {
    ProbeConfig {
        endpoint: DEFAULT_ENDPOINT.to_string(),
        api_key: DEFAULT_API_KEY.to_string(),
        model: DEFAULT_MODEL.to_string(),
        prompt: DEFAULT_PROMPT.to_string(),
        temperature: DEFAULT_TEMPERATURE,
        max_tokens: None,
        timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
}

/// Builds the probe configuration from defaults plus `PROBE_*` overrides.
///
/// String variables that are unset or blank fall back to the default;
/// numeric variables must parse once set.
///
/// # Errors
/// Returns a configuration error when a numeric override is set but does
/// not parse.
pub fn config_from_env() -> Result<ProbeConfig> {
    let mut cfg = default_config();

    if let Some(v) = env_opt("PROBE_URL") {
        cfg.endpoint = v;
    }
    if let Some(v) = env_opt("PROBE_API_KEY") {
        cfg.api_key = v;
    }
    if let Some(v) = env_opt("PROBE_MODEL") {
        cfg.model = v;
    }
    if let Some(v) = env_opt("PROBE_PROMPT") {
        cfg.prompt = v;
    }
    if let Some(v) = env_opt_f32("PROBE_TEMPERATURE")? {
        cfg.temperature = v;
    }
    if let Some(v) = env_opt_u32("PROBE_MAX_TOKENS")? {
        cfg.max_tokens = Some(v);
    }
    if let Some(v) = env_opt_u64("PROBE_TIMEOUT_SECS")? {
        cfg.timeout_secs = v;
    }

    Ok(cfg)
}

/// Reads an optional string variable; unset and blank are both `None`.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}
