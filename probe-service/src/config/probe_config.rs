//! Core configuration type for a single probe run.

/// Immutable configuration describing one chat-completions probe.
///
/// The struct is assembled once at startup (defaults plus `PROBE_*`
/// overrides, see [`super::default_config`]) and passed by reference from
/// then on. Nothing mutates it afterwards, so repeated runs against the
/// same value behave identically.
///
/// # Fields
///
/// - `endpoint`: Full URL of the chat-completions endpoint.
/// - `api_key`: Bearer credential for the `Authorization` header.
/// - `model`: Model identifier placed in the request payload.
/// - `prompt`: Content of the single user message.
/// - `temperature`: Sampling temperature (validated to `0.0..=2.0`).
/// - `max_tokens`: Optional completion-length cap.
/// - `timeout_secs`: Whole-exchange timeout in seconds.
///
/// # Examples
///
/// ```
/// use probe_service::config::ProbeConfig;
///
/// let cfg = ProbeConfig {
///     endpoint: "https://llm.example.com/v1/chat/completions".to_string(),
///     api_key: "sk-test".to_string(),
///     model: "demo-model".to_string(),
///     prompt: "Say hello".to_string(),
///     temperature: 0.7,
///     max_tokens: None,
///     timeout_secs: 30,
/// };
/// assert_eq!(cfg.timeout_secs, 30);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Full URL of the chat-completions endpoint.
    pub endpoint: String,

    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,

    /// Model identifier placed in the request payload.
    pub model: String,

    /// The single user message sent to the model.
    pub prompt: String,

    /// Sampling temperature (validated to `0.0..=2.0`).
    pub temperature: f32,

    /// Optional completion-length cap; omitted from the payload when `None`.
    pub max_tokens: Option<u32>,

    /// Whole-exchange timeout in seconds (connect, send, and body read).
    pub timeout_secs: u64,
}
