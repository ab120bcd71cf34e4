//! Chat-completions client for the probe.
//!
//! Minimal, non-streaming client that performs exactly one
//! POST {endpoint} request with a single user message.
//!
//! Constructor validation:
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.model` must be non-empty
//! - `cfg.temperature` must lie in `0.0..=2.0`
//!
//! Unlike a production client, the probe treats EVERY HTTP status as a
//! successful exchange: a 401 or 503 is exactly the kind of answer the
//! probe exists to surface. Only transport failures (connect, DNS, TLS,
//! timeout, interrupted body read) become errors. A body that is not
//! well-formed JSON is also a normal outcome; it is kept verbatim and the
//! formatted view is simply skipped.
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::ProbeConfig,
    error_handler::{ConfigError, Result, validate_http_endpoint, validate_range_f32},
    report::ProbeReport,
};

/// Thin client for one chat-completions exchange.
///
/// Constructed from a complete [`ProbeConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers).
///
/// High-level operations:
/// - [`ChatService::send`] — single, non-streaming chat completion probe
#[derive(Debug)]
pub struct ChatService {
    client: reqwest::Client,
    cfg: ProbeConfig,
}

impl ChatService {
    /// Creates a new [`ChatService`] from the given config.
    ///
    /// Validates the endpoint scheme, model name, and temperature. Builds an
    /// HTTP client with default headers and the configured timeout.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if the endpoint scheme or API key is invalid
    /// - [`ConfigError::EmptyModel`] if the model name is blank
    /// - [`ConfigError::OutOfRange`] if the temperature is outside `0.0..=2.0`
    /// - [`crate::error_handler::ProbeError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: ProbeConfig) -> Result<Self> {
        // 1) Endpoint must use http/https.
        validate_http_endpoint("PROBE_URL", &cfg.endpoint)?;

        // 2) Model must be non-empty.
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }

        // 3) Temperature must be a sane sampling value.
        validate_range_f32("temperature", cfg.temperature, 0.0, 2.0)?;

        // 4) HTTP client: timeout + default headers.
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|_| {
                ConfigError::InvalidFormat {
                    var: "PROBE_API_KEY",
                    reason: "not a valid HTTP header value",
                }
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .user_agent("llm-probe/0.1")
            .build()?;

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "ChatService initialized"
        );

        Ok(Self { client, cfg })
    }

    /// Performs the probe exchange: one POST, any HTTP status accepted.
    ///
    /// The elapsed time covers the whole exchange including the body read,
    /// so a slow download shows up in `Time:` just like a slow handshake.
    ///
    /// # Errors
    /// - [`crate::error_handler::ProbeError::Transport`] for connect, DNS,
    ///   TLS, timeout, or body-read failures
    pub async fn send(&self) -> Result<ProbeReport> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg);

        debug!(
            model = %self.cfg.model,
            prompt_len = self.cfg.prompt.len(),
            "POST {}", self.cfg.endpoint
        );

        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        // The body read is part of the measured exchange; stop the clock after it.
        let raw_body = resp.text().await?;
        let elapsed = started.elapsed();

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                latency_ms = elapsed.as_millis(),
                endpoint = %self.cfg.endpoint,
                "endpoint answered with non-success status"
            );
        }

        let parsed = match serde_json::from_str::<Value>(&raw_body) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(error = %e, "response body is not JSON; formatted view will be skipped");
                None
            }
        };

        info!(
            status = status.as_u16(),
            latency_ms = elapsed.as_millis(),
            body_bytes = raw_body.len(),
            json = parsed.is_some(),
            "probe exchange completed"
        );

        Ok(ProbeReport {
            status,
            elapsed,
            raw_body,
            parsed,
        })
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for a chat-completions probe (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds the single-user-message request from config.
    fn from_cfg(cfg: &'a ProbeConfig) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &cfg.prompt,
            }],
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

/// Chat message for the chat-completions API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user" | "assistant" | ...
    role: &'a str,
    content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::error_handler::ProbeError;
    use serde_json::json;

    fn test_cfg() -> ProbeConfig {
        ProbeConfig {
            endpoint: "http://127.0.0.1:1/v1/chat/completions".into(),
            api_key: "test-key".into(),
            model: "test-model".into(),
            prompt: "Say hello".into(),
            temperature: 0.7,
            max_tokens: None,
            timeout_secs: 30,
        }
    }

    // Serialize through a string, the way the request actually leaves the
    // client; `to_value` would widen the f32 temperature lossily.
    fn wire_body(cfg: &ProbeConfig) -> serde_json::Value {
        let raw = serde_json::to_string(&ChatCompletionRequest::from_cfg(cfg)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn request_body_has_exactly_the_required_keys() {
        let cfg = test_cfg();
        let body = wire_body(&cfg);

        let obj = body.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["messages", "model", "temperature"]);

        assert_eq!(body["model"], json!("test-model"));
        assert_eq!(body["temperature"], json!(0.7));
        assert_eq!(
            body["messages"],
            json!([{ "role": "user", "content": "Say hello" }])
        );
    }

    #[test]
    fn max_tokens_appears_only_when_set() {
        let mut cfg = test_cfg();
        cfg.max_tokens = Some(128);

        let body = wire_body(&cfg);
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(body["max_tokens"], json!(128));
    }

    #[test]
    fn constructor_rejects_non_http_endpoint() {
        let mut cfg = test_cfg();
        cfg.endpoint = "llm.example.com/v1/chat/completions".into();

        let err = ChatService::new(cfg).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Config(ConfigError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn constructor_rejects_out_of_range_temperature() {
        let mut cfg = test_cfg();
        cfg.temperature = 3.0;

        let err = ChatService::new(cfg).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Config(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn constructor_rejects_blank_model() {
        let mut cfg = test_cfg();
        cfg.model = "  ".into();

        let err = ChatService::new(cfg).unwrap_err();
        assert!(matches!(err, ProbeError::Config(ConfigError::EmptyModel)));
    }

    #[test]
    fn shipped_defaults_pass_validation() {
        assert!(ChatService::new(default_config()).is_ok());
    }
}
