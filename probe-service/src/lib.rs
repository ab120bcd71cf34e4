//! Single-shot diagnostic probe for OpenAI-compatible chat-completions
//! endpoints.
//!
//! The probe builds one fixed request from an immutable
//! [`config::ProbeConfig`], POSTs it with a hard timeout, measures the
//! wall-clock round trip, and renders the outcome to stdout:
//!
//! - `Status:`         → the HTTP status code, whatever it is (4xx/5xx
//!   bodies are the whole point of a probe)
//! - `Time:`           → elapsed seconds with two decimal places
//! - `Raw Response:`   → the body verbatim
//! - `Formatted JSON:` → pretty-printed body, present only when it parses
//!
//! A transport failure produces a single `Error:` line instead. In every
//! case the process terminates normally: the probe reports, it never
//! signals through the exit code.
//!
//! ```no_run
//! use probe_service::{config, runner};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let cfg = config::config_from_env().expect("probe configuration");
//!     runner::run(&cfg, &mut std::io::stdout()).await
//! }
//! ```

pub mod config;
pub mod error_handler;
pub mod report;
pub mod runner;
pub mod services;
pub mod telemetry;
