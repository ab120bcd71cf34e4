//! Configuration for the probe.
//!
//! [`probe_config`] defines the immutable [`ProbeConfig`] struct; the
//! [`default_config`] module holds the compiled-in defaults and the
//! `PROBE_*` environment overrides.

pub mod default_config;
pub mod probe_config;

pub use default_config::{config_from_env, default_config};
pub use probe_config::ProbeConfig;
