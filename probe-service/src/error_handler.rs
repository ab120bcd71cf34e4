//! Unified error handling for `probe-service`.
//!
//! This module exposes a single top-level error type [`ProbeError`] for the
//! whole crate, with configuration problems grouped in [`ConfigError`].
//! Small helpers for reading optional environment overrides and validating
//! configuration values are provided and return the unified [`Result<T>`]
//! alias.
//!
//! All messages include the prefix `[LLM Probe]` to simplify attribution in
//! logs. The parse tier (a response body that is not well-formed JSON) is
//! deliberately NOT represented here: that is a normal outcome for a probe
//! and is handled locally by the chat service.

use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, ProbeError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `probe-service` crate.
///
/// The runner prints whichever variant it receives as a single `Error:`
/// line; the process still terminates normally.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network-exchange failure: connect, DNS, TLS, the configured timeout,
    /// or an interrupted body read.
    #[error("[LLM Probe] transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for configuration loading and validation.
///
/// Keep this focused: only errors that realistically happen when the probe
/// configuration is assembled or validated.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (temperature, token limit, timeout).
    #[error("[LLM Probe] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g. `PROBE_TEMPERATURE`).
        var: &'static str,
        /// Human-readable reason (e.g. `expected f32`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g. invalid URL or header value).
    #[error("[LLM Probe] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g. `PROBE_URL`).
        var: &'static str,
        /// Explanation (e.g. `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[LLM Probe] {field} is out of range: {detail}")]
    OutOfRange {
        /// Field name (e.g. `temperature`).
        field: &'static str,
        /// Description of the expected range (e.g. `expected 0.0..=2.0`).
        detail: &'static str,
    },

    /// Model name was empty or blank.
    #[error("[LLM Probe] model name must not be empty")]
    EmptyModel,
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u32>().map(Some).map_err(|_| {
            ProbeError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            ProbeError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `f32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `f32`.
pub fn env_opt_f32(name: &'static str) -> Result<Option<f32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<f32>().map(Some).map_err(|_| {
            ProbeError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected f32",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers (return unified `Result<T>`)                           */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start
/// with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Validates that a floating-point value lies within an inclusive range.
///
/// Useful for parameters like `temperature` (e.g. `0.0..=2.0`).
///
/// # Errors
/// Returns [`ConfigError::OutOfRange`] if `value` is not finite or lies
/// outside `[min, max]`.
pub fn validate_range_f32(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            detail: "expected value in inclusive range",
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_validation_requires_http_scheme() {
        assert!(validate_http_endpoint("PROBE_URL", "http://localhost:1234").is_ok());
        assert!(validate_http_endpoint("PROBE_URL", "https://llm.example.com/v1").is_ok());

        let err = validate_http_endpoint("PROBE_URL", "llm.example.com/v1").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Config(ConfigError::InvalidFormat {
                var: "PROBE_URL",
                ..
            })
        ));
    }

    #[test]
    fn range_validation_rejects_out_of_range_and_non_finite() {
        assert!(validate_range_f32("temperature", 0.7, 0.0, 2.0).is_ok());
        assert!(validate_range_f32("temperature", 0.0, 0.0, 2.0).is_ok());
        assert!(validate_range_f32("temperature", 2.0, 0.0, 2.0).is_ok());

        for bad in [-0.1_f32, 2.1, f32::NAN, f32::INFINITY] {
            let err = validate_range_f32("temperature", bad, 0.0, 2.0).unwrap_err();
            assert!(matches!(
                err,
                ProbeError::Config(ConfigError::OutOfRange {
                    field: "temperature",
                    ..
                })
            ));
        }
    }

    #[test]
    fn numeric_env_helpers_parse_or_reject() {
        // Vars private to this test; no other test reads them.
        unsafe {
            std::env::set_var("PROBE_TEST_EH_U64", "30");
            std::env::set_var("PROBE_TEST_EH_F32", "0.7");
            std::env::set_var("PROBE_TEST_EH_BAD", "warm");
            std::env::remove_var("PROBE_TEST_EH_UNSET");
        }

        assert_eq!(env_opt_u64("PROBE_TEST_EH_U64").unwrap(), Some(30));
        assert_eq!(env_opt_f32("PROBE_TEST_EH_F32").unwrap(), Some(0.7));
        assert_eq!(env_opt_u32("PROBE_TEST_EH_UNSET").unwrap(), None);

        let err = env_opt_u32("PROBE_TEST_EH_BAD").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Config(ConfigError::InvalidNumber {
                var: "PROBE_TEST_EH_BAD",
                ..
            })
        ));

        unsafe {
            std::env::remove_var("PROBE_TEST_EH_U64");
            std::env::remove_var("PROBE_TEST_EH_F32");
            std::env::remove_var("PROBE_TEST_EH_BAD");
        }
    }

    #[test]
    fn messages_carry_the_crate_prefix() {
        let err = ProbeError::from(ConfigError::EmptyModel);
        assert!(err.to_string().starts_with("[LLM Probe]"));
    }
}
