//! Probe orchestration.
//!
//! [`run`] wires the pieces together: build a [`ChatService`], perform the
//! exchange, and render whatever came back. The split between transport
//! failure and HTTP response lives below this layer; here there are only
//! two shapes of output:
//!
//! - a full report (any HTTP status, even 4xx/5xx), or
//! - exactly one `Error: <description>` line.
//!
//! Either way the caller finishes normally; the probe reports, it never
//! judges. The only error that can escape is an I/O failure on `out`.

use std::io::{self, Write};

use tracing::{error, instrument};

use crate::{config::ProbeConfig, services::ChatService};

/// Runs one probe against `cfg.endpoint` and writes the outcome to `out`.
///
/// Repeated calls with the same config are independent; nothing is cached
/// or mutated between runs.
///
/// # Errors
/// Returns an error only when writing to `out` fails.
#[instrument(skip_all, fields(endpoint = %cfg.endpoint, model = %cfg.model))]
pub async fn run<W: Write>(cfg: &ProbeConfig, out: &mut W) -> io::Result<()> {
    let outcome = match ChatService::new(cfg.clone()) {
        Ok(service) => service.send().await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => report.write_to(out),
        Err(e) => {
            error!(error = %e, "probe failed");
            writeln!(out, "Error: {e}")
        }
    }
}
