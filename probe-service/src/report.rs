//! Probe outcome and its stdout rendering.
//!
//! [`ProbeReport`] carries everything one exchange produced; [`ProbeReport::write_to`]
//! renders it in a fixed four-block layout:
//!
//! ```text
//! Status: 200
//! Time: 1.23 s
//!
//! Raw Response:
//! <body, verbatim>
//!
//! Formatted JSON:
//! <pretty-printed body>
//! ```
//!
//! The `Formatted JSON:` block appears only when the body parsed as JSON.
//! The raw block is always printed exactly as received, so the output stays
//! useful when an endpoint returns HTML error pages or truncated JSON.

use std::io::{self, Write};
use std::time::Duration;

use serde_json::Value;

/// Result of one probe exchange.
///
/// Produced by [`crate::services::ChatService::send`]; consumed by
/// [`ProbeReport::write_to`]. Every HTTP status lands here, success or not.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// HTTP status the endpoint answered with.
    pub status: reqwest::StatusCode,

    /// Wall-clock duration of the whole exchange, body read included.
    pub elapsed: Duration,

    /// Response body exactly as received.
    pub raw_body: String,

    /// The body as JSON, when it parsed; `None` otherwise.
    pub parsed: Option<Value>,
}

impl ProbeReport {
    /// Writes the report to `out` in the fixed four-block layout.
    ///
    /// Elapsed time is rendered in seconds with two decimals. The formatted
    /// block keeps non-ASCII text as-is (no `\u` escapes).
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Status: {}", self.status.as_u16())?;
        writeln!(out, "Time: {:.2} s", self.elapsed.as_secs_f64())?;

        writeln!(out)?;
        writeln!(out, "Raw Response:")?;
        writeln!(out, "{}", self.raw_body)?;

        if let Some(parsed) = &self.parsed {
            let pretty = serde_json::to_string_pretty(parsed).map_err(io::Error::other)?;
            writeln!(out)?;
            writeln!(out, "Formatted JSON:")?;
            writeln!(out, "{pretty}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(report: &ProbeReport) -> String {
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_all_blocks_for_a_json_body() {
        let report = ProbeReport {
            status: reqwest::StatusCode::OK,
            elapsed: Duration::from_millis(1230),
            raw_body: r#"{"msg":"hi"}"#.to_string(),
            parsed: Some(json!({"msg": "hi"})),
        };

        assert_eq!(
            render(&report),
            "Status: 200\nTime: 1.23 s\n\nRaw Response:\n{\"msg\":\"hi\"}\n\nFormatted JSON:\n{\n  \"msg\": \"hi\"\n}\n"
        );
    }

    #[test]
    fn omits_formatted_block_for_a_non_json_body() {
        let report = ProbeReport {
            status: reqwest::StatusCode::BAD_GATEWAY,
            elapsed: Duration::from_millis(40),
            raw_body: "<html>upstream down</html>".to_string(),
            parsed: None,
        };

        let text = render(&report);
        assert!(text.starts_with("Status: 502\nTime: 0.04 s\n"));
        assert!(text.contains("\nRaw Response:\n<html>upstream down</html>\n"));
        assert!(!text.contains("Formatted JSON:"));
    }

    #[test]
    fn keeps_unicode_unescaped_in_the_formatted_block() {
        let report = ProbeReport {
            status: reqwest::StatusCode::OK,
            elapsed: Duration::from_millis(500),
            raw_body: r#"{"greeting":"你好"}"#.to_string(),
            parsed: Some(json!({"greeting": "你好"})),
        };

        let text = render(&report);
        assert!(text.contains("\"greeting\": \"你好\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn rounds_elapsed_to_two_decimals() {
        let mut report = ProbeReport {
            status: reqwest::StatusCode::OK,
            elapsed: Duration::from_millis(987),
            raw_body: String::new(),
            parsed: None,
        };
        assert!(render(&report).contains("Time: 0.99 s\n"));

        report.elapsed = Duration::from_secs(2);
        assert!(render(&report).contains("Time: 2.00 s\n"));
    }
}
