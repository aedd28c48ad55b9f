//! Captured exchange input.
//!
//! The capture engine is an external collaborator; the pipeline only needs
//! read access to an ordered list of raw request/response blobs, fetched
//! once per rebuild. This module defines that seam ([`CaptureSource`]), the
//! exchange type itself, and a file-backed source reading one JSON object
//! per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// One captured request/response exchange, as supplied by the capture engine.
///
/// Both blobs are decoded text and are only ever read. An entry recorded
/// without a request carries `request: None` and never produces a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExchange {
    /// Raw request text, header block first.
    pub request: Option<String>,
    /// Raw response text, or `None` when no response was captured.
    #[serde(default)]
    pub response: Option<String>,
}

impl RawExchange {
    /// Builds an exchange from request and optional response text.
    pub fn new(request: impl Into<String>, response: Option<String>) -> Self {
        Self {
            request: Some(request.into()),
            response,
        }
    }
}

/// A source of captured exchanges.
///
/// Implementations supply the full capture set in a stable order (treated as
/// capture/insertion order); the pipeline iterates it once per fetch.
pub trait CaptureSource {
    /// Returns the ordered capture set.
    fn fetch(&self) -> Result<Vec<RawExchange>>;
}

/// Capture source backed by a JSON Lines file: one exchange object per line,
/// e.g. `{"request": "GET / HTTP/1.1\r\n...", "response": null}`.
///
/// Blank lines and `#` comment lines are skipped. Malformed entries are
/// logged at warn level and skipped; they never abort a fetch.
#[derive(Debug, Clone)]
pub struct JsonlCapture {
    path: PathBuf,
}

impl JsonlCapture {
    /// Creates a source for the given path; `-` reads from stdin.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaptureSource for JsonlCapture {
    fn fetch(&self) -> Result<Vec<RawExchange>> {
        let reader: Box<dyn BufRead> = if self.path.as_os_str() == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            let file = File::open(&self.path).with_context(|| {
                format!("Failed to open capture file: {}", self.path.display())
            })?;
            Box::new(BufReader::new(file))
        };

        let mut exchanges = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read line {} from capture input: {e}", index + 1);
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match serde_json::from_str::<RawExchange>(trimmed) {
                Ok(exchange) => exchanges.push(exchange),
                Err(e) => warn!("Skipping malformed capture entry on line {}: {e}", index + 1),
            }
        }

        Ok(exchanges)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
