// Shared test helpers for building captured exchanges and capture files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use unique_endpoints::RawExchange;

/// Builds an exchange to `host``path` with an optional response status.
#[allow(dead_code)] // Used by other test files
pub fn exchange(host: &str, path: &str, status: Option<u16>) -> RawExchange {
    let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nAccept: */*\r\n\r\n");
    let response = status.map(|code| format!("HTTP/1.1 {code} Status\r\nContent-Length: 0\r\n\r\n"));
    RawExchange::new(request, response)
}

/// Writes exchanges as a JSON Lines capture file under `dir`.
#[allow(dead_code)] // Used by other test files
pub fn write_capture_file(dir: &TempDir, name: &str, exchanges: &[RawExchange]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create capture file");
    for exchange in exchanges {
        let line = serde_json::to_string(exchange).expect("Failed to serialize exchange");
        writeln!(file, "{line}").expect("Failed to write capture line");
    }
    path
}
