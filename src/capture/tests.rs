// Capture module tests.

use super::*;
use std::io::Write as _;

fn write_capture_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp capture file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write capture line");
    }
    file.flush().expect("Failed to flush capture file");
    file
}

#[test]
fn test_fetch_reads_exchanges_in_order() {
    let file = write_capture_file(&[
        r#"{"request": "GET /a HTTP/1.1\r\nHost: one.example\r\n\r\n", "response": "HTTP/1.1 200 OK\r\n\r\n"}"#,
        r#"{"request": "GET /b HTTP/1.1\r\nHost: two.example\r\n\r\n"}"#,
    ]);

    let exchanges = JsonlCapture::new(file.path()).fetch().unwrap();
    assert_eq!(exchanges.len(), 2);
    assert!(exchanges[0].request.as_deref().unwrap().contains("GET /a"));
    assert!(exchanges[0].response.is_some());
    // Missing "response" field deserializes as no captured response
    assert!(exchanges[1].response.is_none());
}

#[test]
fn test_fetch_skips_blank_and_comment_lines() {
    let file = write_capture_file(&[
        "# exported by the capture proxy",
        "",
        r#"{"request": "GET / HTTP/1.1\r\n\r\n", "response": null}"#,
        "   ",
    ]);

    let exchanges = JsonlCapture::new(file.path()).fetch().unwrap();
    assert_eq!(exchanges.len(), 1);
}

#[test]
fn test_fetch_skips_malformed_entries() {
    let file = write_capture_file(&[
        "not json at all",
        r#"{"request": 42}"#,
        r#"{"request": "GET /ok HTTP/1.1\r\n\r\n"}"#,
    ]);

    let exchanges = JsonlCapture::new(file.path()).fetch().unwrap();
    assert_eq!(exchanges.len(), 1);
    assert!(exchanges[0].request.as_deref().unwrap().contains("/ok"));
}

#[test]
fn test_fetch_missing_file_is_an_error() {
    let result = JsonlCapture::new("/nonexistent/capture.jsonl").fetch();
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to open capture file"));
}

#[test]
fn test_fetch_empty_file_yields_empty_set() {
    let file = write_capture_file(&[]);
    let exchanges = JsonlCapture::new(file.path()).fetch().unwrap();
    assert!(exchanges.is_empty());
}

#[test]
fn test_request_less_entry_is_preserved_as_input() {
    // The resolver decides what to do with request-less entries; the source
    // must still hand them over
    let file = write_capture_file(&[r#"{"request": null, "response": "HTTP/1.1 200 OK\r\n\r\n"}"#]);
    let exchanges = JsonlCapture::new(file.path()).fetch().unwrap();
    assert_eq!(exchanges.len(), 1);
    assert!(exchanges[0].request.is_none());
}
