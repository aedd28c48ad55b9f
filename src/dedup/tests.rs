// Deduplication index tests.

use super::*;

fn exchange(path: &str, host: &str, status: Option<u16>, marker: &str) -> RawExchange {
    let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\n\r\n{marker}");
    let response = status.map(|code| format!("HTTP/1.1 {code} X\r\n\r\n{marker}"));
    RawExchange::new(request, response)
}

#[test]
fn test_rebuild_index_first_wins() {
    let exchanges = vec![
        exchange("/login", "example.com", Some(200), "first"),
        exchange("/login", "example.com", Some(200), "second"),
    ];

    let records = rebuild_index(&exchanges);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].serial, 1);
    assert!(records[0].request_text.contains("first"));
    assert!(records[0].response_text.contains("first"));
}

#[test]
fn test_rebuild_index_distinct_status_is_a_distinct_endpoint() {
    let exchanges = vec![
        exchange("/login", "example.com", Some(200), "a"),
        exchange("/login", "example.com", Some(302), "b"),
        exchange("/login", "example.com", None, "c"),
    ];

    let records = rebuild_index(&exchanges);
    assert_eq!(records.len(), 3);
    let statuses: Vec<&str> = records.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(statuses, ["200", "302", "No Response"]);
}

#[test]
fn test_rebuild_index_serials_are_dense_and_ordered() {
    let exchanges = vec![
        exchange("/a", "example.com", Some(200), "x"),
        exchange("/a", "example.com", Some(200), "dup"),
        exchange("/b", "example.com", Some(200), "x"),
        exchange("/c", "example.com", Some(404), "x"),
        exchange("/b", "example.com", Some(200), "dup"),
        exchange("/d", "example.com", Some(200), "x"),
    ];

    let records = rebuild_index(&exchanges);
    let serials: Vec<usize> = records.iter().map(|r| r.serial).collect();
    assert_eq!(serials, vec![1, 2, 3, 4]);

    let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/c",
            "https://example.com/d",
        ]
    );
}

#[test]
fn test_rebuild_index_is_idempotent_over_unchanged_input() {
    let exchanges = vec![
        exchange("/a", "example.com", Some(200), "x"),
        exchange("/b", "example.com", Some(500), "y"),
        exchange("/a", "example.com", Some(200), "z"),
    ];

    let first = rebuild_index(&exchanges);
    let second = rebuild_index(&exchanges);
    assert_eq!(first, second);
}

#[test]
fn test_rebuild_index_skips_request_less_exchanges() {
    let exchanges = vec![
        RawExchange {
            request: None,
            response: Some("HTTP/1.1 200 OK\r\n\r\n".to_string()),
        },
        exchange("/real", "example.com", Some(200), "x"),
    ];

    let records = rebuild_index(&exchanges);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].serial, 1);
    assert_eq!(records[0].url, "https://example.com/real");
}

#[test]
fn test_rebuild_index_empty_capture_yields_empty_set() {
    assert!(rebuild_index(&[]).is_empty());
}
