//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;
use unique_endpoints::Config;

#[test]
fn test_minimal_invocation_defaults() {
    let config = Config::try_parse_from(["unique_endpoints", "capture.jsonl"]).unwrap();
    assert_eq!(config.file, PathBuf::from("capture.jsonl"));
    assert!(config.serial.is_empty());
    assert!(config.endpoint.is_empty());
    assert!(config.status.is_empty());
    assert!(config.request.is_empty());
    assert!(config.response.is_empty());
    assert!(config.exclude_ext.is_empty());
    assert!(config.output.is_none());
    assert!(!config.copy);
    assert!(config.rows.is_none());
    assert!(!config.list);
}

#[test]
fn test_capture_file_is_required() {
    assert!(Config::try_parse_from(["unique_endpoints"]).is_err());
}

#[test]
fn test_stdin_sentinel_is_accepted() {
    let config = Config::try_parse_from(["unique_endpoints", "-"]).unwrap();
    assert_eq!(config.file, PathBuf::from("-"));
}

#[test]
fn test_column_filters_parse() {
    let config = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--serial",
        "3",
        "--endpoint",
        "api",
        "--status",
        "200",
        "--request",
        "POST",
        "--response",
        "token",
    ])
    .unwrap();

    assert_eq!(config.serial, "3");
    assert_eq!(config.endpoint, "api");
    assert_eq!(config.status, "200");
    assert_eq!(config.request, "POST");
    assert_eq!(config.response, "token");
}

#[test]
fn test_exclude_ext_repeats_and_normalizes() {
    let config = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--exclude-ext",
        ".JS",
        "--exclude-ext",
        "png",
    ])
    .unwrap();

    assert_eq!(config.exclude_ext, vec![".js".to_string(), ".png".to_string()]);
}

#[test]
fn test_exclude_ext_outside_vocabulary_is_rejected() {
    let result = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--exclude-ext",
        ".exe",
    ]);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("unknown extension"));
    assert!(message.contains(".css"));
}

#[test]
fn test_rows_requires_copy() {
    assert!(Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--rows",
        "1-3",
    ])
    .is_err());

    let config = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--copy",
        "--rows",
        "1-3",
    ])
    .unwrap();
    assert!(config.copy);
    assert_eq!(config.rows.as_deref(), Some("1-3"));
}

#[test]
fn test_output_and_list_flags() {
    let config = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--output",
        "report",
        "--list",
    ])
    .unwrap();
    assert_eq!(config.output, Some(PathBuf::from("report")));
    assert!(config.list);
}

#[test]
fn test_log_options_parse() {
    let config = Config::try_parse_from([
        "unique_endpoints",
        "capture.jsonl",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, unique_endpoints::LogFormat::Json));
}
