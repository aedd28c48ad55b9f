//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::EXTENSION_VOCABULARY;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Validates an `--exclude-ext` value against the known extension vocabulary.
///
/// Accepts the extension with or without its leading dot, in any casing, and
/// normalizes to the lowercase dotted form.
fn parse_excluded_extension(raw: &str) -> Result<String, String> {
    let mut normalized = raw.trim().to_lowercase();
    if !normalized.starts_with('.') {
        normalized.insert(0, '.');
    }
    if EXTENSION_VOCABULARY.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!(
            "unknown extension \"{}\" (expected one of: {})",
            raw,
            EXTENSION_VOCABULARY.join(", ")
        ))
    }
}

/// Configuration for one extraction run.
///
/// Doubles as the CLI surface: five per-column substring filters, the
/// extension exclusions, the export destinations, and logging options. All
/// filter options default to empty, meaning no constraint.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unique_endpoints",
    version,
    about = "List the unique (endpoint, status) pairs seen in captured HTTP traffic"
)]
pub struct Config {
    /// Capture file to read exchanges from (JSON Lines; `-` for stdin)
    pub file: PathBuf,

    /// Substring filter on the serial column
    #[arg(long, default_value = "", hide_default_value = true)]
    pub serial: String,

    /// Substring filter on the endpoint URL column
    #[arg(long, default_value = "", hide_default_value = true)]
    pub endpoint: String,

    /// Substring filter on the status column
    #[arg(long, default_value = "", hide_default_value = true)]
    pub status: String,

    /// Substring filter on the request text
    #[arg(long, default_value = "", hide_default_value = true)]
    pub request: String,

    /// Substring filter on the response text
    #[arg(long, default_value = "", hide_default_value = true)]
    pub response: String,

    /// Exclude endpoints whose URL ends with this extension (repeatable)
    #[arg(long = "exclude-ext", value_name = "EXT", value_parser = parse_excluded_extension)]
    pub exclude_ext: Vec<String>,

    /// Write the visible rows to a CSV file (`-` for stdout)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the visible rows to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Restrict --copy to selected display rows, e.g. "1,3-5"
    #[arg(long, value_name = "SELECTION", requires = "copy")]
    pub rows: Option<String>,

    /// Print the visible rows to stdout
    #[arg(long)]
    pub list: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            serial: String::new(),
            endpoint: String::new(),
            status: String::new(),
            request: String::new(),
            response: String::new(),
            exclude_ext: Vec::new(),
            output: None,
            copy: false,
            rows: None,
            list: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
