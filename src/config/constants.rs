//! Configuration constants.
//!
//! This module defines the fixed vocabulary and marker literals used
//! throughout the pipeline and its exports.

/// Column titles for the endpoint table, in display order.
///
/// Used verbatim as the CSV header row and the listing header.
pub const COLUMN_TITLES: [&str; 5] = ["S. No", "Endpoint", "Status", "Request", "Response"];

/// Fixed vocabulary of extensions the CLI accepts for `--exclude-ext`.
///
/// The filter engine itself takes an arbitrary extension set; only the CLI
/// surface is restricted to this list.
pub const EXTENSION_VOCABULARY: [&str; 6] = [".css", ".js", ".png", ".jpg", ".gif", ".svg"];

/// Marker used for both the status and body of an exchange with no captured response.
pub const NO_RESPONSE: &str = "No Response";

/// Host used when a request carries no `Host` header.
pub const UNKNOWN_HOST: &str = "Unknown Host";

/// Path used when the request line has no target token.
pub const DEFAULT_PATH: &str = "/";

/// Scheme prefix for canonical endpoint URLs.
///
/// The capture scheme is not retained in the record, so every endpoint is
/// rendered as HTTPS; downstream consumers rely on the literal prefix.
pub const URL_SCHEME_PREFIX: &str = "https://";

/// Maximum clipboard cell length, in characters, before truncation.
pub const MAX_CLIPBOARD_CELL_LEN: usize = 32_000;

/// Suffix appended to truncated clipboard cells.
pub const TRUNCATION_SUFFIX: &str = " [TRUNCATED]";

/// Replacement for line breaks inside clipboard cells, keeping one row per line.
pub const LINE_BREAK_MARKER: &str = "⏎ ";
