//! Export functionality for the visible endpoint set.
//!
//! Two independent output shapes over an arbitrary ordered record sequence:
//! - CSV: RFC 4180 comma-separated values with a header row
//! - Clipboard text: tab/newline-delimited rows safe for multi-row pastes
//!
//! Neither shape reads or mutates pipeline state; both take the records to
//! serialize as an argument.

mod clipboard;
mod csv;

pub use clipboard::{copy_to_clipboard, format_clipboard_text, parse_row_selection};
pub use csv::export_csv;
