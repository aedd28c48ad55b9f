//! Clipboard export functionality.
//!
//! Formats selected rows as tab/newline-delimited text that survives a
//! multi-row paste (one line of output per record), and places it on the
//! system clipboard as plain text.

use std::collections::BTreeSet;

use log::info;
use strum::IntoEnumIterator;

use crate::config::{LINE_BREAK_MARKER, MAX_CLIPBOARD_CELL_LEN, TRUNCATION_SUFFIX};
use crate::error_handling::ExportError;
use crate::models::{Column, EndpointRecord};

/// Formats one cell value for clipboard transport.
///
/// CRLF then LF sequences collapse to the visual line-break marker so each
/// record stays on one line; cells beyond the length cap are truncated with
/// the marker suffix. Lengths are counted in characters, not bytes.
fn format_cell(value: &str) -> String {
    let flattened = value
        .replace("\r\n", LINE_BREAK_MARKER)
        .replace('\n', LINE_BREAK_MARKER);

    if flattened.chars().count() > MAX_CLIPBOARD_CELL_LEN {
        let truncated: String = flattened.chars().take(MAX_CLIPBOARD_CELL_LEN).collect();
        format!("{truncated}{TRUNCATION_SUFFIX}")
    } else {
        flattened
    }
}

/// Formats records as clipboard text: cells tab-joined, rows newline-joined,
/// in the order given.
pub fn format_clipboard_text(records: &[EndpointRecord]) -> String {
    records
        .iter()
        .map(|record| {
            Column::iter()
                .map(|column| format_cell(&record.column_text(column)))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_row_number(token: &str) -> Result<usize, ExportError> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| ExportError::SelectionError(format!("\"{token}\" is not a row number")))
}

/// Parses a `"1,3-5"`-style selection of 1-based display rows.
///
/// Returns 0-based indices, ascending and deduplicated, mirroring an ordered
/// multi-row table selection.
///
/// # Errors
///
/// Returns `ExportError::SelectionError` for empty segments, non-numeric
/// tokens, descending ranges, or rows outside `1..=row_count`.
pub fn parse_row_selection(selection: &str, row_count: usize) -> Result<Vec<usize>, ExportError> {
    let mut picked: BTreeSet<usize> = BTreeSet::new();

    for part in selection.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ExportError::SelectionError(format!(
                "empty segment in \"{selection}\""
            )));
        }

        let (start, end) = match part.split_once('-') {
            Some((low, high)) => (parse_row_number(low)?, parse_row_number(high)?),
            None => {
                let row = parse_row_number(part)?;
                (row, row)
            }
        };

        if start > end {
            return Err(ExportError::SelectionError(format!(
                "descending range \"{part}\""
            )));
        }

        for row in start..=end {
            if row == 0 || row > row_count {
                return Err(ExportError::SelectionError(format!(
                    "row {row} is outside 1..={row_count}"
                )));
            }
            picked.insert(row - 1);
        }
    }

    Ok(picked.into_iter().collect())
}

/// Copies the given records to the system clipboard as plain text.
///
/// # Returns
///
/// The number of rows copied.
///
/// # Errors
///
/// Returns `ExportError::ClipboardError` when the system clipboard cannot be
/// opened or written (e.g. no display server).
pub fn copy_to_clipboard(records: &[EndpointRecord]) -> Result<usize, ExportError> {
    let text = format_clipboard_text(records);

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ExportError::ClipboardError(format!("Failed to access clipboard: {e}")))?;
    clipboard
        .set_text(text)
        .map_err(|e| ExportError::ClipboardError(format!("Failed to copy to clipboard: {e}")))?;

    info!("Copied {} rows successfully!", records.len());
    Ok(records.len())
}
