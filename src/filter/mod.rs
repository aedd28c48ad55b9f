//! Endpoint filtering.
//!
//! Applies the compound per-column filters and extension exclusions to a
//! deduplicated record sequence. Every change to the filter configuration
//! recomputes the visible set wholesale from the full deduplicated set; the
//! result is a fresh snapshot in the same relative order, never an in-place
//! mutation of a previously filtered subset.

mod types;

pub use types::FilterSpec;

use strum::IntoEnumIterator;

use crate::models::{Column, EndpointRecord};

/// Applies `spec` to the deduplicated record sequence.
///
/// A record is retained when every non-empty column pattern occurs in the
/// corresponding column text (case-insensitive substring match, AND across
/// columns) and its URL does not end with any excluded extension
/// (case-insensitive suffix match, OR across exclusions).
pub fn apply_filter(records: &[EndpointRecord], spec: &FilterSpec) -> Vec<EndpointRecord> {
    records
        .iter()
        .filter(|record| matches_spec(record, spec))
        .cloned()
        .collect()
}

fn matches_spec(record: &EndpointRecord, spec: &FilterSpec) -> bool {
    for column in Column::iter() {
        let pattern = spec.pattern(column).trim().to_lowercase();
        if pattern.is_empty() {
            continue;
        }
        if !record
            .column_text(column)
            .to_lowercase()
            .contains(&pattern)
        {
            return false;
        }
    }

    let url = record.url.to_lowercase();
    !spec
        .excluded_extensions
        .iter()
        .any(|ext| url.ends_with(&ext.to_lowercase()))
}
