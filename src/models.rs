//! Core record and column types for the endpoint table.

use std::borrow::Cow;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::COLUMN_TITLES;

/// One deduplicated endpoint observation.
///
/// Within a single deduplicated set, the `(url, status)` pair is unique and
/// serials form a dense `1..=N` sequence in admission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointRecord {
    /// 1-based rank of this record in admission order.
    pub serial: usize,
    /// Canonical endpoint URL (`https://host/path`).
    pub url: String,
    /// HTTP status code as text, or `"No Response"`.
    pub status: String,
    /// Full decoded request text.
    pub request_text: String,
    /// Full decoded response text, or `"No Response"`.
    pub response_text: String,
}

/// The five displayed columns, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterMacro)]
pub enum Column {
    /// Serial number ("S. No")
    Serial,
    /// Canonical endpoint URL
    Endpoint,
    /// Response status
    Status,
    /// Request text
    Request,
    /// Response text
    Response,
}

impl Column {
    /// Column title as shown in the table header and the CSV header row.
    pub fn title(self) -> &'static str {
        match self {
            Column::Serial => COLUMN_TITLES[0],
            Column::Endpoint => COLUMN_TITLES[1],
            Column::Status => COLUMN_TITLES[2],
            Column::Request => COLUMN_TITLES[3],
            Column::Response => COLUMN_TITLES[4],
        }
    }
}

impl EndpointRecord {
    /// Textual form of the given column for this record.
    ///
    /// The serial renders in decimal; every other column is returned as-is.
    /// Filtering and both export shapes operate on this textual form.
    pub fn column_text(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Serial => Cow::Owned(self.serial.to_string()),
            Column::Endpoint => Cow::Borrowed(self.url.as_str()),
            Column::Status => Cow::Borrowed(self.status.as_str()),
            Column::Request => Cow::Borrowed(self.request_text.as_str()),
            Column::Response => Cow::Borrowed(self.response_text.as_str()),
        }
    }
}
