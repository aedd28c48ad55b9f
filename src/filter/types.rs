//! Filter configuration types.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::models::Column;

/// The filter configuration applied to the deduplicated set: one substring
/// pattern per displayed column plus a set of excluded file extensions.
///
/// Empty patterns are unconstrained; all comparisons are case-insensitive.
/// The extension set is open-ended here — the CLI restricts it to a fixed
/// vocabulary, but the engine accepts any suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Pattern matched against the serial column's decimal form.
    pub serial: String,
    /// Pattern matched against the canonical endpoint URL.
    pub endpoint: String,
    /// Pattern matched against the status column.
    pub status: String,
    /// Pattern matched against the full request text.
    pub request: String,
    /// Pattern matched against the full response text.
    pub response: String,
    /// Extensions excluded by case-insensitive suffix match on the URL.
    pub excluded_extensions: BTreeSet<String>,
}

impl FilterSpec {
    /// The pattern for the given column.
    pub(crate) fn pattern(&self, column: Column) -> &str {
        match column {
            Column::Serial => &self.serial,
            Column::Endpoint => &self.endpoint,
            Column::Status => &self.status,
            Column::Request => &self.request,
            Column::Response => &self.response,
        }
    }

    /// True when no pattern or exclusion is set.
    pub fn is_unconstrained(&self) -> bool {
        self.serial.trim().is_empty()
            && self.endpoint.trim().is_empty()
            && self.status.trim().is_empty()
            && self.request.trim().is_empty()
            && self.response.trim().is_empty()
            && self.excluded_extensions.is_empty()
    }
}

impl From<&Config> for FilterSpec {
    fn from(config: &Config) -> Self {
        Self {
            serial: config.serial.clone(),
            endpoint: config.endpoint.clone(),
            status: config.status.clone(),
            request: config.request.clone(),
            response: config.response.clone(),
            excluded_extensions: config.exclude_ext.iter().cloned().collect(),
        }
    }
}
