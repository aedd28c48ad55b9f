//! unique_endpoints library: endpoint extraction from captured HTTP traffic
//!
//! This library takes the ordered request/response exchanges recorded by an
//! external interception tool and derives the distinct endpoints observed:
//! each unique `(canonical URL, status)` pair, first occurrence wins, with
//! dense serial numbers in admission order. The deduplicated set can then be
//! narrowed with compound case-insensitive column filters and extension
//! exclusions, and the visible rows exported to CSV or the system clipboard.
//!
//! # Example
//!
//! ```no_run
//! use unique_endpoints::{apply_filter, rebuild_index, FilterSpec, JsonlCapture, CaptureSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exchanges = JsonlCapture::new("capture.jsonl").fetch()?;
//! let records = rebuild_index(&exchanges);
//!
//! let spec = FilterSpec {
//!     endpoint: "api".to_string(),
//!     ..Default::default()
//! };
//! for record in apply_filter(&records, &spec) {
//!     println!("{} {} {}", record.serial, record.url, record.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Execution is single-threaded and synchronous: fetch, filter, and export
//! each run to completion on the calling thread. Every fetch rebuilds the
//! deduplicated set wholesale and every filter change recomputes the visible
//! snapshot wholesale; nothing is mutated in place.

#![warn(missing_docs)]

pub mod capture;
pub mod config;
mod dedup;
mod endpoint;
mod error_handling;
pub mod export;
mod filter;
pub mod initialization;
mod models;
mod parse;

// Re-export public API
pub use capture::{CaptureSource, JsonlCapture, RawExchange};
pub use config::{Config, LogFormat, LogLevel};
pub use dedup::rebuild_index;
pub use endpoint::{resolve_exchange, CandidateEndpoint};
pub use error_handling::{ExportError, InitializationError};
pub use filter::{apply_filter, FilterSpec};
pub use models::{Column, EndpointRecord};
pub use parse::{parse_request_target, parse_status_code, RequestTarget};
pub use run::{run_extract, ExtractReport};

// Internal run module (ties the pipeline stages together for the CLI)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::capture::{CaptureSource, JsonlCapture};
    use crate::config::Config;
    use crate::dedup::rebuild_index;
    use crate::export::{copy_to_clipboard, export_csv, parse_row_selection};
    use crate::filter::{apply_filter, FilterSpec};
    use crate::models::EndpointRecord;

    /// Results of one extraction run.
    #[derive(Debug, Clone)]
    pub struct ExtractReport {
        /// Number of exchanges read from the capture source
        pub total_exchanges: usize,
        /// Number of unique (url, status) endpoints after deduplication
        pub unique_endpoints: usize,
        /// The filtered, visible records in display order
        pub visible: Vec<EndpointRecord>,
        /// CSV file actually written (extension forced), if a file export ran
        pub csv_path: Option<PathBuf>,
        /// Number of CSV rows written, if any export ran
        pub csv_rows: Option<usize>,
        /// Number of rows copied to the clipboard, if requested
        pub copied_rows: Option<usize>,
    }

    /// Runs the full extraction pipeline for the given configuration.
    ///
    /// Reads the capture input, rebuilds the deduplicated endpoint set,
    /// applies the configured filters, and performs any requested exports.
    /// Each step runs to completion on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture input cannot be read or a requested
    /// export fails. Filtering and deduplication never fail: malformed
    /// exchanges degrade to default values or are skipped.
    pub fn run_extract(config: &Config) -> Result<ExtractReport> {
        let source = JsonlCapture::new(config.file.clone());
        let exchanges = source.fetch().context("Failed to read capture input")?;
        info!("Fetched {} captured exchanges", exchanges.len());

        let records = rebuild_index(&exchanges);
        info!("{} unique endpoints after deduplication", records.len());

        let spec = FilterSpec::from(config);
        let visible = apply_filter(&records, &spec);
        if !spec.is_unconstrained() {
            info!("{} of {} endpoints match the active filters", visible.len(), records.len());
        }

        let (csv_path, csv_rows) = match config.output.as_deref() {
            Some(output) => {
                let destination = if output.as_os_str() == "-" {
                    None
                } else {
                    Some(output)
                };
                let (path, rows) =
                    export_csv(&visible, destination).context("CSV export failed")?;
                (path, Some(rows))
            }
            None => (None, None),
        };

        let copied_rows = if config.copy {
            let selected: Vec<EndpointRecord> = match config.rows.as_deref() {
                Some(selection) => {
                    let indices = parse_row_selection(selection, visible.len())?;
                    indices.into_iter().map(|i| visible[i].clone()).collect()
                }
                None => visible.clone(),
            };
            Some(copy_to_clipboard(&selected).context("Clipboard export failed")?)
        } else {
            None
        };

        Ok(ExtractReport {
            total_exchanges: exchanges.len(),
            unique_endpoints: records.len(),
            visible,
            csv_path,
            csv_rows,
            copied_rows,
        })
    }
}
