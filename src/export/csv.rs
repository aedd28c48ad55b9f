//! CSV export functionality.
//!
//! Writes the visible record set as comma-separated values, one row per
//! record in display order, header row first. Fields containing the
//! delimiter, quote character, or line breaks are quoted with embedded
//! quotes doubled (the `csv` crate's RFC 4180 defaults).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::ExportError;
use crate::models::{Column, EndpointRecord};

/// Forces a `.csv` extension on a user-supplied destination name.
fn force_csv_extension(path: &Path) -> PathBuf {
    let name = path.to_string_lossy();
    if name.to_lowercase().ends_with(".csv") {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{name}.csv"))
    }
}

/// Exports records to CSV.
///
/// Writes to `output` (its extension forced to `.csv`), or to stdout when
/// `output` is `None`. Every field is written in textual form, including the
/// serial number.
///
/// # Returns
///
/// The destination path actually written (if any) and the number of record
/// rows emitted, excluding the header.
///
/// # Errors
///
/// Returns an `ExportError` if the destination cannot be created or a row
/// cannot be written. In-memory state is unaffected by a failed export.
pub fn export_csv(
    records: &[EndpointRecord],
    output: Option<&Path>,
) -> Result<(Option<PathBuf>, usize), ExportError> {
    let destination = output.map(force_csv_extension);

    let mut writer: Writer<Box<dyn Write>> = match destination.as_deref() {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            Writer::from_writer(Box::new(file) as Box<dyn Write>)
        }
        None => Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>),
    };

    writer.write_record(Column::iter().map(Column::title))?;

    for record in records {
        writer.write_record(Column::iter().map(|column| record.column_text(column).into_owned()))?;
    }

    writer.flush().map_err(ExportError::FileWriteError)?;

    if let Some(path) = destination.as_deref() {
        info!("Exported {} rows to {}", records.len(), path.display());
    }

    Ok((destination, records.len()))
}
