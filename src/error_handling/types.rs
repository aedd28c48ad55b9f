//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error creating or writing the destination file.
    #[error("Failed to write export file: {0}")]
    FileWriteError(#[from] std::io::Error),

    /// Error emitting CSV rows.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The system clipboard could not be opened or written.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// A row selection that is malformed or out of range.
    #[error("Invalid row selection: {0}")]
    SelectionError(String),
}
