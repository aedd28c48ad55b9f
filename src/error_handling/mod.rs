//! Error types for the extraction pipeline.
//!
//! The core pipeline itself never raises a user-visible error: malformed
//! captures degrade to default values so a fetch always completes. Errors
//! exist only at the edges:
//! - **Initialization**: logger setup
//! - **Export**: file writes, clipboard access, row selection
//!
//! Export failures never touch the in-memory record snapshots; the operation
//! is reported and abandoned, not retried.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError};
