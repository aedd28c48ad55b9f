//! Application initialization.
//!
//! This module provides logger setup for the CLI binary. Library callers
//! that bring their own logger can skip it entirely.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
