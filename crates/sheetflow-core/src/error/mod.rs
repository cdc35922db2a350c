//! Error types for sheetflow
//!
//! Every fallible operation in the core crate returns [`SheetflowResult`].
//! Errors implement the [`UnifiedError`] trait which provides:
//! - error_code: A stable identifier for programmatic handling
//! - message: Human-readable error message
//! - exit_code: Process exit status used when the error is fatal

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{SheetflowError, SheetflowResult, UnifiedError};
