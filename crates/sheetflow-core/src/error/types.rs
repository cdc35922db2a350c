//! Core error types and traits for sheetflow

use thiserror::Error;

/// Result type alias for sheetflow operations
pub type SheetflowResult<T> = Result<T, SheetflowError>;

/// Unified error trait implemented by [`SheetflowError`].
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
/// - exit_code(): Process status to use when the error terminates the run
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Exit status for the process when this error is fatal
    fn exit_code(&self) -> i32 {
        1
    }
}

/// Main error type for sheetflow
#[derive(Error, Debug, Clone)]
pub enum SheetflowError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input extension is neither delimited nor spreadsheet
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String, path: String },

    /// Input exists but could not be parsed
    #[error("Error reading file: {message}")]
    Read {
        message: String,
        path: Option<String>,
    },

    /// Column reference not present in the current schema
    #[error("Column '{column}' not found")]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Column exists but holds the wrong kind of values
    #[error("Column '{column}' has type {found}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },

    /// Columns of different lengths or duplicate names
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// Data frame operation rejected by the query engine
    #[error("Data frame error: {message}")]
    Frame { message: String },

    /// Encoding the table to an output format failed
    #[error("{format} export failed: {message}")]
    Export {
        format: String,
        message: String,
        path: Option<String>,
    },

    /// Chart could not be produced
    #[error("Chart error: {chart}: {message}")]
    Chart { chart: String, message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Console interaction failed
    #[error("Console error: {message}")]
    Console { message: String },
}
