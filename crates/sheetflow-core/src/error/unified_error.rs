//! UnifiedError trait implementation for SheetflowError

use super::types::{SheetflowError, UnifiedError};

impl UnifiedError for SheetflowError {
    fn error_code(&self) -> &str {
        match self {
            Self::FileNotFound { .. } => "SHEETFLOW_FILE_NOT_FOUND",
            Self::UnsupportedFormat { .. } => "SHEETFLOW_UNSUPPORTED_FORMAT",
            Self::Read { .. } => "SHEETFLOW_READ",
            Self::ColumnNotFound { .. } => "SHEETFLOW_COLUMN_NOT_FOUND",
            Self::TypeMismatch { .. } => "SHEETFLOW_TYPE_MISMATCH",
            Self::ShapeMismatch { .. } => "SHEETFLOW_SHAPE_MISMATCH",
            Self::Frame { .. } => "SHEETFLOW_FRAME",
            Self::Export { .. } => "SHEETFLOW_EXPORT",
            Self::Chart { .. } => "SHEETFLOW_CHART",
            Self::Io { .. } => "SHEETFLOW_IO",
            Self::Json { .. } => "SHEETFLOW_JSON",
            Self::Config { .. } => "SHEETFLOW_CONFIG",
            Self::Console { .. } => "SHEETFLOW_CONSOLE",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::FileNotFound { path } => path,
            Self::UnsupportedFormat { extension, .. } => extension,
            Self::Read { message, .. } => message,
            Self::ColumnNotFound { column, .. } => column,
            Self::TypeMismatch { column, .. } => column,
            Self::ShapeMismatch { message } => message,
            Self::Frame { message } => message,
            Self::Export { message, .. } => message,
            Self::Chart { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message } => message,
            Self::Config { message, .. } => message,
            Self::Console { message } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Read { path, .. } | Self::Export { path, .. } => path.as_deref(),
            Self::UnsupportedFormat { path, .. } => Some(path),
            Self::Io { context, path, .. } => context.as_deref().or(path.as_deref()),
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }
}

impl SheetflowError {
    /// Whether the runner may log this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Chart { .. })
    }
}
