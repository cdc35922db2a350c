//! Constructor methods for SheetflowError

use super::types::SheetflowError;

impl SheetflowError {
    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(extension: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
            path: path.into(),
        }
    }

    /// Create a read error
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
            path: None,
        }
    }

    /// Create a read error bound to a path
    pub fn read_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a column lookup error listing the available columns
    pub fn column_not_found(column: impl Into<String>, available: &[&str]) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            available: available.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Create a data frame error
    pub fn frame(message: impl Into<String>) -> Self {
        Self::Frame {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            format: format.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Create a chart error
    pub fn chart(chart: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Chart {
            chart: chart.into(),
            message: message.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a console error
    pub fn console(message: impl Into<String>) -> Self {
        Self::Console {
            message: message.into(),
        }
    }

    /// Attach a path to errors that carry one
    pub fn with_path(mut self, new_path: impl Into<String>) -> Self {
        match &mut self {
            Self::Read { path, .. } | Self::Export { path, .. } | Self::Io { path, .. } => {
                *path = Some(new_path.into());
            }
            _ => {}
        }
        self
    }
}
