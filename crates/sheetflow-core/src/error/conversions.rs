//! From trait implementations for SheetflowError conversions

use super::types::SheetflowError;
use polars::prelude::PolarsError;

impl From<std::io::Error> for SheetflowError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for SheetflowError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<PolarsError> for SheetflowError {
    fn from(error: PolarsError) -> Self {
        match &error {
            PolarsError::Duplicate(_) | PolarsError::ShapeMismatch(_) => {
                Self::shape(error.to_string())
            }
            _ => Self::frame(error.to_string()),
        }
    }
}

impl From<calamine::Error> for SheetflowError {
    fn from(error: calamine::Error) -> Self {
        Self::read(error.to_string())
    }
}

impl From<rusqlite::Error> for SheetflowError {
    fn from(error: rusqlite::Error) -> Self {
        Self::export("SQLite", error.to_string())
    }
}

impl From<toml::de::Error> for SheetflowError {
    fn from(error: toml::de::Error) -> Self {
        Self::config_with_context(error.to_string(), "parsing TOML configuration")
    }
}
