//! Configuration loading from TOML files

use super::{LoggingConfig, PipelineConfig};
use crate::error::{SheetflowError, SheetflowResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file layout
///
/// ```toml
/// [pipeline]
/// threshold = 10.0
///
/// [pipeline.columns]
/// category = "County"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration text
    pub fn from_toml_str(text: &str) -> SheetflowResult<Self> {
        let config: Config = toml::from_str(text)?;
        config.pipeline.validate()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> SheetflowResult<Self> {
        let Some(path) = path else {
            tracing::debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(SheetflowError::config_with_context(
                format!("Configuration file not found: {}", path.display()),
                "loading configuration",
            ));
        }

        let text = fs::read_to_string(path)
            .map_err(|e| SheetflowError::io_with_path(e.to_string(), path.display().to_string()))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [pipeline]
            threshold = 0.5

            [pipeline.columns]
            category = "City"
            "#,
        )
        .unwrap();
        assert_eq!(config.pipeline.threshold, 0.5);
        assert_eq!(config.pipeline.columns.category, "City");
        assert_eq!(config.pipeline.columns.value, "DOL Vehicle ID");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Some(Path::new("/nonexistent/sheetflow.toml"))).unwrap_err();
        assert!(matches!(err, SheetflowError::Config { .. }));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_toml_str("[pipeline]\nhistogram_bins = 0").is_err());
        assert!(Config::from_toml_str("[pipeline]\nthreshold = \"ten\"").is_err());
    }
}
