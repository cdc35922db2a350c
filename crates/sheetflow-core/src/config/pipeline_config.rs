//! Pipeline configuration: column names, thresholds and output naming

use crate::error::{SheetflowError, SheetflowResult};
use serde::{Deserialize, Serialize};

/// Column references used by the cleaning and aggregation stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Rows missing any of these are dropped
    pub required: Vec<String>,
    /// Categorical column filled with `placeholder` and used as group key
    pub category: String,
    /// Numeric column that is normalized, filtered, logged and averaged
    pub value: String,
    /// Replacement for missing categorical values
    pub placeholder: String,
    /// Name of the natural-log column
    pub log_column: String,
    /// Name of the per-group mean column
    pub mean_column: String,
    /// Name of the scaled mean column
    pub scaled_column: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            required: vec!["VIN (1-10)".to_string(), "DOL Vehicle ID".to_string()],
            category: "County".to_string(),
            value: "DOL Vehicle ID".to_string(),
            placeholder: "Valor_Padrão".to_string(),
            log_column: "E".to_string(),
            mean_column: "Media_DOL_Vehicle_ID".to_string(),
            scaled_column: "D".to_string(),
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub columns: ColumnsConfig,
    /// Rows with a normalized value at or above this are dropped
    pub threshold: f64,
    /// Multiplier applied to the group mean
    pub scale_factor: f64,
    /// Groups shown in the bar chart
    pub top_n: usize,
    /// Histogram bin count
    pub histogram_bins: usize,
    /// Rows printed in previews and in the report
    pub preview_rows: usize,
    /// Table written to the SQLite export
    pub sqlite_table: String,
    /// Answer yes to every overwrite prompt
    pub assume_yes: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            columns: ColumnsConfig::default(),
            threshold: 10.0,
            scale_factor: 1.5,
            top_n: 10,
            histogram_bins: 30,
            preview_rows: 5,
            sqlite_table: "processed_data".to_string(),
            assume_yes: false,
        }
    }
}

impl PipelineConfig {
    /// Reject settings no stage can work with
    pub fn validate(&self) -> SheetflowResult<()> {
        if !self.threshold.is_finite() {
            return Err(SheetflowError::config("threshold must be a finite number"));
        }
        if !self.scale_factor.is_finite() {
            return Err(SheetflowError::config("scale_factor must be a finite number"));
        }
        if self.histogram_bins == 0 {
            return Err(SheetflowError::config("histogram_bins must be at least 1"));
        }
        if self.top_n == 0 {
            return Err(SheetflowError::config("top_n must be at least 1"));
        }
        if self.sqlite_table.trim().is_empty() {
            return Err(SheetflowError::config("sqlite_table must not be empty"));
        }

        let columns = &self.columns;
        let names = [
            ("columns.category", &columns.category),
            ("columns.value", &columns.value),
            ("columns.log_column", &columns.log_column),
            ("columns.mean_column", &columns.mean_column),
            ("columns.scaled_column", &columns.scaled_column),
        ];
        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(SheetflowError::config_with_context(
                    format!("{field} must not be empty"),
                    field,
                ));
            }
        }
        if columns.required.iter().any(|c| c.trim().is_empty()) {
            return Err(SheetflowError::config(
                "columns.required must not contain empty names",
            ));
        }
        // Each pair names columns that coexist in the same table
        let distinct = [
            (names[0], names[1]),
            (names[0], names[2]),
            (names[0], names[3]),
            (names[0], names[4]),
            (names[1], names[2]),
            (names[3], names[4]),
        ];
        for ((left, a), (right, b)) in distinct {
            if a == b {
                return Err(SheetflowError::config_with_context(
                    format!("{left} and {right} must differ (both are '{a}')"),
                    left,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_vehicle_dataset() {
        let config = PipelineConfig::default();
        assert_eq!(config.columns.required, vec!["VIN (1-10)", "DOL Vehicle ID"]);
        assert_eq!(config.columns.category, "County");
        assert_eq!(config.threshold, 10.0);
        assert_eq!(config.scale_factor, 1.5);
        assert_eq!(config.histogram_bins, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let config = PipelineConfig {
            histogram_bins: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_threshold() {
        let config = PipelineConfig {
            threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    fn clash(edit: impl FnOnce(&mut ColumnsConfig)) -> String {
        let mut config = PipelineConfig::default();
        edit(&mut config.columns);
        match config.validate() {
            Err(SheetflowError::Config { message, .. }) => message,
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_clashing_output_columns() {
        let message = clash(|c| c.scaled_column = c.mean_column.clone());
        assert!(message.contains("columns.mean_column and columns.scaled_column"));
    }

    #[test]
    fn test_validate_rejects_category_collisions() {
        assert!(clash(|c| c.mean_column = c.category.clone()).contains("columns.mean_column"));
        assert!(clash(|c| c.scaled_column = c.category.clone()).contains("columns.scaled_column"));
        assert!(clash(|c| c.log_column = c.category.clone()).contains("columns.log_column"));
        assert!(clash(|c| c.value = c.category.clone()).contains("columns.value"));
    }

    #[test]
    fn test_validate_rejects_log_column_over_value() {
        let message = clash(|c| c.log_column = c.value.clone());
        assert_eq!(
            message,
            "columns.value and columns.log_column must differ (both are 'DOL Vehicle ID')"
        );
    }

    #[test]
    fn test_mean_column_may_reuse_value_name() {
        let mut config = PipelineConfig::default();
        config.columns.mean_column = config.columns.value.clone();
        assert!(config.validate().is_ok());
    }
}
