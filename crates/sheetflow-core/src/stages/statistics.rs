//! Descriptive statistics over numeric columns

use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;
use std::fmt;
use tabled::builder::Builder;

/// Row labels of a [`Summary`], in output order
pub const STAT_NAMES: [&str; 9] = [
    "count", "mean", "std", "min", "25%", "50%", "75%", "max", "median",
];

/// Statistics for one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
    pub median: Option<f64>,
}

impl ColumnSummary {
    /// Summarise the present, non-NaN values of a numeric column
    pub fn from_column(column: &Column) -> SheetflowResult<Self> {
        let floats = column.cast(&DataType::Float64)?;
        let present: Vec<f64> = floats
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();
        let values = Float64Chunked::from_vec(column.name().clone(), present);
        let count = values.len();

        Ok(Self {
            name: column.name().to_string(),
            count,
            mean: values.mean(),
            std: if count > 1 { values.std(1) } else { None },
            min: values.min(),
            q25: values.quantile(0.25, QuantileMethod::Linear)?,
            q50: values.quantile(0.5, QuantileMethod::Linear)?,
            q75: values.quantile(0.75, QuantileMethod::Linear)?,
            max: values.max(),
            median: values.median(),
        })
    }

    /// Value for a label from [`STAT_NAMES`]
    pub fn get(&self, stat: &str) -> Option<f64> {
        match stat {
            "count" => Some(self.count as f64),
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.q50,
            "75%" => self.q75,
            "max" => self.max,
            "median" => self.median,
            _ => None,
        }
    }
}

/// Describe-style summary, one entry per numeric input column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub columns: Vec<ColumnSummary>,
}

impl Summary {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.6}"))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return f.write_str("No numeric columns to describe");
        }

        let mut builder = Builder::default();
        builder.push_record(
            std::iter::once(String::new()).chain(self.columns.iter().map(|c| c.name.clone())),
        );
        for stat in STAT_NAMES {
            builder.push_record(
                std::iter::once(stat.to_string())
                    .chain(self.columns.iter().map(|c| format_stat(c.get(stat)))),
            );
        }
        write!(f, "{}", builder.build())
    }
}

/// Summarise every numeric column of `table`
pub fn describe(table: &Table) -> SheetflowResult<Summary> {
    let columns = table
        .numeric_columns()
        .map(ColumnSummary::from_column)
        .collect::<SheetflowResult<Vec<_>>>()?;
    let summary = Summary { columns };

    tracing::info!(
        "Statistical analysis completed ({} numeric columns)",
        summary.columns.len()
    );
    Ok(summary)
}
