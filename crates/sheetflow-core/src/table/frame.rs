//! Table wrapper around a polars frame

use super::value::Value;
use crate::error::{SheetflowError, SheetflowResult};
use polars::prelude::*;
use std::fmt;

/// Integer and float columns take part in numeric stages
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Ordered, uniquely named, equally long columns
#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
}

impl Table {
    /// Build a table, rejecting ragged or duplicate columns
    pub fn new(columns: Vec<Column>) -> SheetflowResult<Self> {
        Ok(Self {
            frame: DataFrame::new(columns)?,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Lazy query over a copy of the frame
    pub(crate) fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.frame
            .get_columns()
            .iter()
            .map(|c| c.name().as_str())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame
            .get_columns()
            .iter()
            .any(|c| c.name().as_str() == name)
    }

    /// Resolve a column reference against the current schema
    pub fn column(&self, name: &str) -> SheetflowResult<&Column> {
        self.frame
            .get_columns()
            .iter()
            .find(|c| c.name().as_str() == name)
            .ok_or_else(|| SheetflowError::column_not_found(name, &self.column_names()))
    }

    /// Like [`Table::column`], but the column must hold numbers
    pub fn numeric_column(&self, name: &str) -> SheetflowResult<&Column> {
        let column = self.column(name)?;
        if is_numeric(column.dtype()) {
            Ok(column)
        } else {
            Err(SheetflowError::type_mismatch(
                name,
                "numeric",
                column.dtype().to_string(),
            ))
        }
    }

    /// Numeric column as floats
    pub fn numeric(&self, name: &str) -> SheetflowResult<Vec<Option<f64>>> {
        let floats = self.numeric_column(name)?.cast(&DataType::Float64)?;
        Ok(floats.f64()?.into_iter().collect())
    }

    /// Any column rendered as text, nulls kept
    pub fn text(&self, name: &str) -> SheetflowResult<Vec<Option<String>>> {
        let strings = self.column(name)?.cast(&DataType::String)?;
        Ok(strings
            .str()?
            .into_iter()
            .map(|s| s.map(str::to_string))
            .collect())
    }

    /// Numeric columns in schema order
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.frame
            .get_columns()
            .iter()
            .filter(|c| is_numeric(c.dtype()))
    }

    pub fn head(&self, n: usize) -> Self {
        Self {
            frame: self.frame.head(Some(n)),
        }
    }

    /// Owned cells, one vector per row
    pub fn rows(&self) -> impl Iterator<Item = SheetflowResult<Vec<Value>>> + '_ {
        (0..self.height()).map(move |row| {
            self.frame
                .get_columns()
                .iter()
                .map(|c| c.get(row).map(Value::from).map_err(SheetflowError::from))
                .collect()
        })
    }

    /// Column names and types, one per line
    pub fn schema_report(&self) -> String {
        let width = self
            .column_names()
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);
        self.frame
            .get_columns()
            .iter()
            .map(|c| format!("{:<width$}  {}", c.name().as_str(), c.dtype(), width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<DataFrame> for Table {
    fn from(frame: DataFrame) -> Self {
        Self { frame }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame)
    }
}
