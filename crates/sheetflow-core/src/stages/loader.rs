//! Input loading for delimited files and spreadsheets

use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Cell text read as null in delimited files and spreadsheets
const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "#NA", "<NA>", "-1.#IND", "1.#QNAN",
];

/// Supported input families, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    /// Dispatch on the lower-cased extension
    pub fn from_path(path: &Path) -> SheetflowResult<Self> {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".csv" => Ok(Self::Csv),
            ".xls" | ".xlsx" => Ok(Self::Spreadsheet),
            _ => Err(SheetflowError::unsupported_format(
                extension,
                path.display().to_string(),
            )),
        }
    }
}

/// Read `path` into a table
pub fn load_table(path: &Path) -> SheetflowResult<Table> {
    let format = InputFormat::from_path(path)?;
    if !path.exists() {
        return Err(SheetflowError::file_not_found(path.display().to_string()));
    }

    let table = match format {
        InputFormat::Csv => read_csv(path),
        InputFormat::Spreadsheet => read_spreadsheet(path),
    }
    .map_err(|e| match e {
        SheetflowError::Read { message, .. } | SheetflowError::Frame { message } => {
            SheetflowError::read_at(message, path.display().to_string())
        }
        other => other,
    })?;

    tracing::info!(
        "File {} read successfully ({} rows, {} columns)",
        path.display(),
        table.height(),
        table.width()
    );
    Ok(table)
}

fn read_csv(path: &Path) -> SheetflowResult<Table> {
    let null_values = MISSING_MARKERS.iter().map(|m| (*m).into()).collect();
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(NullValues::AllColumns(null_values))),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .map_err(|e| SheetflowError::read(e.to_string()))?;
    Ok(Table::from(frame))
}

/// Spreadsheet cell after mapping from the workbook reader
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Missing,
            Data::Int(v) => Self::Int(*v),
            Data::Float(v) if v.is_nan() => Self::Missing,
            Data::Float(v) => Self::Float(*v),
            Data::Bool(v) => Self::Bool(*v),
            Data::String(s) if MISSING_MARKERS.contains(&s.trim()) => Self::Missing,
            Data::String(s) => Self::Text(s.trim().to_string()),
            other => Self::Text(other.to_string()),
        }
    }

    fn render(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Bool(b) => Some((if *b { "True" } else { "False" }).to_string()),
        }
    }
}

fn read_spreadsheet(path: &Path) -> SheetflowResult<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetflowError::read("workbook has no worksheets"))??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Table::from(DataFrame::empty()));
    };

    let headers = header_names(header_row.iter().map(|d| match Cell::from_data(d) {
        Cell::Missing => String::new(),
        cell => cell.render().unwrap_or_default(),
    }));
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(row.get(idx).map_or(Cell::Missing, Cell::from_data));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| infer_cell_column(name, cells))
        .collect();
    Table::new(columns)
}

/// Narrowest column type that holds every present cell
fn infer_cell_column(name: String, cells: Vec<Cell>) -> Column {
    let name = PlSmallStr::from(name);
    let present = || cells.iter().filter(|c| **c != Cell::Missing);

    let integral = |c: &Cell| match c {
        Cell::Int(_) => true,
        Cell::Float(v) => v.fract() == 0.0 && v.abs() < i64::MAX as f64,
        _ => false,
    };

    if present().all(integral) {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|c| match c {
                Cell::Int(v) => Some(*v),
                Cell::Float(v) => Some(*v as i64),
                _ => None,
            })
            .collect();
        return Column::new(name, values);
    }
    if present().all(|c| matches!(c, Cell::Int(_) | Cell::Float(_))) {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|c| match c {
                Cell::Int(v) => Some(*v as f64),
                Cell::Float(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Column::new(name, values);
    }
    if present().all(|c| matches!(c, Cell::Bool(_))) {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Cell::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        return Column::new(name, values);
    }
    let values: Vec<Option<String>> = cells.iter().map(Cell::render).collect();
    Column::new(name, values)
}

/// Fill blank headers and disambiguate repeated ones
fn header_names(raw: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.enumerate()
        .map(|(idx, name)| {
            let name = name.trim();
            let base = if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            };

            let mut candidate = base.clone();
            let mut suffix = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{base}.{suffix}");
                suffix += 1;
            }
            candidate
        })
        .collect()
}
