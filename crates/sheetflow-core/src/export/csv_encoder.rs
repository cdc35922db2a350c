//! Comma-separated output

use super::{TableEncoder, export_error};
use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Header row followed by one record per table row, no index column
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl TableEncoder for CsvEncoder {
    fn format_name(&self) -> &str {
        "CSV"
    }

    fn encode(&self, table: &Table, path: &Path) -> SheetflowResult<()> {
        let fail = |e: PolarsError| export_error(self.format_name(), path, e);

        // NaN is written as an empty cell, same as null
        let blanks: Vec<Expr> = table
            .frame()
            .get_columns()
            .iter()
            .filter(|c| c.dtype().is_float())
            .map(|c| col(c.name().clone()).fill_nan(lit(NULL)))
            .collect();
        let mut frame = if blanks.is_empty() {
            table.frame().clone()
        } else {
            table.lazy().with_columns(blanks).collect().map_err(fail)?
        };

        let mut file =
            File::create(path).map_err(|e| export_error(self.format_name(), path, e))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(fail)
    }
}
