//! Spreadsheet (xlsx) output

use super::{TableEncoder, export_error};
use crate::error::SheetflowResult;
use crate::table::{Table, Value};
use simple_excel_writer::{Row, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Sheet1";

/// Single-sheet workbook with a header row, no index column
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxEncoder;

fn push_cell(row: &mut Row, value: Value) {
    match value {
        Value::Null => row.add_cell(()),
        Value::Float(v) if !v.is_finite() => row.add_cell(()),
        Value::Float(v) => row.add_cell(v),
        Value::Int(v) => row.add_cell(v as f64),
        Value::Text(s) => row.add_cell(s),
        Value::Bool(b) => row.add_cell(b),
    }
}

impl TableEncoder for XlsxEncoder {
    fn format_name(&self) -> &str {
        "Excel"
    }

    fn encode(&self, table: &Table, path: &Path) -> SheetflowResult<()> {
        let fail = |e: std::io::Error| export_error(self.format_name(), path, e);

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if parent.is_some_and(|p| !p.is_dir()) {
            return Err(export_error(
                self.format_name(),
                path,
                "destination directory does not exist",
            ));
        }
        let target = path
            .to_str()
            .ok_or_else(|| export_error(self.format_name(), path, "path is not valid UTF-8"))?;

        let rows = table.rows().collect::<SheetflowResult<Vec<_>>>()?;
        let mut workbook = Workbook::create(target);
        let mut sheet = workbook.create_sheet(SHEET_NAME);
        workbook
            .write_sheet(&mut sheet, |writer| {
                let mut header = Row::new();
                for name in table.column_names() {
                    header.add_cell(name.to_string());
                }
                writer.append_row(header)?;

                for values in &rows {
                    let mut row = Row::new();
                    for value in values.iter().cloned() {
                        push_cell(&mut row, value);
                    }
                    writer.append_row(row)?;
                }
                Ok(())
            })
            .map_err(fail)?;
        workbook.close().map_err(fail)?;
        Ok(())
    }
}
