//! SQLite output

use super::{TableEncoder, export_error};
use crate::error::SheetflowResult;
use crate::table::{Table, Value};
use polars::prelude::DataType;
use rusqlite::{Connection, params_from_iter, types::Value as SqlValue};
use std::path::Path;

/// Replaces `table_name` in the target database with the table's rows
#[derive(Debug, Clone)]
pub struct SqliteEncoder {
    table_name: String,
}

impl SqliteEncoder {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_type(dtype: &DataType) -> &'static str {
    if dtype.is_integer() || matches!(dtype, DataType::Boolean) {
        "INTEGER"
    } else if dtype.is_float() {
        "REAL"
    } else {
        "TEXT"
    }
}

fn to_sql(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Int(v) => SqlValue::Integer(v),
        Value::Float(v) if v.is_nan() => SqlValue::Null,
        Value::Float(v) => SqlValue::Real(v),
        Value::Text(s) => SqlValue::Text(s),
        Value::Bool(b) => SqlValue::Integer(i64::from(b)),
    }
}

impl TableEncoder for SqliteEncoder {
    fn format_name(&self) -> &str {
        "SQLite"
    }

    fn encode(&self, table: &Table, path: &Path) -> SheetflowResult<()> {
        if table.width() == 0 {
            return Err(export_error(
                self.format_name(),
                path,
                "cannot create a table without columns",
            ));
        }
        let fail = |e: rusqlite::Error| export_error(self.format_name(), path, e);

        let target = quote_identifier(&self.table_name);
        let definitions: Vec<String> = table
            .frame()
            .get_columns()
            .iter()
            .map(|c| format!("{} {}", quote_identifier(c.name().as_str()), sql_type(c.dtype())))
            .collect();
        let names: Vec<String> = table
            .column_names()
            .into_iter()
            .map(quote_identifier)
            .collect();
        let placeholders = vec!["?"; table.width()].join(", ");

        let mut conn = Connection::open(path).map_err(fail)?;
        let tx = conn.transaction().map_err(fail)?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {target}; CREATE TABLE {target} ({});",
            definitions.join(", ")
        ))
        .map_err(fail)?;
        {
            let mut insert = tx
                .prepare(&format!(
                    "INSERT INTO {target} ({}) VALUES ({placeholders})",
                    names.join(", ")
                ))
                .map_err(fail)?;
            for row in table.rows() {
                insert
                    .execute(params_from_iter(row?.into_iter().map(to_sql)))
                    .map_err(fail)?;
            }
        }
        tx.commit().map_err(fail)?;

        tracing::debug!(
            "Wrote {} rows into SQLite table {}",
            table.height(),
            self.table_name
        );
        Ok(())
    }
}
