//! JSON-lines output

use super::{TableEncoder, export_error};
use crate::error::SheetflowResult;
use crate::table::{Table, Value};
use serde_json::{Map, Number, Value as JsonValue};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One JSON object per line, keys in column order
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesEncoder;

impl JsonLinesEncoder {
    fn record(names: &[&str], row: Vec<Value>) -> JsonValue {
        let fields: Map<String, JsonValue> = names
            .iter()
            .zip(row)
            .map(|(name, value)| (name.to_string(), to_json(value)))
            .collect();
        JsonValue::Object(fields)
    }
}

/// Null and non-finite floats become JSON null
fn to_json(value: Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Int(v) => JsonValue::from(v),
        Value::Float(v) => Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s),
        Value::Bool(b) => JsonValue::Bool(b),
    }
}

impl TableEncoder for JsonLinesEncoder {
    fn format_name(&self) -> &str {
        "JSON"
    }

    fn encode(&self, table: &Table, path: &Path) -> SheetflowResult<()> {
        let fail = |e: std::io::Error| export_error(self.format_name(), path, e);

        let names = table.column_names();
        let mut out = BufWriter::new(File::create(path).map_err(fail)?);
        for row in table.rows() {
            let line = serde_json::to_string(&Self::record(&names, row?))?;
            writeln!(out, "{line}").map_err(fail)?;
        }
        out.flush().map_err(fail)
    }
}
