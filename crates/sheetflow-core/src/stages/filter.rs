//! Threshold filtering

use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;

/// Keep rows whose `column` value is strictly below `threshold`.
///
/// Null and NaN never pass the comparison.
pub fn filter_below(table: &Table, column: &str, threshold: f64) -> SheetflowResult<Table> {
    table.numeric_column(column)?;

    let x = col(column).cast(DataType::Float64);
    let below = x.clone().is_not_nan().and(x.lt(lit(threshold)));
    let filtered: Table = table.lazy().filter(below).collect()?.into();

    tracing::info!(
        "Filters applied successfully ({} of {} rows kept)",
        filtered.height(),
        table.height()
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn table() -> Table {
        Table::from(
            polars::df!(
                "x" => &[Some(0.2), Some(12.0), None, Some(f64::NAN), Some(10.0), Some(-1.0)],
                "row" => &[0i64, 1, 2, 3, 4, 5],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_keeps_only_rows_below_threshold() {
        let out = filter_below(&table(), "x", 10.0).unwrap();
        assert_eq!(out.numeric("row").unwrap(), vec![Some(0.0), Some(5.0)]);
        for v in out.numeric("x").unwrap().into_iter().flatten() {
            assert!(v < 10.0);
        }
    }

    #[test]
    fn test_result_is_subset_in_order() {
        let input = table();
        let out = filter_below(&input, "x", 100.0).unwrap();
        assert_eq!(out.height(), 4);

        let rows: Vec<Vec<Value>> = out.rows().collect::<SheetflowResult<_>>().unwrap();
        assert_eq!(rows[0], vec![Value::Float(0.2), Value::Int(0)]);
        assert_eq!(rows[3], vec![Value::Float(-1.0), Value::Int(5)]);
    }

    #[test]
    fn test_missing_column() {
        assert!(filter_below(&table(), "nope", 1.0).is_err());
    }
}
