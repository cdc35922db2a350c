//! Derived log column

use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;
use std::f64::consts::E;

/// Add `target` = ln(`source`) for positive values, null otherwise
pub fn log_transform(table: &Table, source: &str, target: &str) -> SheetflowResult<Table> {
    table.numeric_column(source)?;

    let x = col(source).cast(DataType::Float64);
    let positive = x.clone().is_not_nan().and(x.clone().gt(lit(0.0)));
    let derived = when(positive)
        .then(x.log(E))
        .otherwise(lit(NULL))
        .cast(DataType::Float64)
        .alias(target);
    let transformed: Table = table.lazy().with_column(derived).collect()?.into();

    tracing::info!("Data transformed successfully (column '{}' = ln('{}'))", target, source);
    Ok(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_of_positive_values_only() {
        let table = Table::from(
            polars::df!(
                "x" => &[Some(E), Some(0.0), Some(-2.0), None, Some(f64::NAN), Some(1.0)],
            )
            .unwrap(),
        );
        let out = log_transform(&table, "x", "E").unwrap();
        let derived = out.numeric("E").unwrap();

        assert!((derived[0].unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(derived[1], None);
        assert_eq!(derived[2], None);
        assert_eq!(derived[3], None);
        assert_eq!(derived[4], None);
        assert_eq!(derived[5], Some(0.0));
        assert_eq!(out.column_names(), vec!["x", "E"]);
    }

    #[test]
    fn test_accepts_integer_columns() {
        let table = Table::from(polars::df!("n" => &[1i64, 0]).unwrap());
        let out = log_transform(&table, "n", "ln_n").unwrap();
        assert_eq!(out.numeric("ln_n").unwrap(), vec![Some(0.0), None]);
    }
}
