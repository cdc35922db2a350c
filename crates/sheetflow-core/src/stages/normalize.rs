//! Min-max normalization

use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;

/// Replace `column` with `(x - min) / (max - min)`.
///
/// A constant column yields NaN on every present row; nulls stay null.
pub fn normalize(table: &Table, column: &str) -> SheetflowResult<Table> {
    table.numeric_column(column)?;

    let x = col(column).cast(DataType::Float64);
    let scaled = ((x.clone() - x.clone().min()) / (x.clone().max() - x.min())).alias(column);
    let normalized: Table = table.lazy().with_column(scaled).collect()?.into();

    tracing::info!("Data normalized successfully (column '{}')", column);
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetflowError;

    fn table(values: &[Option<i64>]) -> Table {
        let rows: Vec<i64> = (0..values.len() as i64).collect();
        Table::from(polars::df!("id" => values, "row" => rows).unwrap())
    }

    #[test]
    fn test_scales_into_unit_interval() {
        let out = normalize(&table(&[Some(10), Some(20), Some(30), None]), "id").unwrap();
        assert_eq!(out.column("id").unwrap().dtype(), &DataType::Float64);
        assert_eq!(
            out.numeric("id").unwrap(),
            vec![Some(0.0), Some(0.5), Some(1.0), None]
        );
        assert_eq!(out.column_names(), vec!["id", "row"]);
    }

    #[test]
    fn test_all_values_within_bounds() {
        let values = [Some(7), Some(-3), Some(12), Some(0), Some(5)];
        let out = normalize(&table(&values), "id").unwrap();
        for v in out.numeric("id").unwrap().into_iter().flatten() {
            assert!((0.0..=1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_constant_column_yields_nan() {
        let out = normalize(&table(&[Some(4), Some(4), None]), "id").unwrap();
        let values = out.numeric("id").unwrap();
        assert!(values[0].unwrap().is_nan());
        assert!(values[1].unwrap().is_nan());
        assert_eq!(values[2], None);
    }

    #[test]
    fn test_text_column_is_type_mismatch() {
        let t = Table::from(polars::df!("County" => &["King"]).unwrap());
        assert!(matches!(
            normalize(&t, "County"),
            Err(SheetflowError::TypeMismatch { .. })
        ));
    }
}
