//! Missing-value cleaning

use crate::config::ColumnsConfig;
use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;

/// Drop rows missing a required column, then fill the categorical column.
pub fn clean(table: &Table, columns: &ColumnsConfig) -> SheetflowResult<Table> {
    for name in &columns.required {
        table.column(name)?;
    }
    table.column(&columns.category)?;

    let present = columns
        .required
        .iter()
        .fold(lit(true), |acc, name| acc.and(col(name.as_str()).is_not_null()));
    let category = col(columns.category.as_str())
        .cast(DataType::String)
        .fill_null(lit(columns.placeholder.as_str()));

    let cleaned: Table = table
        .lazy()
        .filter(present)
        .with_column(category)
        .collect()?
        .into();

    tracing::info!(
        "Data cleaned successfully ({} rows dropped, {} remaining)",
        table.height() - cleaned.height(),
        cleaned.height()
    );
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetflowError;

    fn config() -> ColumnsConfig {
        ColumnsConfig::default()
    }

    fn vehicles() -> Table {
        Table::from(
            polars::df!(
                "VIN (1-10)" => &[Some("5YJ3E1EA1J"), None, Some("1N4AZ0CP8D"), Some("KNDCC3LG9L")],
                "DOL Vehicle ID" => &[Some(1i64), Some(2), None, Some(4)],
                "County" => &[Some("King"), Some("Pierce"), Some("Kitsap"), None],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_drops_rows_missing_required_columns() {
        let cleaned = clean(&vehicles(), &config()).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(
            cleaned.numeric("DOL Vehicle ID").unwrap(),
            vec![Some(1.0), Some(4.0)]
        );
    }

    #[test]
    fn test_fills_category_placeholder() {
        let cleaned = clean(&vehicles(), &config()).unwrap();
        assert_eq!(
            cleaned.text("County").unwrap(),
            vec![Some("King".to_string()), Some("Valor_Padrão".to_string())]
        );
    }

    #[test]
    fn test_no_nulls_remain_in_checked_columns() {
        let cleaned = clean(&vehicles(), &config()).unwrap();
        for name in ["VIN (1-10)", "DOL Vehicle ID", "County"] {
            assert_eq!(cleaned.column(name).unwrap().null_count(), 0, "{name}");
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let table = vehicles();
        let _ = clean(&table, &config()).unwrap();
        assert_eq!(table.height(), 4);
        assert_eq!(table.column("County").unwrap().null_count(), 1);
    }

    #[test]
    fn test_missing_column_propagates() {
        let table = Table::from(polars::df!("DOL Vehicle ID" => &[1i64]).unwrap());
        let err = clean(&table, &config()).unwrap_err();
        assert!(matches!(err, SheetflowError::ColumnNotFound { column, .. } if column == "VIN (1-10)"));
    }

    #[test]
    fn test_numeric_category_becomes_text() {
        let mut columns = config();
        columns.category = "Zip".into();
        let table = Table::from(
            polars::df!(
                "VIN (1-10)" => &["a", "b"],
                "DOL Vehicle ID" => &[1i64, 2],
                "Zip" => &[Some(98101i64), None],
            )
            .unwrap(),
        );
        let cleaned = clean(&table, &columns).unwrap();
        assert_eq!(cleaned.column("Zip").unwrap().dtype(), &DataType::String);
        assert_eq!(
            cleaned.text("Zip").unwrap(),
            vec![Some("98101".to_string()), Some("Valor_Padrão".to_string())]
        );
    }
}
