//! Group-by mean aggregation

use crate::error::SheetflowResult;
use crate::table::Table;
use polars::prelude::*;

/// Output naming for [`group_mean`]
#[derive(Debug, Clone)]
pub struct GroupMeanSpec<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub mean_column: &'a str,
    pub scaled_column: &'a str,
    pub scale_factor: f64,
}

/// Mean of `value` per distinct `key`, plus a scaled copy of the mean.
///
/// Rows with a missing key are excluded and groups come out ordered by key.
/// A group with no present values gets a null mean.
pub fn group_mean(table: &Table, spec: &GroupMeanSpec<'_>) -> SheetflowResult<Table> {
    table.column(spec.key)?;
    table.numeric_column(spec.value)?;

    let grouped: Table = table
        .lazy()
        .filter(col(spec.key).is_not_null())
        .group_by([col(spec.key)])
        .agg([col(spec.value)
            .cast(DataType::Float64)
            .mean()
            .alias(spec.mean_column)])
        .sort_by_exprs([col(spec.key)], SortMultipleOptions::default())
        .with_column((col(spec.mean_column) * lit(spec.scale_factor)).alias(spec.scaled_column))
        .collect()?
        .into();

    tracing::info!(
        "Data grouped by '{}' into {} groups",
        spec.key,
        grouped.height()
    );
    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GroupMeanSpec<'static> {
        GroupMeanSpec {
            key: "County",
            value: "v",
            mean_column: "Media_DOL_Vehicle_ID",
            scaled_column: "D",
            scale_factor: 1.5,
        }
    }

    fn table() -> Table {
        Table::from(
            polars::df!(
                "County" => &[Some("King"), Some("Adams"), Some("King"), None, Some("Adams"), Some("Yakima")],
                "v" => &[Some(0.1), Some(0.4), Some(0.3), Some(9.0), Some(0.8), None],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_groups_are_sorted_by_key() {
        let out = group_mean(&table(), &spec()).unwrap();
        assert_eq!(out.column_names(), vec!["County", "Media_DOL_Vehicle_ID", "D"]);
        assert_eq!(
            out.text("County").unwrap(),
            vec![
                Some("Adams".to_string()),
                Some("King".to_string()),
                Some("Yakima".to_string())
            ]
        );
    }

    #[test]
    fn test_means_match_arithmetic_mean() {
        let out = group_mean(&table(), &spec()).unwrap();
        let means = out.numeric("Media_DOL_Vehicle_ID").unwrap();
        assert!((means[0].unwrap() - 0.6).abs() < 1e-12);
        assert!((means[1].unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(means[2], None);
    }

    #[test]
    fn test_scaled_column_is_exact_multiple() {
        let out = group_mean(&table(), &spec()).unwrap();
        let means = out.numeric("Media_DOL_Vehicle_ID").unwrap();
        let scaled = out.numeric("D").unwrap();
        for (m, d) in means.iter().zip(&scaled) {
            assert_eq!(m.map(|m| m * 1.5), *d);
        }
    }

    #[test]
    fn test_key_dtype_is_preserved() {
        let t = Table::from(
            polars::df!(
                "County" => &[3i64, 1, 3],
                "v" => &[1i64, 2, 5],
            )
            .unwrap(),
        );
        let out = group_mean(&t, &spec()).unwrap();
        assert_eq!(out.column("County").unwrap().dtype(), &DataType::Int64);
        assert_eq!(
            out.numeric("Media_DOL_Vehicle_ID").unwrap(),
            vec![Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_groups() {
        let t = table().head(0);
        let out = group_mean(&t, &spec()).unwrap();
        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn test_text_value_column_is_rejected() {
        let mut spec = spec();
        spec.value = "County";
        assert!(group_mean(&table(), &spec).is_err());
    }
}
