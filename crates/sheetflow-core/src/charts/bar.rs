//! Bar chart of the largest grouped means

use super::{CHART_SIZE, ChartKind, chart_column, draw_error};
use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "bar_chart.png";

/// Top `n` `(label, value)` pairs by `value`, largest first; missing values are dropped
pub fn top_groups(
    table: &Table,
    category: &str,
    value: &str,
    n: usize,
) -> SheetflowResult<Vec<(String, f64)>> {
    let labels = table
        .text(category)
        .map_err(|e| SheetflowError::chart(ChartKind::Bar.label(), e.to_string()))?;
    let values = chart_column(table, value, ChartKind::Bar)?;

    let mut groups: Vec<(String, f64)> = labels
        .into_iter()
        .zip(values)
        .filter_map(|(label, v)| {
            v.filter(|v| !v.is_nan())
                .map(|v| (label.unwrap_or_default(), v))
        })
        .collect();
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    groups.truncate(n);
    Ok(groups)
}

/// Draw `bar_chart.png` in `output_dir`
pub fn bar_chart(
    table: &Table,
    category: &str,
    value: &str,
    top_n: usize,
    output_dir: &Path,
) -> SheetflowResult<PathBuf> {
    let groups = top_groups(table, category, value, top_n)?;
    if groups.is_empty() {
        return Err(SheetflowError::chart(
            ChartKind::Bar.label(),
            format!("column '{value}' has no values to plot"),
        ));
    }

    let path = output_dir.join(FILE_NAME);
    let fail = |e| draw_error(ChartKind::Bar, e);

    let low = groups.iter().map(|g| g.1).fold(0.0_f64, f64::min);
    let high = groups.iter().map(|g| g.1).fold(0.0_f64, f64::max);
    let span = if high > low { high - low } else { 1.0 };
    let y_range = (low - span * 0.05).min(0.0)..(high + span * 0.05);

    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(fail)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Top {top_n} {category} by {value}"), ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(80)
            .y_label_area_size(70)
            .build_cartesian_2d((0..groups.len() as i32).into_segmented(), y_range)
            .map_err(fail)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(category)
            .y_desc(value)
            .x_labels(groups.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => groups
                    .get(*i as usize)
                    .map(|g| g.0.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(fail)?;

        chart
            .draw_series(groups.iter().enumerate().map(|(i, (_, v))| {
                let i = i as i32;
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
                    BLUE.mix(0.7).filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            }))
            .map_err(fail)?;

        root.present().map_err(fail)?;
    }
    tracing::info!("Bar chart saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn grouped() -> Table {
        Table::from(
            polars::df!(
                "County" => &["A", "B", "C", "D"],
                "m" => &[Some(1.0), Some(f64::NAN), Some(3.0), Some(2.0)],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_top_groups_descending_without_missing() {
        let top = top_groups(&grouped(), "County", "m", 10).unwrap();
        assert_eq!(
            top,
            vec![("C".to_string(), 3.0), ("D".to_string(), 2.0), ("A".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_top_groups_truncates() {
        let top = top_groups(&grouped(), "County", "m", 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "C");
    }

    #[test]
    fn test_missing_columns_are_chart_errors() {
        assert!(matches!(
            top_groups(&grouped(), "Nope", "m", 10),
            Err(SheetflowError::Chart { .. })
        ));
        assert!(matches!(
            bar_chart(&grouped(), "County", "Nope", 10, Path::new(".")),
            Err(SheetflowError::Chart { .. })
        ));
    }

    #[test]
    fn test_bar_chart_writes_png() {
        let dir = TempDir::new().unwrap();
        let path = bar_chart(&grouped(), "County", "m", 10, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("bar_chart.png"));
        assert!(path.is_file());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
