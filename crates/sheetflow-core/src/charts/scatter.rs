//! Scatter plot of two numeric columns

use super::{CHART_SIZE, ChartKind, chart_column, draw_error, file_component, padded_range};
use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Rows where both columns hold a non-NaN number
pub fn scatter_points(table: &Table, x: &str, y: &str) -> SheetflowResult<Vec<(f64, f64)>> {
    let xs = chart_column(table, x, ChartKind::Scatter)?;
    let ys = chart_column(table, y, ChartKind::Scatter)?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .filter_map(|pair| match pair {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((a, b)),
            _ => None,
        })
        .collect())
}

/// Draw `scatter_<x>_vs_<y>.png` in `output_dir`
pub fn scatter_plot(table: &Table, x: &str, y: &str, output_dir: &Path) -> SheetflowResult<PathBuf> {
    let points = scatter_points(table, x, y)?;
    if points.is_empty() {
        return Err(SheetflowError::chart(
            ChartKind::Scatter.label(),
            format!("no rows with values in both '{x}' and '{y}'"),
        ));
    }

    let path = output_dir.join(format!(
        "scatter_{}_vs_{}.png",
        file_component(x),
        file_component(y)
    ));
    let fail = |e| draw_error(ChartKind::Scatter, e);

    let bounds = |axis: fn(&(f64, f64)) -> f64| {
        let low = points.iter().map(axis).fold(f64::INFINITY, f64::min);
        let high = points.iter().map(axis).fold(f64::NEG_INFINITY, f64::max);
        padded_range(low, high)
    };
    let x_range = bounds(|p| p.0);
    let y_range = bounds(|p| p.1);

    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(fail)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{x} vs {y}"), ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(fail)?;

        chart
            .configure_mesh()
            .x_desc(x)
            .y_desc(y)
            .draw()
            .map_err(fail)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(a, b)| Circle::new((a, b), 3, RED.mix(0.6).filled())),
            )
            .map_err(fail)?;

        root.present().map_err(fail)?;
    }
    tracing::info!("Scatter plot {} vs {} saved to {}", x, y, path.display());
    Ok(path)
}
