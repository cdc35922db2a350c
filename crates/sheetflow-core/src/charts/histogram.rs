//! Equal-width histogram of one numeric column

use super::{CHART_SIZE, ChartKind, chart_column, draw_error, file_component};
use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// One bin over `[start, end)`; the last bin also includes `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split `[min, max]` of the non-NaN values into `bins` equal-width bins.
///
/// A single distinct value is centred in a range of width one.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut low = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - low) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: low + width * i as f64,
            end: if i + 1 == bins {
                high
            } else {
                low + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Draw `histogram_<column>.png` in `output_dir`
pub fn histogram(
    table: &Table,
    column: &str,
    bins: usize,
    output_dir: &Path,
) -> SheetflowResult<PathBuf> {
    let values: Vec<f64> = chart_column(table, column, ChartKind::Histogram)?
        .into_iter()
        .flatten()
        .collect();
    let bins = histogram_bins(&values, bins);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err(SheetflowError::chart(
            ChartKind::Histogram.label(),
            format!("column '{column}' has no values to plot"),
        ));
    };

    let path = output_dir.join(format!("histogram_{}.png", file_component(column)));
    let fail = |e| draw_error(ChartKind::Histogram, e);
    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0);

    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(fail)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Histogram of {column}"), ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(first.start..last.end, 0.0..(tallest as f64 * 1.1).max(1.0))
            .map_err(fail)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(column)
            .y_desc("Frequency")
            .draw()
            .map_err(fail)?;

        chart
            .draw_series(bins.iter().map(|b| {
                Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], GREEN.mix(0.6).filled())
            }))
            .map_err(fail)?;

        root.present().map_err(fail)?;
    }
    tracing::info!("Histogram for '{}' saved to {}", column, path.display());
    Ok(path)
}
