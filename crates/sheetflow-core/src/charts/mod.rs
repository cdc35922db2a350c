//! PNG chart generators
//!
//! Each generator validates its input columns, draws with the bitmap backend
//! and returns the path of the written image. Any failure is reported as a
//! [`SheetflowError::Chart`] so the runner can skip just that chart.

mod bar;
mod histogram;
mod scatter;

pub use bar::{bar_chart, top_groups};
pub use histogram::{HistogramBin, histogram, histogram_bins};
pub use scatter::{scatter_plot, scatter_points};

use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use std::fmt;
use std::ops::Range;

/// Pixel size of every generated image
pub const CHART_SIZE: (u32, u32) = (1000, 600);

/// Chart kinds offered in the selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Histogram,
    Scatter,
}

impl ChartKind {
    /// Menu order
    pub const ALL: [ChartKind; 3] = [Self::Bar, Self::Histogram, Self::Scatter];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Bar),
            2 => Some(Self::Histogram),
            3 => Some(Self::Scatter),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Bar => 1,
            Self::Histogram => 2,
            Self::Scatter => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar chart",
            Self::Histogram => "Histogram",
            Self::Scatter => "Scatter plot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Make a column name safe to embed in a file name
pub fn file_component(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

/// Numeric column lookup with lookup failures reported against `chart`
pub(crate) fn chart_column(
    table: &Table,
    column: &str,
    chart: ChartKind,
) -> SheetflowResult<Vec<Option<f64>>> {
    table
        .numeric(column)
        .map_err(|e| SheetflowError::chart(chart.label(), e.to_string()))
}

pub(crate) fn draw_error(chart: ChartKind, error: impl fmt::Display) -> SheetflowError {
    SheetflowError::chart(chart.label(), error.to_string())
}

/// Axis range around `[min, max]` with a small margin
pub(crate) fn padded_range(min: f64, max: f64) -> Range<f64> {
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
