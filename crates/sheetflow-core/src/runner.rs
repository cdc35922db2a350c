//! End-to-end pipeline run
//!
//! Load, clean, normalize, filter, transform, describe and aggregate the input,
//! write the four exports and the report, then draw whatever charts the user
//! picks. Stage failures abort the run; chart failures only skip that chart.

use crate::charts::{self, ChartKind};
use crate::config::PipelineConfig;
use crate::console::{Console, choose_charts, choose_columns};
use crate::error::{SheetflowError, SheetflowResult};
use crate::export::{
    CsvEncoder, ExportOutcome, JsonLinesEncoder, SqliteEncoder, TableEncoder, XlsxEncoder,
    confirm_and_write,
};
use crate::report::{Report, write_report};
use crate::stages::{
    GroupMeanSpec, clean, describe, filter_below, group_mean, load_table, log_transform, normalize,
};
use crate::table::Table;
use std::fs;
use std::path::{Path, PathBuf};

/// Input file and every destination of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub input: PathBuf,
    pub xlsx: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
    pub sqlite: PathBuf,
    pub report: PathBuf,
    pub output_dir: PathBuf,
}

/// What a finished run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Format name and outcome, in export order
    pub exports: Vec<(String, ExportOutcome)>,
    pub report: Option<ExportOutcome>,
    pub charts: Vec<PathBuf>,
    pub chart_failures: usize,
    pub aggregated_rows: usize,
}

/// Create `dir` unless it is already there
pub fn ensure_output_dir(dir: &Path) -> SheetflowResult<()> {
    if dir.is_dir() {
        tracing::info!("Directory {} already exists", dir.display());
        return Ok(());
    }
    fs::create_dir_all(dir)
        .map_err(|e| SheetflowError::from(e).with_path(dir.display().to_string()))?;
    tracing::info!("Directory {} created", dir.display());
    Ok(())
}

fn preview(console: &dyn Console, title: &str, table: &Table, rows: usize) {
    console.echo(title);
    console.echo(&table.head(rows).to_string());
}

/// Run the whole pipeline against `paths`
pub fn run(
    paths: &OutputPaths,
    config: &PipelineConfig,
    console: &dyn Console,
) -> SheetflowResult<RunSummary> {
    let columns = &config.columns;
    let rows = config.preview_rows;
    let mut summary = RunSummary::default();

    ensure_output_dir(&paths.output_dir)?;

    let loaded = load_table(&paths.input)?;
    console.echo("Available columns:");
    console.echo(&format!("{:?}", loaded.column_names()));
    console.echo("Column types:");
    console.echo(&loaded.schema_report());
    preview(console, "Original data:", &loaded, rows);

    let cleaned = clean(&loaded, columns)?;
    preview(console, "Data after cleaning:", &cleaned, rows);

    let normalized = normalize(&cleaned, &columns.value)?;
    preview(console, "Data after normalization:", &normalized, rows);

    preview(console, "Data before filters:", &normalized, rows);
    let filtered = filter_below(&normalized, &columns.value, config.threshold)?;
    preview(console, "Data after filters:", &filtered, rows);

    let transformed = log_transform(&filtered, &columns.value, &columns.log_column)?;
    preview(console, "Data after transformation:", &transformed, rows);

    let statistics = describe(&transformed)?;
    console.echo("Statistical analysis of the processed data:");
    console.echo(&statistics.to_string());

    let aggregated = group_mean(
        &transformed,
        &GroupMeanSpec {
            key: &columns.category,
            value: &columns.value,
            mean_column: &columns.mean_column,
            scaled_column: &columns.scaled_column,
            scale_factor: config.scale_factor,
        },
    )?;
    summary.aggregated_rows = aggregated.height();
    preview(console, "Processed data:", &aggregated, rows);

    let sqlite = SqliteEncoder::new(config.sqlite_table.as_str());
    let exports: [(&dyn TableEncoder, &Path); 4] = [
        (&XlsxEncoder, paths.xlsx.as_path()),
        (&CsvEncoder, paths.csv.as_path()),
        (&JsonLinesEncoder, paths.json.as_path()),
        (&sqlite, paths.sqlite.as_path()),
    ];
    for (encoder, path) in exports {
        let outcome = confirm_and_write(encoder, &aggregated, path, console, config.assume_yes)?;
        summary
            .exports
            .push((encoder.format_name().to_string(), outcome));
    }

    let report = Report {
        aggregated: &aggregated,
        summary: &statistics,
        chart_dir: &paths.output_dir,
        preview_rows: rows,
    };
    summary.report = Some(write_report(
        &report,
        &paths.report,
        console,
        config.assume_yes,
    )?);

    console.echo(&format!(
        "Processing complete. Data saved to: {} {} {} {}",
        paths.xlsx.display(),
        paths.csv.display(),
        paths.json.display(),
        paths.sqlite.display()
    ));

    let selected = choose_columns(&transformed, console)?;
    let kinds = choose_charts(console)?;
    draw_charts(
        &kinds,
        &selected,
        &transformed,
        &aggregated,
        config,
        &paths.output_dir,
        console,
        &mut summary,
    )?;

    Ok(summary)
}

#[allow(clippy::too_many_arguments)]
fn draw_charts(
    kinds: &[ChartKind],
    selected: &[String],
    table: &Table,
    aggregated: &Table,
    config: &PipelineConfig,
    output_dir: &Path,
    console: &dyn Console,
    summary: &mut RunSummary,
) -> SheetflowResult<()> {
    if kinds.contains(&ChartKind::Bar) {
        let result = charts::bar_chart(
            aggregated,
            &config.columns.category,
            &config.columns.mean_column,
            config.top_n,
            output_dir,
        );
        record_chart(result, console, summary)?;
    }

    if kinds.contains(&ChartKind::Histogram) {
        for column in selected {
            let result = charts::histogram(table, column, config.histogram_bins, output_dir);
            record_chart(result, console, summary)?;
        }
    }

    if kinds.contains(&ChartKind::Scatter) {
        match selected {
            [x, y, ..] => {
                let result = charts::scatter_plot(table, x, y, output_dir);
                record_chart(result, console, summary)?;
            }
            _ => console.warn("A scatter plot needs at least two columns; skipping it."),
        }
    }
    Ok(())
}

fn record_chart(
    result: SheetflowResult<PathBuf>,
    console: &dyn Console,
    summary: &mut RunSummary,
) -> SheetflowResult<()> {
    match result {
        Ok(path) => {
            console.display_image(&path);
            summary.charts.push(path);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::error!("Failed to create chart: {}", e);
            console.error(&format!("Failed to create chart: {e}"));
            summary.chart_failures += 1;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_is_created_once() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_output_dir_over_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            ensure_output_dir(&file),
            Err(SheetflowError::Io { .. })
        ));
    }

    #[test]
    fn test_chart_failures_do_not_stop_later_charts() {
        let dir = TempDir::new().unwrap();
        let table = Table::from(
            polars::df!(
                "County" => &["King"],
                "E" => &[None::<f64>],
            )
            .unwrap(),
        );
        let console = ScriptedConsole::new();
        let mut summary = RunSummary::default();

        draw_charts(
            &[ChartKind::Histogram, ChartKind::Scatter],
            &["County".to_string(), "E".to_string()],
            &table,
            &table,
            &PipelineConfig::default(),
            dir.path(),
            &console,
            &mut summary,
        )
        .unwrap();

        assert_eq!(summary.chart_failures, 3);
        assert_eq!(console.errors().len(), 3);
        assert!(summary.charts.is_empty());
    }

    #[test]
    fn test_scatter_needs_two_columns() {
        let dir = TempDir::new().unwrap();
        let table = Table::from(polars::df!("E" => &[1.0]).unwrap());
        let console = ScriptedConsole::new();
        let mut summary = RunSummary::default();

        draw_charts(
            &[ChartKind::Scatter],
            &["E".to_string()],
            &table,
            &table,
            &PipelineConfig::default(),
            dir.path(),
            &console,
            &mut summary,
        )
        .unwrap();

        assert_eq!(summary.chart_failures, 0);
        assert!(console.output().iter().any(|l| l.contains("at least two columns")));
    }

    #[test]
    fn test_drawn_charts_are_shown_and_recorded() {
        let dir = TempDir::new().unwrap();
        let filtered = Table::from(
            polars::df!(
                "DOL Vehicle ID" => &[0.0, 0.25, 0.5],
                "E" => &[None, Some(-1.38), Some(-0.69)],
            )
            .unwrap(),
        );
        let aggregated = Table::from(
            polars::df!(
                "County" => &["Adams", "King"],
                "Media_DOL_Vehicle_ID" => &[0.25, 0.5],
            )
            .unwrap(),
        );
        let console = ScriptedConsole::new();
        let mut summary = RunSummary::default();

        draw_charts(
            &ChartKind::ALL,
            &["DOL Vehicle ID".to_string(), "E".to_string()],
            &filtered,
            &aggregated,
            &PipelineConfig::default(),
            dir.path(),
            &console,
            &mut summary,
        )
        .unwrap();

        assert_eq!(summary.chart_failures, 0);
        assert_eq!(
            summary.charts,
            vec![
                dir.path().join("bar_chart.png"),
                dir.path().join("histogram_DOL Vehicle ID.png"),
                dir.path().join("histogram_E.png"),
                dir.path().join("scatter_DOL Vehicle ID_vs_E.png"),
            ]
        );
        assert!(summary.charts.iter().all(|p| p.is_file()));
        assert_eq!(console.images(), summary.charts);
    }
}
