//! Plain-text processing report

use crate::console::Console;
use crate::error::{SheetflowError, SheetflowResult};
use crate::export::{ExportOutcome, confirm_overwrite};
use crate::stages::Summary;
use crate::table::Table;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TITLE: &str = "Data Processing Report";
const SEPARATOR_WIDTH: usize = 50;

/// Everything that goes into the report body
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub aggregated: &'a Table,
    pub summary: &'a Summary,
    /// Directory scanned for `.png` files to link
    pub chart_dir: &'a Path,
    pub preview_rows: usize,
}

impl Report<'_> {
    /// Title, timestamp, aggregated preview and statistics
    pub fn render_body(&self, generated_at: DateTime<Local>) -> String {
        format!(
            "{TITLE}\nGenerated: {}\n{}\nProcessed data:\n{}\n\nDescriptive statistics:\n{}\n",
            generated_at.format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(SEPARATOR_WIDTH),
            self.aggregated.head(self.preview_rows),
            self.summary,
        )
    }

    /// One markdown image line per chart, sorted by file name
    pub fn render_chart_links(&self) -> std::io::Result<String> {
        let mut images: Vec<String> = fs::read_dir(self.chart_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".png"))
            .collect();
        images.sort();

        Ok(images
            .iter()
            .map(|name| {
                let link: PathBuf = self.chart_dir.join(name);
                format!("\n![{name}]({})\n", link.display())
            })
            .collect())
    }
}

/// Write the report to `path`, asking before replacing an existing file.
///
/// A chart directory that cannot be listed is reported through the console and
/// leaves the already written body in place.
pub fn write_report(
    report: &Report<'_>,
    path: &Path,
    console: &dyn Console,
    assume_yes: bool,
) -> SheetflowResult<ExportOutcome> {
    if !confirm_overwrite(path, "Report generation", console, assume_yes)? {
        return Ok(ExportOutcome::Skipped);
    }

    fs::write(path, report.render_body(Local::now()))
        .map_err(|e| SheetflowError::from(e).with_path(path.display().to_string()))?;
    tracing::info!("Report saved to {}", path.display());
    console.echo(&format!("Report saved to: {}", path.display()));

    let appended = report.render_chart_links().and_then(|links| {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(links.as_bytes())
    });
    match appended {
        Ok(()) => tracing::info!("Charts linked into the report"),
        Err(e) => {
            tracing::error!("Failed to link charts into the report: {}", e);
            console.error(&format!("Failed to link charts into the report: {e}"));
        }
    }

    Ok(ExportOutcome::Written)
}
