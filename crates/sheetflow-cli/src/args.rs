//! CLI argument definitions using clap
//!
//! - sheetflow <input> <xlsx> <csv> <json> <db> <report> <output_dir>
//! - sheetflow ... --config sheetflow.toml --log-file run.log --yes --verbose

use clap::Parser;
use sheetflow_core::OutputPaths;
use std::path::PathBuf;

/// Usage line printed when positional arguments are missing
pub const USAGE: &str = "Usage: sheetflow <input_file> <output_file.xlsx> <output_file.csv> \
<output_file.json> <output_file.db> <report_file> <output_dir>";

#[derive(Parser, Debug)]
#[command(name = "sheetflow")]
#[command(about = "Clean, normalize, summarize and export a CSV or spreadsheet dataset")]
#[command(version)]
pub struct Cli {
    /// CSV, XLS or XLSX file to process
    pub input: Option<PathBuf>,

    /// Spreadsheet export of the aggregated table
    pub xlsx: Option<PathBuf>,

    /// CSV export of the aggregated table
    pub csv: Option<PathBuf>,

    /// JSON-lines export of the aggregated table
    pub json: Option<PathBuf>,

    /// SQLite database receiving the aggregated table
    pub sqlite: Option<PathBuf>,

    /// Text report destination
    pub report: Option<PathBuf>,

    /// Directory for chart images
    pub output_dir: Option<PathBuf>,

    /// Positionals after the seventh are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "SHEETFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file (defaults to processing.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Overwrite existing outputs without asking
    #[arg(long, short)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// All seven positional paths, or `None` if any is missing
    pub fn output_paths(&self) -> Option<OutputPaths> {
        Some(OutputPaths {
            input: self.input.clone()?,
            xlsx: self.xlsx.clone()?,
            csv: self.csv.clone()?,
            json: self.json.clone()?,
            sqlite: self.sqlite.clone()?,
            report: self.report.clone()?,
            output_dir: self.output_dir.clone()?,
        })
    }
}
