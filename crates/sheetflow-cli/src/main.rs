//! Sheetflow CLI application
//!
//! Loads a CSV or spreadsheet, cleans and normalizes it, aggregates a numeric
//! column per category, exports the result to xlsx, csv, json-lines and SQLite,
//! writes a text report and draws the charts picked at the prompt.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/sheetflow-cli
//! ```
//!
//! # Usage
//!
//! ```bash
//! sheetflow data.csv out.xlsx out.csv out.json out.db report.txt charts/
//! ```
//!
//! Logs go to `processing.log` unless `--log-file` or the configuration file
//! says otherwise. Set `RUST_LOG=debug` for verbose logging.

// Allow common clippy lints that are stylistic preferences
#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

mod args;
mod logging;
mod router;
mod terminal;

use clap::Parser;
use colored::*;
use sheetflow_core::{SheetflowError, UnifiedError};

// Re-export for external use
pub use args::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = router::route(cli) {
        let code = match error.downcast_ref::<SheetflowError>() {
            Some(e) => {
                tracing::error!("{} [{}]", e, e.error_code());
                e.exit_code()
            }
            None => {
                tracing::error!("{:#}", error);
                1
            }
        };
        eprintln!("{} {:#}", "✗".red().bold(), error);
        std::process::exit(code);
    }
}
