//! Command routing logic for CLI

use crate::args::{Cli, USAGE};
use crate::logging;
use crate::terminal::TerminalConsole;
use anyhow::Result;
use sheetflow_core::{Config, Console, ExportOutcome, LoggingConfig, run};

/// Resolve configuration, start logging and run the pipeline
pub fn route(cli: Cli) -> Result<()> {
    let Some(paths) = cli.output_paths() else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut defaults = LoggingConfig::default();
            defaults.merge(flag_overrides(&cli));
            logging::init(&defaults)?;
            return Err(e.into());
        }
    };
    config.logging.merge(flag_overrides(&cli));
    if cli.yes {
        config.pipeline.assume_yes = true;
    }

    logging::init(&config.logging)?;
    tracing::debug!("Arguments: {:?}", cli);
    if !cli.extra.is_empty() {
        tracing::warn!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let console = TerminalConsole::new();
    let summary = run(&paths, &config.pipeline, &console)?;

    let skipped: Vec<&str> = summary
        .exports
        .iter()
        .filter(|(_, outcome)| *outcome == ExportOutcome::Skipped)
        .map(|(format, _)| format.as_str())
        .collect();
    if !skipped.is_empty() {
        console.warn(&format!("Skipped exports: {}", skipped.join(", ")));
    }
    tracing::info!(
        "Run finished: {} groups, {} charts, {} chart failures",
        summary.aggregated_rows,
        summary.charts.len(),
        summary.chart_failures
    );
    Ok(())
}

/// Logging settings given on the command line; empty fields leave config values alone
fn flag_overrides(cli: &Cli) -> LoggingConfig {
    LoggingConfig {
        level: if cli.verbose {
            "debug".to_string()
        } else {
            String::new()
        },
        log_file: cli.log_file.clone().unwrap_or_default(),
    }
}
