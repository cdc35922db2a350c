//! Table exporters
//!
//! Every output goes through [`confirm_and_write`]: an existing destination is
//! only replaced after the console confirms it, and a refusal skips just that
//! output.

mod csv_encoder;
mod json_encoder;
mod sqlite_encoder;
mod xlsx_encoder;

pub use csv_encoder::CsvEncoder;
pub use json_encoder::JsonLinesEncoder;
pub use sqlite_encoder::SqliteEncoder;
pub use xlsx_encoder::XlsxEncoder;

use crate::console::Console;
use crate::error::{SheetflowError, SheetflowResult};
use crate::table::Table;
use std::path::Path;

/// Writes a whole table to a file in one format
pub trait TableEncoder {
    /// Format name used in prompts and log lines
    fn format_name(&self) -> &str;

    /// Create or truncate `path` and write `table` to it
    fn encode(&self, table: &Table, path: &Path) -> SheetflowResult<()>;
}

/// What happened to one requested output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Written,
    Skipped,
}

/// Ask before replacing `path`. Returns true when writing may proceed.
pub fn confirm_overwrite(
    path: &Path,
    label: &str,
    console: &dyn Console,
    assume_yes: bool,
) -> SheetflowResult<bool> {
    if !path.exists() || assume_yes {
        return Ok(true);
    }

    let question = format!("The file {} already exists. Overwrite?", path.display());
    if console.confirm(&question)? {
        return Ok(true);
    }

    tracing::info!("{} cancelled: {}", label, path.display());
    console.warn(&format!("{label} cancelled."));
    Ok(false)
}

/// Confirm-then-encode helper shared by every exporter
pub fn confirm_and_write(
    encoder: &dyn TableEncoder,
    table: &Table,
    path: &Path,
    console: &dyn Console,
    assume_yes: bool,
) -> SheetflowResult<ExportOutcome> {
    let label = format!("Export to {}", encoder.format_name());
    if !confirm_overwrite(path, &label, console, assume_yes)? {
        return Ok(ExportOutcome::Skipped);
    }

    encoder.encode(table, path)?;

    let message = format!(
        "Data exported to {} at: {}",
        encoder.format_name(),
        path.display()
    );
    tracing::info!("{}", message);
    console.echo(&message);
    Ok(ExportOutcome::Written)
}

/// Wrap an encoder failure with its format and destination
pub(crate) fn export_error(format: &str, path: &Path, error: impl std::fmt::Display) -> SheetflowError {
    SheetflowError::export(format, error.to_string()).with_path(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MockConsole;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    struct RecordingEncoder {
        calls: Cell<usize>,
    }

    impl TableEncoder for RecordingEncoder {
        fn format_name(&self) -> &str {
            "Test"
        }

        fn encode(&self, _table: &Table, path: &Path) -> SheetflowResult<()> {
            self.calls.set(self.calls.get() + 1);
            fs::write(path, "new")?;
            Ok(())
        }
    }

    fn table() -> Table {
        Table::from(polars::df!("a" => &[1i64]).unwrap())
    }

    #[test]
    fn test_fresh_path_is_written_without_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let encoder = RecordingEncoder { calls: Cell::new(0) };

        let mut console = MockConsole::new();
        console.expect_confirm().never();
        console.expect_echo().times(1).return_const(());

        let outcome = confirm_and_write(&encoder, &table(), &path, &console, false).unwrap();
        assert_eq!(outcome, ExportOutcome::Written);
        assert_eq!(encoder.calls.get(), 1);
    }

    #[test]
    fn test_declined_overwrite_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();
        let encoder = RecordingEncoder { calls: Cell::new(0) };

        let mut console = MockConsole::new();
        console
            .expect_confirm()
            .withf(|q| q.contains("already exists"))
            .times(1)
            .returning(|_| Ok(false));
        console.expect_warn().times(1).return_const(());

        let outcome = confirm_and_write(&encoder, &table(), &path, &console, false).unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
        assert_eq!(encoder.calls.get(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_accepted_overwrite_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();
        let encoder = RecordingEncoder { calls: Cell::new(0) };

        let mut console = MockConsole::new();
        console.expect_confirm().times(1).returning(|_| Ok(true));
        console.expect_echo().return_const(());

        let outcome = confirm_and_write(&encoder, &table(), &path, &console, false).unwrap();
        assert_eq!(outcome, ExportOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let mut console = MockConsole::new();
        console.expect_confirm().never();

        assert!(confirm_overwrite(&path, "Report", &console, true).unwrap());
    }
}
