//! Console capability
//!
//! Stages never print or read stdin directly. Everything user-facing goes
//! through a [`Console`] handed to the runner, so the CLI can plug in a
//! terminal implementation and tests can plug in a scripted one.

mod scripted;
mod selection;

pub use scripted::ScriptedConsole;
pub use selection::{choose_charts, choose_columns, parse_chart_codes, parse_column_list};

use crate::error::SheetflowResult;
use std::path::Path;

/// User-facing input and output used by the pipeline runner
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Print an informational line
    fn echo(&self, message: &str);

    /// Print a warning
    fn warn(&self, message: &str);

    /// Print an error
    fn error(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> SheetflowResult<bool>;

    /// Ask for a line of free text
    fn input(&self, prompt: &str) -> SheetflowResult<String>;

    /// Present a freshly written chart image
    fn display_image(&self, path: &Path);
}
