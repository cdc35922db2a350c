//! Sheetflow Core Library
//!
//! This crate provides the core functionality for sheetflow: the columnar
//! table model, the processing stages, exporters, the text report, chart
//! generation, configuration and the pipeline runner that ties them together.

pub mod charts;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod report;
pub mod runner;
pub mod stages;
pub mod table;

// Re-export commonly used types
pub use charts::ChartKind;
pub use config::{ColumnsConfig, Config, LoggingConfig, PipelineConfig};
pub use console::{Console, ScriptedConsole};
pub use error::{SheetflowError, SheetflowResult, UnifiedError};
pub use export::{ExportOutcome, TableEncoder};
pub use report::Report;
pub use runner::{OutputPaths, RunSummary, run};
pub use table::{Table, Value};
