//! Configuration management

mod loader;
mod logging_config;
mod pipeline_config;

pub use loader::Config;
pub use logging_config::{DEFAULT_LOG_FILE, LoggingConfig};
pub use pipeline_config::{ColumnsConfig, PipelineConfig};
