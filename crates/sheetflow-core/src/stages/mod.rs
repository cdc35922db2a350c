//! Pipeline stages
//!
//! Each stage is a pure function from a borrowed table to a new table, logging
//! its outcome through `tracing`. Printing is left to the runner.

pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod statistics;
pub mod transform;

pub use aggregate::{GroupMeanSpec, group_mean};
pub use clean::clean;
pub use filter::filter_below;
pub use loader::{InputFormat, load_table};
pub use normalize::normalize;
pub use statistics::{ColumnSummary, STAT_NAMES, Summary, describe};
pub use transform::log_transform;
