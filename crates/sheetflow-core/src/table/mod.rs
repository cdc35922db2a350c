//! Table model
//!
//! [`Table`] wraps a polars `DataFrame`. Every pipeline stage takes a `&Table`
//! and returns a new one; nothing mutates a table after construction.

mod frame;
mod value;

pub use frame::{Table, is_numeric};
pub use value::Value;
