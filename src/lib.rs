//! Sheetflow
//!
//! Facade over [`sheetflow_core`] so downstream users and the workspace
//! integration tests can depend on a single crate.

pub use sheetflow_core::*;
