//! I/O module
//!
//! Handles the data file and report output.
//!
//! # Components
//!
//! - `json_store` - Whole-collection JSON persistence (load/save, `JsonFile` backend)
//! - `report_format` - Plain-text rendering of report results

pub mod json_store;
pub mod report_format;

pub use json_store::JsonFile;
pub use report_format::{describe, write_summary, write_transactions};
