//! I/O module
//!
//! Handles CSV input and JSON output.
//!
//! # Components
//!
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `json_format` - Report rendering and output

pub mod async_reader;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use json_format::{render_report_json, write_report};
pub use sync_reader::SyncReader;
