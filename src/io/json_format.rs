//! JSON format handling for the report
//!
//! This module centralizes the output document format:
//! - `total_revenue` as a number rounded to two decimal places
//! - `best_selling_sku` as `{ "sku", "total_quantity" }`
//! - `failed_rows` as `{ "line", "reason", "row_data" }` objects in rejection order
//!
//! The document is rendered completely before anything is written, so a fatal
//! error never leaves partial output behind.

use crate::types::{Report, ReportError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render a report as pretty-printed JSON (two-space indent)
pub fn render_report_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Persist the report to `sink` and emit it to `output`
///
/// The file receives the document as rendered; the output stream receives it
/// followed by a newline.
///
/// # Errors
///
/// Returns `SerializeError` if the report cannot be rendered and `IoError` if
/// either destination cannot be written.
pub fn write_report(
    report: &Report,
    output: &mut dyn Write,
    sink: &Path,
) -> Result<(), ReportError> {
    let document = render_report_json(report)?;

    fs::write(sink, &document).map_err(|e| ReportError::IoError {
        message: format!("Failed to write '{}': {}", sink.display(), e),
    })?;

    writeln!(output, "{}", document)?;
    output.flush()?;

    Ok(())
}
