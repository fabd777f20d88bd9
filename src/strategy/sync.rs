//! Synchronous processing strategy
//!
//! Orchestrates a run by streaming rows from the [`SyncReader`] into a
//! [`RowProcessor`], one row at a time.

use crate::core::RowProcessor;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{Report, ReportError};
use std::path::Path;
use tracing::debug;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use orders_report::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
///
/// let report = SyncProcessingStrategy
///     .process(Path::new("orders.csv"))
///     .expect("Processing failed");
/// println!("revenue: {}", report.total_revenue);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path) -> Result<Report, ReportError> {
        let reader = SyncReader::new(input_path)?;
        debug!(path = %input_path.display(), columns = ?reader.headers(), "Opened input");

        let mut processor = RowProcessor::new();
        for row in reader {
            // An unreadable record or an overflowing row aborts the whole run
            processor.process(row?)?;
        }

        Ok(processor.finish())
    }
}
