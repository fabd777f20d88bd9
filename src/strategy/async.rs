//! Asynchronous processing strategy
//!
//! Reads the input with tokio and csv-async in batches and hands each batch to
//! a single [`RowProcessor`] before reading the next one. Rows are never
//! processed concurrently; refund validity depends on strict file order.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── tokio current-thread runtime
//!     ├── AsyncReader (batched CSV reading)
//!     └── RowProcessor (sequential fold)
//! ```

use crate::core::RowProcessor;
use crate::io::async_reader::AsyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{Report, ReportError};
use std::path::Path;
use tracing::{debug, warn};

/// Default number of rows per read batch
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Configuration for batched reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of rows read per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BatchConfig {
    /// Create a BatchConfig, falling back to the default for a zero batch size
    pub fn new(batch_size: usize) -> Self {
        if batch_size == 0 {
            warn!(
                batch_size,
                default = DEFAULT_BATCH_SIZE,
                "Invalid batch_size, using default"
            );
            return Self::default();
        }

        Self { batch_size }
    }
}

/// Asynchronous batched processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path) -> Result<Report, ReportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| ReportError::RuntimeError {
                message: e.to_string(),
            })?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| ReportError::open_failed(input_path, e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);
            let mut processor = RowProcessor::new();

            loop {
                let batch = reader.read_batch(self.config.batch_size).await?;
                if batch.is_empty() {
                    break;
                }

                debug!(rows = batch.len(), "Processing batch");
                for row in batch {
                    processor.process(row)?;
                }
            }

            Ok(processor.finish())
        })
    }
}
