//! Processing strategy module
//!
//! This module defines the Strategy pattern for the complete read-and-fold
//! pipeline. Both strategies feed rows to a fresh [`RowProcessor`] strictly in
//! file order and produce identical reports; they differ only in how the input
//! is read.
//!
//! [`RowProcessor`]: crate::core::RowProcessor

use crate::cli::StrategyType;
use crate::types::{Report, ReportError};
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete report pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Read every row from `input_path` and fold it into a report
    ///
    /// # Errors
    ///
    /// Returns an error only when the input cannot be opened or read. Invalid
    /// rows are not errors; they are reported in `failed_rows`.
    fn process(&self, input_path: &Path) -> Result<Report, ReportError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
