use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default input file read when no path is given
pub const DEFAULT_INPUT: &str = "allsome_interview_test_orders.csv";

/// Default file the JSON report is persisted to
pub const DEFAULT_OUTPUT: &str = "solution_output.json";

/// Validate order rows and report revenue, best seller and rejected rows
#[derive(Parser, Debug)]
#[command(name = "orders-report")]
#[command(about = "Validate order rows and report revenue, best seller and rejected rows", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing order rows
    #[arg(
        value_name = "INPUT",
        default_value = DEFAULT_INPUT,
        help = "Path to the input CSV file"
    )]
    pub input_file: PathBuf,

    /// File the JSON report is written to, in addition to stdout
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Path the JSON report is persisted to"
    )]
    pub output_file: PathBuf,

    /// Reading strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of rows per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows per read batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Log filter for stderr diagnostics
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter, e.g. 'info' or 'orders_report=debug' (ORDERS_LOG overrides)"
    )]
    pub log_level: String,
}

/// Available reading strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Falls back to the default batch size when none (or zero) is given.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}
