//! Benchmark suite for comparing processing strategies
//!
//! Compares the synchronous and asynchronous reading strategies using the
//! divan benchmarking framework.
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The fixture `benches/fixtures/benchmark_orders.csv` mixes purchases,
//! refunds, duplicate lines and malformed rows.

use orders_report::cli::StrategyType;
use orders_report::strategy::{create_strategy, BatchConfig};
use std::path::Path;

const FIXTURE: &str = "benches/fixtures/benchmark_orders.csv";

fn main() {
    divan::main();
}

#[divan::bench]
fn sync_strategy() {
    let strategy = create_strategy(StrategyType::Sync, None);

    strategy
        .process(Path::new(FIXTURE))
        .expect("Processing failed");
}

#[divan::bench(args = [100, 1000])]
fn async_strategy(batch_size: usize) {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::new(batch_size)));

    strategy
        .process(Path::new(FIXTURE))
        .expect("Processing failed");
}
