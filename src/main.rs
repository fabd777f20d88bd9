//! Orders Report CLI
//!
//! Validates order rows from a CSV file and reports total revenue, the best
//! selling sku and every rejected row with its reason.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- orders.csv
//! cargo run -- --output report.json orders.csv
//! cargo run -- --strategy async --batch-size 500 orders.csv
//! ```
//!
//! The JSON report is printed to stdout and written to the `--output` file
//! (default `solution_output.json`).
//!
//! # Exit Codes
//!
//! - 0: Report produced, even if every row was rejected
//! - 1: Input could not be opened or read, or the report could not be written

use orders_report::cli;
use orders_report::io::write_report;
use orders_report::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout();
    let result = strategy
        .process(&args.input_file)
        .and_then(|report| write_report(&report, &mut output, &args.output_file));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
