// CLI module
// Command-line interface, argument parsing and log setup

mod args;

pub use args::{CliArgs, StrategyType, DEFAULT_INPUT, DEFAULT_OUTPUT};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `--log-level`
pub const LOG_ENV: &str = "ORDERS_LOG";

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// `ORDERS_LOG` takes precedence over `default_filter`. Stdout is left to the
/// JSON report.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
