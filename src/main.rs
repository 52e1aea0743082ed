//! Personal Ledger CLI
//!
//! Command-line interface for recording transactions and reporting on them.
//!
//! # Usage
//!
//! ```bash
//! ledger add 12,50 Saúde
//! ledger edit <UUID> --amount 15
//! ledger summary --export reports/summary.txt
//! ledger --config ledger.json --log-level debug median -n 10
//! ```
//!
//! On first use the data file is created and seeded with synthetic
//! transactions according to the configured category proportions.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Rejected input, unknown transaction or empty report
//! - 2: Unreadable or corrupt data file, failed write, or bad configuration

use personal_ledger::cli;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse_args();
    init_logger(args.log_level);
    debug!("Log level set to {}", args.log_level.to_string().to_lowercase());

    let mut output = std::io::stdout();
    match cli::run(&args, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_fatal() => {
            error!("Exiting with error: {e}");
            eprintln!("Cannot continue: {}", e);
            ExitCode::from(2)
        }
        Err(e) if e.is_validation() => {
            eprintln!("Input rejected: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, honoring RUST_LOG when set
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "personal_ledger={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
