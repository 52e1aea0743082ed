// CLI module
// Command-line interface, argument parsing and command execution

mod args;
mod commands;

pub use args::{CliArgs, Command, ExportArgs};
pub use commands::{execute, run};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or `--help`),
/// clap prints an error or help text and exits the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
