use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Manage a personal ledger of transactions
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Manage a personal ledger of transactions", long_about = None)]
pub struct CliArgs {
    /// Configuration file (JSON) with categories, proportions and seed settings
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Data file; overrides the configured `data_file`
    #[arg(long = "data-file", value_name = "PATH", global = true)]
    pub data_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        global = true,
        help = "Log level: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every transaction in store order
    List(ExportArgs),

    /// Register a new transaction
    Add {
        /// Amount, with `.` or `,` as decimal separator
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (case and accents are ignored)
        category: String,
    },

    /// Show one transaction by id
    Show {
        id: String,
    },

    /// Change the amount and/or category of a transaction
    Edit {
        id: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a transaction by id
    Remove {
        id: String,
    },

    /// Totals, counts and averages overall and per category
    Summary(ExportArgs),

    /// Largest (or with --min, smallest) transactions
    Top {
        /// Select the smallest amounts instead of the largest
        #[arg(long)]
        min: bool,
        #[arg(short = 'n', long = "count", default_value_t = 5)]
        count: usize,
        #[command(flatten)]
        export: ExportArgs,
    },

    /// Transactions closest to the median amount
    Median {
        #[arg(short = 'n', long = "count", default_value_t = 5)]
        count: usize,
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportArgs {
    /// Also write the report to this file
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::list(&["ledger", "list"], Command::List(ExportArgs::default()))]
    #[case::add(
        &["ledger", "add", "12,50", "Saúde"],
        Command::Add { amount: "12,50".to_string(), category: "Saúde".to_string() }
    )]
    #[case::add_negative(
        &["ledger", "add", "-3", "food"],
        Command::Add { amount: "-3".to_string(), category: "food".to_string() }
    )]
    #[case::show(&["ledger", "show", "abc"], Command::Show { id: "abc".to_string() })]
    #[case::edit_amount_only(
        &["ledger", "edit", "abc", "--amount", "3"],
        Command::Edit { id: "abc".to_string(), amount: Some("3".to_string()), category: None }
    )]
    #[case::remove(&["ledger", "remove", "abc"], Command::Remove { id: "abc".to_string() })]
    #[case::top_default(
        &["ledger", "top"],
        Command::Top { min: false, count: 5, export: ExportArgs::default() }
    )]
    #[case::top_min(
        &["ledger", "top", "--min", "-n", "3"],
        Command::Top { min: true, count: 3, export: ExportArgs::default() }
    )]
    #[case::median_export(
        &["ledger", "median", "--export", "out.txt"],
        Command::Median { count: 5, export: ExportArgs { export: Some(PathBuf::from("out.txt")) } }
    )]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[rstest]
    #[case::defaults(&["ledger", "summary"], None, None, LevelFilter::WARN)]
    #[case::all_options(
        &["ledger", "--config", "c.json", "--data-file", "d.json", "--log-level", "debug", "summary"],
        Some("c.json"),
        Some("d.json"),
        LevelFilter::DEBUG
    )]
    #[case::options_after_subcommand(
        &["ledger", "summary", "--data-file", "d.json"],
        None,
        Some("d.json"),
        LevelFilter::WARN
    )]
    fn test_global_options(
        #[case] args: &[&str],
        #[case] config: Option<&str>,
        #[case] data_file: Option<&str>,
        #[case] log_level: LevelFilter,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.config, config.map(PathBuf::from));
        assert_eq!(parsed.data_file, data_file.map(PathBuf::from));
        assert_eq!(parsed.log_level, log_level);
    }

    #[rstest]
    #[case::missing_command(&["ledger"])]
    #[case::missing_category(&["ledger", "add", "10"])]
    #[case::bad_count(&["ledger", "top", "-n", "many"])]
    #[case::bad_log_level(&["ledger", "--log-level", "loud", "list"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
