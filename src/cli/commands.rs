//! Command execution
//!
//! Opens the store described by the configuration and runs one subcommand
//! against it, writing human-readable output to the given writer.

use crate::cli::args::{CliArgs, Command, ExportArgs};
use crate::config::LedgerConfig;
use crate::core::report::{self, Direction};
use crate::core::{Persistence, TransactionStore};
use crate::io::{describe, write_summary, write_transactions, JsonFile};
use crate::types::{LedgerError, AMOUNT_SCALE};
use std::fs::{self, File};
use std::io::Write;
use tracing::info;

/// Load configuration, open the store and execute the requested command
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut config = LedgerConfig::load_or_default(args.config.as_deref())?;
    if let Some(data_file) = &args.data_file {
        config.data_file = data_file.clone();
    }

    let mut store = TransactionStore::open(
        JsonFile::new(&config.data_file),
        config.category_set(),
        &config.seed_plan(),
    )?;

    execute(&args.command, &mut store, output)
}

/// Execute a single command against an open store
pub fn execute<P: Persistence>(
    command: &Command,
    store: &mut TransactionStore<P>,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match command {
        Command::List(export) => {
            let all = store.all();
            emit(export, output, |out| {
                write_transactions("All transactions", &all, out)
            })?;
        }

        Command::Add { amount, category } => {
            let created = store.create(amount, category)?;
            writeln!(output, "Created: {}", describe(&created))?;
        }

        Command::Show { id } => {
            writeln!(output, "{}", describe(store.find(id)?))?;
        }

        Command::Edit {
            id,
            amount,
            category,
        } => {
            let before = store.find(id)?.clone();
            let after = store.update(id, amount.as_deref(), category.as_deref())?;
            if before == after {
                writeln!(output, "No changes made.")?;
            } else {
                writeln!(output, "Updated: {}", describe(&after))?;
            }
        }

        Command::Remove { id } => {
            let removed = store.delete(id)?;
            writeln!(output, "Deleted: {}", describe(&removed))?;
        }

        Command::Summary(export) => {
            let summary = report::total_and_average(&store.all())?;
            emit(export, output, |out| write_summary(&summary, out))?;
        }

        Command::Top { min, count, export } => {
            let (direction, title) = if *min {
                (Direction::Min, "Smallest transactions")
            } else {
                (Direction::Max, "Largest transactions")
            };
            let selected = report::top_n_by_value(&store.all(), *count, direction);
            emit(export, output, |out| write_transactions(title, &selected, out))?;
        }

        Command::Median { count, export } => {
            let snapshot = store.all();
            let median = report::median(&snapshot)?;
            let nearest = report::nearest_to_median(&snapshot, *count)?;
            let title = format!(
                "Transactions closest to the median ({:.2})",
                median.round_dp(AMOUNT_SCALE)
            );
            emit(export, output, |out| write_transactions(&title, &nearest, out))?;
        }
    }

    Ok(())
}

/// Render a report to `output` and, when requested, to the export file
fn emit(
    export: &ExportArgs,
    output: &mut dyn Write,
    render: impl Fn(&mut dyn Write) -> Result<(), LedgerError>,
) -> Result<(), LedgerError> {
    render(&mut *output)?;

    if let Some(path) = &export.export {
        let location = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io_failure(&location, e))?;
        }
        let mut file = File::create(path).map_err(|e| LedgerError::io_failure(&location, e))?;
        render(&mut file)?;

        info!(path = %location, "report exported");
        writeln!(output, "\nReport saved to {}", location)?;
    }

    Ok(())
}
