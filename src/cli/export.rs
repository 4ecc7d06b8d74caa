//! CLI commands for data export
//!
//! Writes expenses or per-category totals to CSV files.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BudgetlyError, BudgetlyResult};
use crate::export::{export_category_totals_csv, export_expenses_csv};
use crate::models::{Period, PeriodKind};
use crate::reports::{in_period, totals_by_category};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses to CSV, newest first
    Expenses {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export per-category totals to CSV
    Totals {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Only count the current week or month
        #[arg(short, long)]
        range: Option<PeriodKind>,
    },
}

fn create_output(output: &Path) -> BudgetlyResult<BufWriter<File>> {
    let file = File::create(output).map_err(BudgetlyError::io(format!(
        "Failed to create file {}",
        output.display()
    )))?;
    Ok(BufWriter::new(file))
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> BudgetlyResult<()> {
    let categories = CategoryService::new(storage).list()?;
    let expenses = ExpenseService::new(storage).list()?;

    match cmd {
        ExportCommands::Expenses { output } => {
            let count = export_expenses_csv(create_output(&output)?, &expenses, &categories)?;
            println!("Exported {} expenses to: {}", count, output.display());
        }

        ExportCommands::Totals { output, range } => {
            let expenses = match range {
                Some(kind) => in_period(&expenses, Period::current(kind, settings.week_start)),
                None => expenses,
            };
            let totals = totals_by_category(&categories, &expenses);
            let count = export_category_totals_csv(create_output(&output)?, &totals)?;
            println!("Exported {} category totals to: {}", count, output.display());
        }
    }

    Ok(())
}
