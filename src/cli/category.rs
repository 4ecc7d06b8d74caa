//! Category CLI commands
//!
//! Implements CLI commands for category management and per-category totals.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_details, format_category_list, format_category_totals};
use crate::error::BudgetlyResult;
use crate::models::{CategoryColor, Period, PeriodKind};
use crate::reports::{in_period, total, totals_by_category};
use crate::services::{CategoryService, CategoryUpdate, ExpenseService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display symbol (e.g. "fork.knife")
        #[arg(short, long)]
        symbol: Option<String>,
        /// Display color (red, orange, yellow, green, mint, teal, blue, indigo, purple, pink, brown, gray)
        #[arg(short, long)]
        color: Option<CategoryColor>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New display symbol
        #[arg(short, long)]
        symbol: Option<String>,
        /// New display color
        #[arg(short, long)]
        color: Option<CategoryColor>,
    },

    /// Delete a category and all of its expenses
    Delete {
        /// Category name or ID
        category: String,
    },

    /// Show spending per category, largest first
    Totals {
        /// Only count the current week or month
        #[arg(short, long)]
        range: Option<PeriodKind>,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetlyResult<()> {
    let service = CategoryService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
        }

        CategoryCommands::Add {
            name,
            symbol,
            color,
        } => {
            let category = service.create(&name, symbol.as_deref(), color)?;
            println!("Created category: {} ({})", category.name, category.id);
        }

        CategoryCommands::Show { category } => {
            let category = service.require(&category)?;
            let expenses = ExpenseService::new(storage).list_in_category(category.id)?;
            print!(
                "{}",
                format_category_details(&category, expenses.len(), total(&expenses), currency)
            );
        }

        CategoryCommands::Edit {
            category,
            name,
            symbol,
            color,
        } => {
            let category = service.require(&category)?;
            let update = CategoryUpdate {
                name,
                symbol,
                color,
            };

            if update.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.update(category.id, update)?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let category = service.require(&category)?;
            let removed = service.delete(category.id)?;
            println!(
                "Deleted category '{}' and {} expense{}",
                category.name,
                removed,
                if removed == 1 { "" } else { "s" }
            );
        }

        CategoryCommands::Totals { range } => {
            let categories = service.list()?;
            let mut expenses = ExpenseService::new(storage).list()?;

            if let Some(kind) = range {
                let period = Period::current(kind, settings.week_start);
                expenses = in_period(&expenses, period);
            }

            print!(
                "{}",
                format_category_totals(&totals_by_category(&categories, &expenses), currency)
            );
        }
    }

    Ok(())
}
