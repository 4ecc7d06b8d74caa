//! Expense CLI commands
//!
//! Implements CLI commands for recording, editing and browsing expenses.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_groups, format_expense_list};
use crate::error::{BudgetlyError, BudgetlyResult};
use crate::models::{Money, PeriodKind};
use crate::reports::{group_by_period, ExpenseFilter};
use crate::services::{CategoryService, ExpenseService, ExpenseUpdate, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "12.50" or "$12.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show expense details
    Show {
        /// Expense ID
        expense: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        expense: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// New note
        #[arg(short, long, conflicts_with = "clear_note")]
        note: Option<String>,
        /// Remove the note
        #[arg(long)]
        clear_note: bool,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        expense: String,
    },

    /// List expenses, newest first
    List {
        /// Case-insensitive search over notes and category names
        #[arg(short, long)]
        search: Option<String>,
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Group by day, week or month
        #[arg(short, long)]
        by: Option<PeriodKind>,
    },
}

fn parse_amount(input: &str) -> BudgetlyResult<Money> {
    Money::parse(input).map_err(|e| BudgetlyError::Validation(format!("Invalid amount: {}", e)))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetlyResult<()> {
    let service = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let category = categories.require(&category)?;
            let expense = service.add(NewExpense {
                amount: parse_amount(&amount)?,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                category_id: category.id,
                note,
            })?;

            println!(
                "Added expense {} of {}{} to {}",
                expense.id, currency, expense.amount, category.name
            );
        }

        ExpenseCommands::Show { expense } => {
            let expense = service.require(&expense)?;
            let category = categories.get(expense.category_id)?;
            print!(
                "{}",
                format_expense_details(&expense, category.as_ref(), currency)
            );
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            date,
            note,
            clear_note,
        } => {
            let expense = service.require(&expense)?;

            let category_id = match category {
                Some(c) => Some(categories.require(&c)?.id),
                None => None,
            };
            let note = if clear_note { Some(None) } else { note.map(Some) };

            let update = ExpenseUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date,
                category_id,
                note,
            };

            if update.amount.is_none()
                && update.date.is_none()
                && update.category_id.is_none()
                && update.note.is_none()
            {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.update(expense.id, update)?;
            println!("Updated expense {}", updated.id);
        }

        ExpenseCommands::Delete { expense } => {
            let expense = service.require(&expense)?;
            service.delete(expense.id)?;
            println!("Deleted expense {}", expense.id);
        }

        ExpenseCommands::List {
            search,
            category,
            by,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(text) = search {
                filter = filter.search(text);
            }
            if let Some(c) = category {
                filter = filter.category(categories.require(&c)?.id);
            }

            let expenses = service.list_filtered(&filter)?;
            let all_categories = categories.list()?;

            match by {
                Some(kind) => {
                    let groups = group_by_period(&expenses, kind, settings.week_start);
                    print!(
                        "{}",
                        format_expense_groups(&groups, &all_categories, currency)
                    );
                }
                None => print!(
                    "{}",
                    format_expense_list(&expenses, &all_categories, currency)
                ),
            }
        }
    }

    Ok(())
}
