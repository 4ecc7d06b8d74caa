//! Expense display formatting
//!
//! Formats expense listings as flat tables or grouped by period.

use std::collections::HashMap;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::{expense_subtitle, expense_title, format_money, format_outflow, period_title};
use crate::models::{Category, CategoryId, Expense};
use crate::reports::PeriodGroup;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Expense")]
    title: String,
    #[tabled(rename = "Details")]
    subtitle: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn rows<'a>(
    expenses: &'a [Expense],
    names: &'a HashMap<CategoryId, &'a Category>,
    currency: &'a str,
) -> impl Iterator<Item = ExpenseRow> + 'a {
    expenses.iter().map(move |e| {
        let category = names.get(&e.category_id).copied();
        ExpenseRow {
            id: e.id.to_string(),
            title: expense_title(e, category),
            subtitle: expense_subtitle(e, category),
            amount: format_outflow(e.amount, currency),
        }
    })
}

fn render(rows: impl IntoIterator<Item = ExpenseRow>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}

fn by_id(categories: &[Category]) -> HashMap<CategoryId, &Category> {
    categories.iter().map(|c| (c.id, c)).collect()
}

/// Format expenses as a single table, in the order given
pub fn format_expense_list(expenses: &[Expense], categories: &[Category], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let names = by_id(categories);
    format!("{}\n", render(rows(expenses, &names, currency)))
}

/// Format expenses grouped by period, one titled table per period
pub fn format_expense_groups(groups: &[PeriodGroup], categories: &[Category], currency: &str) -> String {
    if groups.is_empty() {
        return "No expenses found.".to_string();
    }

    let names = by_id(categories);
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{}  ({})\n",
            period_title(group.period),
            format_money(group.total, currency)
        ));
        output.push_str(&render(rows(&group.expenses, &names, currency)));
        output.push('\n');
    }

    output
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, category: Option<&Category>, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense_title(expense, category)));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Amount:   {}\n", format_outflow(expense.amount, currency)));
    output.push_str(&format!("  Date:     {}\n", super::format_date(expense.date)));
    output.push_str(&format!(
        "  Category: {}\n",
        category.map(|c| c.name.as_str()).unwrap_or("Uncategorized")
    ));
    if let Some(note) = expense.note() {
        output.push_str(&format!("  Note:     {}\n", note));
    }
    output
}
