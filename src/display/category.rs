//! Category display formatting
//!
//! Formats categories and per-category totals as tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format_money;
use crate::models::{Category, Money};
use crate::reports::CategoryTotal;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Color")]
    color: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Expenses")]
    count: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a list of categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nCreate one with 'budgetly category add <NAME>'.".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.to_string(),
        name: c.name.clone(),
        symbol: c.symbol.clone(),
        color: c.color.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single category with its spending
pub fn format_category_details(
    category: &Category,
    expense_count: usize,
    total: Money,
    currency: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:       {}\n", category.id));
    output.push_str(&format!("  Symbol:   {}\n", category.symbol));
    output.push_str(&format!("  Color:    {}\n", category.color));
    output.push_str(&format!("  Expenses: {}\n", expense_count));
    output.push_str(&format!("  Total:    {}\n", format_money(total, currency)));
    output
}

/// Format per-category totals, largest first, with a grand total row
pub fn format_category_totals(totals: &[CategoryTotal], currency: &str) -> String {
    if totals.is_empty() {
        return "No categories found.".to_string();
    }

    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    let expense_count: usize = totals.iter().map(|t| t.expense_count).sum();

    let mut rows: Vec<TotalRow> = totals
        .iter()
        .map(|t| TotalRow {
            name: t.category_name.clone(),
            count: t.expense_count.to_string(),
            total: format_money(t.total, currency),
        })
        .collect();
    rows.push(TotalRow {
        name: "TOTAL".to_string(),
        count: expense_count.to_string(),
        total: format_money(grand_total, currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    format!("{}\n", table)
}
