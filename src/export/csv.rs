//! CSV export functionality
//!
//! Exports expenses and per-category totals to CSV. Amounts are written as
//! plain decimals (`12.50`) without a currency symbol.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::BudgetlyResult;
use crate::models::{Category, CategoryId, Expense};
use crate::reports::CategoryTotal;

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Note")]
    note: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct TotalRecord<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Expenses")]
    expenses: usize,
    #[serde(rename = "Total")]
    total: String,
}

/// Export expenses to CSV in the order given
pub fn export_expenses_csv<W: Write>(
    writer: W,
    expenses: &[Expense],
    categories: &[Category],
) -> BudgetlyResult<usize> {
    let names: HashMap<CategoryId, &str> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut csv = ::csv::Writer::from_writer(writer);
    for expense in expenses {
        csv.serialize(ExpenseRecord {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: names.get(&expense.category_id).copied().unwrap_or("Unknown"),
            note: expense.note().unwrap_or(""),
            amount: expense.amount.to_string(),
        })?;
    }
    csv.flush()?;

    Ok(expenses.len())
}

/// Export per-category totals to CSV
pub fn export_category_totals_csv<W: Write>(
    writer: W,
    totals: &[CategoryTotal],
) -> BudgetlyResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);
    for row in totals {
        csv.serialize(TotalRecord {
            category: &row.category_name,
            expenses: row.expense_count,
            total: row.total.to_string(),
        })?;
    }
    csv.flush()?;

    Ok(totals.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::totals_by_category;
    use chrono::NaiveDate;

    fn sample() -> (Vec<Category>, Vec<Expense>) {
        let food = Category::new("Food");
        let date = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        let expenses = vec![
            Expense::with_note(Money::from_cents(1250), date, food.id, "Lunch, with \"friends\""),
            Expense::new(Money::from_cents(500), date, food.id),
        ];
        (vec![food], expenses)
    }

    #[test]
    fn test_export_expenses() {
        let (categories, expenses) = sample();
        let mut buffer = Vec::new();

        let count = export_expenses_csv(&mut buffer, &expenses, &categories).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "ID,Date,Category,Note,Amount");
        assert!(lines
            .next()
            .unwrap()
            .ends_with("2025-07-09,Food,\"Lunch, with \"\"friends\"\"\",12.50"));
        assert!(lines.next().unwrap().ends_with("2025-07-09,Food,,5.00"));
    }

    #[test]
    fn test_export_category_totals() {
        let (categories, expenses) = sample();
        let totals = totals_by_category(&categories, &expenses);
        let mut buffer = Vec::new();

        export_category_totals_csv(&mut buffer, &totals).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "Category,Expenses,Total\nFood,2,17.50\n");
    }
}
