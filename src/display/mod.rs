//! Display formatting for terminal output
//!
//! The single place where money, percentages and dates are turned into text,
//! plus the table renderers built on top of them.

pub mod category;
pub mod expense;
pub mod report;

pub use category::{format_category_details, format_category_list, format_category_totals};
pub use expense::{format_expense_details, format_expense_groups, format_expense_list};
pub use report::{format_history, format_summary, format_trend};

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money, Period, PeriodKind};

/// Format an amount with a currency symbol: `$12.50`, `-$12.50`
pub fn format_money(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("-{}{}", symbol, amount.abs())
    } else {
        format!("{}{}", symbol, amount)
    }
}

/// Format an expense amount as an outflow: `-$12.50`
pub fn format_outflow(amount: Money, symbol: &str) -> String {
    format!("-{}{}", symbol, amount.abs())
}

/// Format a signed amount for deltas: `+$15.00`, `-$3.20`
pub fn format_signed_money(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format_money(amount, symbol)
    } else {
        format!("+{}", format_money(amount, symbol))
    }
}

/// Format a percentage with one decimal and an explicit sign: `+12.5%`
///
/// Ties round away from zero, like money parsing.
pub fn format_percent(pct: f64) -> String {
    let tenths = (pct * 10.0).round() / 10.0;
    // adding 0.0 turns -0.0 into 0.0
    format!("{:+.1}%", tenths + 0.0)
}

/// `Jul 9, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Heading for a period: `Week of Jul 6, 2025`, `July 2025` or `Jul 9, 2025`
pub fn period_title(period: Period) -> String {
    match period.kind() {
        PeriodKind::Day => format_date(period.start()),
        PeriodKind::Week => format!("Week of {}", format_date(period.start())),
        PeriodKind::Month => period.start().format("%B %Y").to_string(),
    }
}

/// Main line of an expense row: its note, or the category name without one
pub fn expense_title(expense: &Expense, category: Option<&Category>) -> String {
    match expense.note() {
        Some(note) => note.to_string(),
        None => category_name(category),
    }
}

/// Second line of an expense row: `Food • Jul 9, 2025`
pub fn expense_subtitle(expense: &Expense, category: Option<&Category>) -> String {
    format!("{} • {}", category_name(category), format_date(expense.date))
}

fn category_name(category: Option<&Category>) -> String {
    category
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekStart;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::from_cents(1250), "$"), "$12.50");
        assert_eq!(format_money(Money::from_cents(-1250), "$"), "-$12.50");
        assert_eq!(format_money(Money::zero(), "€"), "€0.00");
        assert_eq!(format_outflow(Money::from_cents(1250), "$"), "-$12.50");
        assert_eq!(format_signed_money(Money::from_cents(1500), "$"), "+$15.00");
        assert_eq!(format_signed_money(Money::from_cents(-320), "$"), "-$3.20");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "+12.5%");
        assert_eq!(format_percent(-75.0), "-75.0%");
        assert_eq!(format_percent(0.0), "+0.0%");
        assert_eq!(format_percent(33.333), "+33.3%");
    }

    #[test]
    fn test_format_percent_rounds_ties_up() {
        assert_eq!(format_percent(0.25), "+0.3%");
        assert_eq!(format_percent(0.75), "+0.8%");
        assert_eq!(format_percent(-0.25), "-0.3%");
        assert_eq!(format_percent(-0.04), "+0.0%");

        // $40.10 against $40.00 is exactly a quarter percent
        let pct =
            crate::reports::percent_change(Money::from_cents(4010), Money::from_cents(4000));
        assert_eq!(format_percent(pct), "+0.3%");
    }

    #[test]
    fn test_dates_and_titles() {
        assert_eq!(format_date(date(9)), "Jul 9, 2025");

        let week = Period::containing(PeriodKind::Week, date(9), WeekStart::Sunday);
        assert_eq!(period_title(week), "Week of Jul 6, 2025");

        let month = Period::containing(PeriodKind::Month, date(9), WeekStart::Sunday);
        assert_eq!(period_title(month), "July 2025");

        let day = Period::containing(PeriodKind::Day, date(9), WeekStart::Sunday);
        assert_eq!(period_title(day), "Jul 9, 2025");
    }

    #[test]
    fn test_expense_lines() {
        let food = Category::new("Food");
        let plain = Expense::new(Money::from_cents(500), date(9), food.id);
        let noted = Expense::with_note(Money::from_cents(500), date(9), food.id, "Lunch");

        assert_eq!(expense_title(&plain, Some(&food)), "Food");
        assert_eq!(expense_title(&noted, Some(&food)), "Lunch");
        assert_eq!(expense_subtitle(&noted, Some(&food)), "Food • Jul 9, 2025");
        assert_eq!(expense_title(&plain, None), "Uncategorized");
    }
}
