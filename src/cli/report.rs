//! CLI commands for reports
//!
//! The home summary, the history screen and period-over-period trends.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::display::{format_history, format_summary, format_trend};
use crate::error::BudgetlyResult;
use crate::models::{Period, PeriodKind};
use crate::reports::{daily_totals, in_period, top_categories, SpendingSummary, TrendComparison};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

fn today_or(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Show week/month totals and the top categories
pub fn handle_home_command(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<NaiveDate>,
) -> BudgetlyResult<()> {
    let categories = CategoryService::new(storage).list()?;
    let expenses = ExpenseService::new(storage).list()?;

    let summary =
        SpendingSummary::build(&categories, &expenses, today_or(as_of), settings.week_start);
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Show the daily series and top categories for the current week or month
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    range: PeriodKind,
    as_of: Option<NaiveDate>,
) -> BudgetlyResult<()> {
    let categories = CategoryService::new(storage).list()?;
    let expenses = ExpenseService::new(storage).list()?;

    let period = Period::containing(range, today_or(as_of), settings.week_start);
    let current = in_period(&expenses, period);

    print!(
        "{}",
        format_history(
            period,
            &daily_totals(&current),
            &top_categories(&categories, &current, settings.top_categories),
            &settings.currency_symbol,
        )
    );
    Ok(())
}

/// Compare the current week or month with the one before it
pub fn handle_trend_command(
    storage: &Storage,
    settings: &Settings,
    period: PeriodKind,
    as_of: Option<NaiveDate>,
) -> BudgetlyResult<()> {
    let categories = CategoryService::new(storage).list()?;
    let expenses = ExpenseService::new(storage).list()?;

    let period = Period::containing(period, today_or(as_of), settings.week_start);
    let trend = TrendComparison::for_period(&expenses, period, &categories);
    print!("{}", format_trend(&trend, &settings.currency_symbol));
    Ok(())
}
