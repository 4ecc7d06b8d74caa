//! Home screen summary
//!
//! One snapshot combining this week's and this month's totals, the top
//! categories, and both trend comparisons.

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money, Period, PeriodKind, WeekStart};

use super::aggregate::{in_period, top_categories, total, CategoryTotal};
use super::trend::TrendComparison;
use super::DEFAULT_TOP_N;

/// Spending snapshot as of one day
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub today: NaiveDate,
    pub week: Period,
    pub month: Period,
    pub week_total: Money,
    pub month_total: Money,
    /// Top categories over all recorded expenses
    pub top_categories: Vec<CategoryTotal>,
    pub week_trend: TrendComparison,
    pub month_trend: TrendComparison,
}

impl SpendingSummary {
    pub fn build(
        categories: &[Category],
        expenses: &[Expense],
        today: NaiveDate,
        week_start: WeekStart,
    ) -> Self {
        let week = Period::containing(PeriodKind::Week, today, week_start);
        let month = Period::containing(PeriodKind::Month, today, week_start);

        let this_week = in_period(expenses, week);
        let this_month = in_period(expenses, month);

        Self {
            today,
            week,
            month,
            week_total: total(&this_week),
            month_total: total(&this_month),
            top_categories: top_categories(categories, expenses, DEFAULT_TOP_N),
            week_trend: TrendComparison::compare(&this_week, expenses, week, categories),
            month_trend: TrendComparison::compare(&this_month, expenses, month, categories),
        }
    }
}
