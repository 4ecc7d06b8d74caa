//! Reports module for Budgetly
//!
//! Pure analytics over category and expense snapshots: aggregation,
//! period-over-period trends and the home screen summary.

pub mod aggregate;
pub mod summary;
pub mod trend;

pub use aggregate::{
    daily_totals, filter, group_by_period, in_period, top_categories, total, totals_by_category,
    CategoryTotal, DailyTotal, ExpenseFilter, PeriodGroup,
};
pub use summary::SpendingSummary;
pub use trend::{percent_change, CategoryIncrease, TrendComparison, TrendDirection};

/// Number of categories shown in top-N rankings
pub const DEFAULT_TOP_N: usize = 3;
