//! Period-over-period trend comparison
//!
//! Compares a period's spending with the period immediately before it and
//! ranks the categories whose spending grew the most.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Expense, Money, Period};

use super::aggregate::{in_period, ranked, total};
use super::DEFAULT_TOP_N;

/// Whether spending went up or down against the prior period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// Spending rose or stayed flat
    Up,
    Down,
}

/// A category that spent more than in the prior period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIncrease {
    pub category_id: CategoryId,
    pub category_name: String,
    pub current: Money,
    pub prior: Money,
    /// `current - prior`, always positive
    pub increase: Money,
}

/// Comparison of one period against the one before it
#[derive(Debug, Clone, PartialEq)]
pub struct TrendComparison {
    pub period: Period,
    pub current_total: Money,
    pub prior_total: Money,
    pub delta: Money,
    /// Percent change against the prior total; `0.0` when the prior total is zero
    pub percent_change: f64,
    pub direction: TrendDirection,
    /// Largest per-category increases, at most three
    pub increases: Vec<CategoryIncrease>,
}

/// Percent change from `prior` to `current`
///
/// Defined as `0.0` when `prior` is zero, so a rise from nothing reads as
/// no change rather than an infinite one.
pub fn percent_change(current: Money, prior: Money) -> f64 {
    if prior.is_zero() {
        return 0.0;
    }
    (current - prior).as_f64() / prior.as_f64() * 100.0
}

fn sums_by_category(expenses: &[Expense]) -> HashMap<CategoryId, Money> {
    let mut sums: HashMap<CategoryId, Money> = HashMap::new();
    for expense in expenses {
        *sums.entry(expense.category_id).or_default() += expense.amount;
    }
    sums
}

impl TrendComparison {
    /// Compare `current` (the expenses of `period`) with the prior period
    /// taken from `history`
    pub fn compare(
        current: &[Expense],
        history: &[Expense],
        period: Period,
        categories: &[Category],
    ) -> Self {
        let prior = in_period(history, period.prev());

        let current_total = total(current);
        let prior_total = total(&prior);
        let delta = current_total - prior_total;

        let current_sums = sums_by_category(current);
        let prior_sums = sums_by_category(&prior);

        let mut increases: Vec<CategoryIncrease> = categories
            .iter()
            .filter_map(|category| {
                let now = current_sums.get(&category.id).copied()?;
                let before = prior_sums.get(&category.id).copied().unwrap_or_default();
                (now > before).then(|| CategoryIncrease {
                    category_id: category.id,
                    category_name: category.name.clone(),
                    current: now,
                    prior: before,
                    increase: now - before,
                })
            })
            .collect();

        increases.sort_by(|a, b| {
            ranked(
                (a.increase, &a.category_name, a.category_id),
                (b.increase, &b.category_name, b.category_id),
            )
        });
        increases.truncate(DEFAULT_TOP_N);

        Self {
            period,
            current_total,
            prior_total,
            delta,
            percent_change: percent_change(current_total, prior_total),
            direction: if delta.is_negative() {
                TrendDirection::Down
            } else {
                TrendDirection::Up
            },
            increases,
        }
    }

    /// Compare `period` with the prior period, both taken from `history`
    pub fn for_period(history: &[Expense], period: Period, categories: &[Category]) -> Self {
        let current = in_period(history, period);
        Self::compare(&current, history, period, categories)
    }
}
