//! Expense aggregation
//!
//! Pure functions over explicit slices of categories and expenses: totals,
//! per-category and per-period grouping, search filtering and top-N ranking.
//! Nothing here touches storage; empty input yields empty or zero results.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{Category, CategoryId, Expense, Money, Period, PeriodKind, WeekStart};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub category_name: String,
    pub total: Money,
    pub expense_count: usize,
}

/// Expenses that fall in one calendar period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGroup {
    pub period: Period,
    /// Newest first
    pub expenses: Vec<Expense>,
    pub total: Money,
}

/// Total spent on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Search and category filter for expense listings
///
/// `search` is matched case-insensitively against the note or the category
/// name. Both conditions must hold; unset conditions pass everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub search: Option<String>,
    pub category: Option<CategoryId>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category = Some(category_id);
        self
    }

    /// The search text, if it is non-blank
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Check one expense; `category_name` is the name of its category, if known
    pub fn matches(&self, expense: &Expense, category_name: Option<&str>) -> bool {
        if let Some(category_id) = self.category {
            if expense.category_id != category_id {
                return false;
            }
        }

        match self.needle() {
            None => true,
            Some(needle) => {
                let in_note = expense
                    .note()
                    .is_some_and(|n| n.to_lowercase().contains(&needle));
                let in_category =
                    category_name.is_some_and(|n| n.to_lowercase().contains(&needle));
                in_note || in_category
            }
        }
    }
}

/// Ordering for ranked category amounts: amount descending, then name
/// (case-insensitive), then id
pub(crate) fn ranked(
    a: (Money, &str, CategoryId),
    b: (Money, &str, CategoryId),
) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
        .then_with(|| a.2.cmp(&b.2))
}

fn newest_first(a: &Expense, b: &Expense) -> Ordering {
    b.date
        .cmp(&a.date)
        .then(b.created_at.cmp(&a.created_at))
        .then(a.id.cmp(&b.id))
}

/// Sum of all amounts
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Totals for every supplied category, zero totals included
///
/// Sorted by total descending, then name. Expenses whose category is not in
/// `categories` are ignored.
pub fn totals_by_category(categories: &[Category], expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<CategoryId, (Money, usize)> = categories
        .iter()
        .map(|c| (c.id, (Money::zero(), 0)))
        .collect();

    for expense in expenses {
        if let Some(entry) = sums.get_mut(&expense.category_id) {
            entry.0 += expense.amount;
            entry.1 += 1;
        }
    }

    let mut rows: Vec<CategoryTotal> = categories
        .iter()
        .map(|c| {
            let (total, expense_count) = sums.get(&c.id).copied().unwrap_or_default();
            CategoryTotal {
                category_id: c.id,
                category_name: c.name.clone(),
                total,
                expense_count,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        ranked(
            (a.total, &a.category_name, a.category_id),
            (b.total, &b.category_name, b.category_id),
        )
    });
    rows
}

/// The first `n` categories with a non-zero total
pub fn top_categories(categories: &[Category], expenses: &[Expense], n: usize) -> Vec<CategoryTotal> {
    totals_by_category(categories, expenses)
        .into_iter()
        .filter(|row| !row.total.is_zero())
        .take(n)
        .collect()
}

/// Bucket expenses by calendar period, newest period first
pub fn group_by_period(
    expenses: &[Expense],
    kind: PeriodKind,
    week_start: WeekStart,
) -> Vec<PeriodGroup> {
    let mut buckets: BTreeMap<Period, Vec<Expense>> = BTreeMap::new();
    for expense in expenses {
        buckets
            .entry(Period::containing(kind, expense.date, week_start))
            .or_default()
            .push(expense.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(period, mut items)| {
            items.sort_by(newest_first);
            PeriodGroup {
                period,
                total: total(&items),
                expenses: items,
            }
        })
        .collect()
}

/// Per-day totals, oldest first
pub fn daily_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        *days.entry(expense.date).or_default() += expense.amount;
    }

    days.into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Expenses dated within `period`
pub fn in_period(expenses: &[Expense], period: Period) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| period.contains(e.date))
        .cloned()
        .collect()
}

/// Expenses passing `filter`, in input order
pub fn filter(categories: &[Category], expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let names: HashMap<CategoryId, &str> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    expenses
        .iter()
        .filter(|e| filter.matches(e, names.get(&e.category_id).copied()))
        .cloned()
        .collect()
}
