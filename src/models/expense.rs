//! Expense model
//!
//! A single dated outflow with an optional note, belonging to one category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Local calendar date of the expense
    pub date: NaiveDate,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Owning category
    pub category_id: CategoryId,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense without a note
    pub fn new(amount: Money, date: NaiveDate, category_id: CategoryId) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            note: None,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a note; blank notes are dropped
    pub fn with_note(
        amount: Money,
        date: NaiveDate,
        category_id: CategoryId,
        note: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(amount, date, category_id);
        expense.note = normalize_note(note.into());
        expense
    }

    /// The note if present and non-blank
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note.and_then(normalize_note);
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

fn normalize_note(note: String) -> Option<String> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
}
