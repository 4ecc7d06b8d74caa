//! Core data models for Budgetly
//!
//! Categories, expenses, money amounts, and the calendar periods used to
//! group them.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::{Category, CategoryColor, CategoryValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{CategoryId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodKind, PeriodParseError, WeekStart};
