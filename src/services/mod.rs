//! Service layer for Budgetly
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-entity operations so the reports only ever
//! see valid records.

pub mod category;
pub mod expense;

pub use category::{CategoryService, CategoryUpdate};
pub use expense::{ExpenseService, ExpenseUpdate, NewExpense};
