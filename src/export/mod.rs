//! Export module for Budgetly
//!
//! CSV export of expense records and per-category totals for spreadsheets.

pub mod csv;

pub use self::csv::{export_category_totals_csv, export_expenses_csv};
