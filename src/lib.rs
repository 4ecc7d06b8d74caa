//! Budgetly - personal expense tracker
//!
//! This library provides the core functionality for the Budgetly expense
//! tracker: categories and expenses stored as JSON, and pure analytics that
//! total, group and compare spending across days, weeks and months.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (categories, expenses, money, periods)
//! - `storage`: JSON file storage layer behind the `ExpenseStore` trait
//! - `services`: Validation and business logic
//! - `reports`: Aggregation, trend comparison and the home summary
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers for the `budgetly` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetly::config::{paths::BudgetlyPaths, settings::Settings};
//! use budgetly::storage::Storage;
//!
//! let paths = BudgetlyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetlyError, BudgetlyResult};
