//! Error types for Budgetly
//!
//! Every fallible library call returns [`BudgetlyResult`]; the binary wraps
//! these in `anyhow` at the top level.

use std::fmt;

use thiserror::Error;

/// The kinds of record a lookup or uniqueness check can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Category,
    Expense,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Category => "Category",
            Entity::Expense => "Expense",
        })
    }
}

#[derive(Error, Debug)]
pub enum BudgetlyError {
    /// Settings could not be located, parsed or serialized
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User input that breaks a model rule (non-positive amount, blank name, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("{entity} already exists: {key}")]
    Duplicate { entity: Entity, key: String },

    /// Data files that could not be read or replaced
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
}

impl BudgetlyError {
    pub fn category_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Category,
            key: key.into(),
        }
    }

    pub fn expense_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Expense,
            key: key.into(),
        }
    }

    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity: Entity::Category,
            key: name.into(),
        }
    }

    /// Adapter for `map_err` that attaches a description to an I/O failure
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetlyError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            context: "unexpected failure".into(),
            source,
        }
    }
}

pub type BudgetlyResult<T> = Result<T, BudgetlyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_the_record() {
        assert_eq!(
            BudgetlyError::category_not_found("Groceries").to_string(),
            "Category not found: Groceries"
        );
        assert_eq!(
            BudgetlyError::expense_not_found("exp-1234abcd").to_string(),
            "Expense not found: exp-1234abcd"
        );
        assert_eq!(
            BudgetlyError::duplicate_category("Food").to_string(),
            "Category already exists: Food"
        );
        assert_eq!(
            BudgetlyError::Config("test error".into()).to_string(),
            "Configuration error: test error"
        );
    }

    #[test]
    fn test_predicates() {
        let err = BudgetlyError::expense_not_found("x");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert!(BudgetlyError::Validation("amount".into()).is_validation());
    }

    #[test]
    fn test_io_context_keeps_source() {
        let raw = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BudgetlyError::io("Failed to write settings file")(raw);

        assert_eq!(err.to_string(), "I/O error: Failed to write settings file: denied");
        assert!(err.source().is_some());
    }
}
