//! Category model
//!
//! A category is a user-defined label with a display symbol and color.
//! Every expense belongs to exactly one category, and deleting a category
//! deletes its expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// Symbol used when none is chosen
pub const DEFAULT_SYMBOL: &str = "cart.fill";

/// Display colors a category can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Teal,
    #[default]
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
    Gray,
}

impl CategoryColor {
    /// All colors in picker order
    pub fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Orange,
            Self::Yellow,
            Self::Green,
            Self::Mint,
            Self::Teal,
            Self::Blue,
            Self::Indigo,
            Self::Purple,
            Self::Pink,
            Self::Brown,
            Self::Gray,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Mint => "mint",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CategoryColor {
    type Err = CategoryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = if wanted == "grey" { "gray".to_string() } else { wanted };
        Self::all()
            .iter()
            .find(|c| c.name() == wanted)
            .copied()
            .ok_or_else(|| CategoryValidationError::UnknownColor(s.to_string()))
    }
}

/// A user-defined expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display symbol name (e.g. "fork.knife")
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Display color
    #[serde(default)]
    pub color: CategoryColor,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_symbol() -> String {
    DEFAULT_SYMBOL.to_string()
}

impl Category {
    /// Create a new category with the default symbol and color
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            symbol: default_symbol(),
            color: CategoryColor::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new category with an explicit symbol and color
    pub fn with_style(name: impl Into<String>, symbol: impl Into<String>, color: CategoryColor) -> Self {
        let mut category = Self::new(name);
        category.symbol = symbol.into();
        category.color = color;
        category
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
        self.updated_at = Utc::now();
    }

    pub fn set_color(&mut self, color: CategoryColor) {
        self.color = color;
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        if self.symbol.trim().is_empty() {
            return Err(CategoryValidationError::EmptySymbol);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long ({0} chars, max 50)")]
    NameTooLong(usize),
    #[error("Category symbol cannot be empty")]
    EmptySymbol,
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}
