//! Persisted user preferences (`config.json`)
//!
//! Every field has a serde default, so older or hand-edited files that omit
//! keys still load.

use serde::{Deserialize, Serialize};

use super::paths::BudgetlyPaths;
use crate::error::BudgetlyError;
use crate::models::WeekStart;
use crate::storage::write_json_atomic;

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,

    /// Prefixed to every formatted amount
    pub currency_symbol: String,

    /// Weekday that opens a week for grouping and trends
    pub week_start: WeekStart,

    /// Rows shown by the "top categories" views
    pub top_categories: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            currency_symbol: "$".into(),
            week_start: WeekStart::default(),
            top_categories: crate::reports::DEFAULT_TOP_N,
        }
    }
}

impl Settings {
    /// Read `config.json`, falling back to defaults without writing them
    pub fn load_or_create(paths: &BudgetlyPaths) -> Result<Self, BudgetlyError> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(BudgetlyError::io("Failed to read settings file"))?;
        serde_json::from_str(&raw).map_err(|e| {
            BudgetlyError::Config(format!("{} is not valid settings: {}", path.display(), e))
        })
    }

    pub fn save(&self, paths: &BudgetlyPaths) -> Result<(), BudgetlyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
