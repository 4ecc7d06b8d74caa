//! Filesystem layout
//!
//! ```text
//! <base>/config.json
//! <base>/data/categories.json
//! <base>/data/expenses.json
//! ```
//!
//! `<base>` is `$BUDGETLY_DATA_DIR` when set and non-blank, otherwise the
//! platform config directory for `budgetly` as reported by `directories`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BudgetlyError;

pub const DATA_DIR_ENV_VAR: &str = "BUDGETLY_DATA_DIR";

const SETTINGS_FILE: &str = "config.json";
const DATA_DIR: &str = "data";
const CATEGORIES_FILE: &str = "categories.json";
const EXPENSES_FILE: &str = "expenses.json";

#[derive(Debug, Clone)]
pub struct BudgetlyPaths {
    base_dir: PathBuf,
}

impl BudgetlyPaths {
    /// Resolve the base directory from the environment, then the platform
    pub fn new() -> Result<Self, BudgetlyError> {
        let from_env = std::env::var_os(DATA_DIR_ENV_VAR)
            .map(PathBuf::from)
            .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty());

        let base_dir = match from_env {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "budgetly")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetlyError::Config("Could not determine home directory".into())
                })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join(CATEGORIES_FILE)
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join(EXPENSES_FILE)
    }

    /// Create `<base>/data/` (and `<base>` with it) if missing
    pub fn ensure_directories(&self) -> Result<(), BudgetlyError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(BudgetlyError::io(format!("Failed to create {}", self.data_dir().display())))
    }

    /// `budgetly init` has run once the settings file exists
    pub fn is_initialized(&self) -> bool {
        self.settings_file().is_file()
    }
}
