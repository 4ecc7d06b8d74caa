//! In-memory category table backed by `data/categories.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::BudgetlyError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_err;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryFile {
    categories: Vec<Category>,
}

/// Categories keyed by ID; listings come back alphabetically
pub struct CategoryRepository {
    path: PathBuf,
    rows: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::default(),
        }
    }

    /// Replace the in-memory table with the file's contents
    pub fn load(&self) -> Result<(), BudgetlyError> {
        let CategoryFile { categories } = read_json(&self.path)?;
        *self.rows.write().map_err(lock_err)? =
            categories.into_iter().map(|c| (c.id, c)).collect();
        Ok(())
    }

    pub fn save(&self) -> Result<(), BudgetlyError> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryFile { categories })
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, BudgetlyError> {
        Ok(self.rows.read().map_err(lock_err)?.get(&id).cloned())
    }

    /// Ordered by lowercase name, then ID
    pub fn get_all(&self) -> Result<Vec<Category>, BudgetlyError> {
        let rows = self.rows.read().map_err(lock_err)?;
        let mut categories: Vec<Category> = rows.values().cloned().collect();
        categories.sort_by_cached_key(|c| (c.name.to_lowercase(), c.id));
        Ok(categories)
    }

    /// Case-insensitive exact match; surrounding whitespace in `name` is ignored
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, BudgetlyError> {
        let wanted = name.trim().to_lowercase();
        let rows = self.rows.read().map_err(lock_err)?;
        Ok(rows.values().find(|c| c.name.to_lowercase() == wanted).cloned())
    }

    pub fn upsert(&self, category: Category) -> Result<(), BudgetlyError> {
        self.rows.write().map_err(lock_err)?.insert(category.id, category);
        Ok(())
    }

    pub fn delete(&self, id: CategoryId) -> Result<Option<Category>, BudgetlyError> {
        Ok(self.rows.write().map_err(lock_err)?.remove(&id))
    }

    pub fn count(&self) -> Result<usize, BudgetlyError> {
        Ok(self.rows.read().map_err(lock_err)?.len())
    }
}
