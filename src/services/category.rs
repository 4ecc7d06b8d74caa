//! Category service
//!
//! Provides business logic for category management: validated create,
//! rename/restyle, cascade delete and lookup by name or ID.

use tracing::{error, info};

use crate::error::{BudgetlyError, BudgetlyResult};
use crate::models::{Category, CategoryColor, CategoryId};
use crate::storage::ExpenseStore;

/// Changes to apply to an existing category
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub color: Option<CategoryColor>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.symbol.is_none() && self.color.is_none()
    }
}

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        symbol: Option<&str>,
        color: Option<CategoryColor>,
    ) -> BudgetlyResult<Category> {
        let name = name.trim();
        self.ensure_unique(name, None)?;

        let mut category = Category::new(name);
        if let Some(symbol) = symbol {
            category.symbol = symbol.trim().to_string();
        }
        if let Some(color) = color {
            category.color = color;
        }

        category
            .validate()
            .map_err(|e| BudgetlyError::Validation(e.to_string()))?;

        self.store
            .insert_category(category.clone())
            .map_err(|e| persist_failed("create category", e))?;

        info!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> BudgetlyResult<Option<Category>> {
        self.store.category(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> BudgetlyResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.store.category_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.store.category(id);
        }

        Ok(self
            .store
            .categories()?
            .into_iter()
            .find(|c| c.id.matches(identifier)))
    }

    /// Find a category or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> BudgetlyResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| BudgetlyError::category_not_found(identifier))
    }

    /// List all categories, sorted by name
    pub fn list(&self) -> BudgetlyResult<Vec<Category>> {
        self.store.categories()
    }

    /// Rename, re-symbol or re-color a category
    pub fn update(&self, id: CategoryId, update: CategoryUpdate) -> BudgetlyResult<Category> {
        let mut category = self
            .store
            .category(id)?
            .ok_or_else(|| BudgetlyError::category_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            let name = name.trim();
            self.ensure_unique(name, Some(id))?;
            category.rename(name);
        }
        if let Some(symbol) = update.symbol {
            category.set_symbol(symbol.trim());
        }
        if let Some(color) = update.color {
            category.set_color(color);
        }

        category
            .validate()
            .map_err(|e| BudgetlyError::Validation(e.to_string()))?;

        self.store
            .update_category(category.clone())
            .map_err(|e| persist_failed("update category", e))?;

        Ok(category)
    }

    /// Delete a category and all of its expenses
    ///
    /// Returns the number of expenses removed with it.
    pub fn delete(&self, id: CategoryId) -> BudgetlyResult<usize> {
        self.store
            .delete_category(id)
            .map_err(|e| persist_failed("delete category", e))
    }

    fn ensure_unique(&self, name: &str, except: Option<CategoryId>) -> BudgetlyResult<()> {
        if name.is_empty() {
            return Ok(());
        }
        match self.store.category_by_name(name)? {
            Some(existing) if Some(existing.id) != except => {
                Err(BudgetlyError::duplicate_category(name))
            }
            _ => Ok(()),
        }
    }
}

/// Log a failed write; storage failures are returned unchanged
pub(crate) fn persist_failed(action: &str, err: BudgetlyError) -> BudgetlyError {
    if !err.is_not_found() {
        error!(error = %err, "failed to {}", action);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetlyPaths;
    use crate::models::{Expense, Money};
    use crate::storage::testing::ReadOnlyStore;
    use crate::storage::{ExpenseOrder, Storage};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service
            .create("  Groceries ", Some("basket.fill"), Some(CategoryColor::Green))
            .unwrap();
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.symbol, "basket.fill");
        assert_eq!(category.color, CategoryColor::Green);

        let defaults = service.create("Fuel", None, None).unwrap();
        assert_eq!(defaults.symbol, "cart.fill");
        assert_eq!(defaults.color, CategoryColor::Blue);
    }

    #[test]
    fn test_create_rejects_invalid_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.create("   ", None, None).unwrap_err().is_validation());
        assert!(service
            .create(&"x".repeat(51), None, None)
            .unwrap_err()
            .is_validation());

        service.create("Food", None, None).unwrap();
        let err = service.create("FOOD", None, None).unwrap_err();
        assert!(matches!(err, BudgetlyError::Duplicate { .. }));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let category = service.create("Dining Out", None, None).unwrap();

        assert_eq!(service.find("dining out").unwrap().unwrap().id, category.id);
        assert_eq!(
            service.find(&category.id.to_string()).unwrap().unwrap().id,
            category.id
        );
        assert_eq!(
            service
                .find(&category.id.as_uuid().to_string())
                .unwrap()
                .unwrap()
                .id,
            category.id
        );
        assert!(service.find("Nothing").unwrap().is_none());
        assert!(service.require("Nothing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", None, None).unwrap();
        service.create("Fuel", None, None).unwrap();

        let updated = service
            .update(
                food.id,
                CategoryUpdate {
                    name: Some("Groceries".into()),
                    color: Some(CategoryColor::Orange),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Groceries");
        assert_eq!(updated.color, CategoryColor::Orange);

        // Renaming to its own name in another case is fine
        service
            .update(
                food.id,
                CategoryUpdate {
                    name: Some("GROCERIES".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let err = service
            .update(
                food.id,
                CategoryUpdate {
                    name: Some("fuel".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, BudgetlyError::Duplicate { .. }));

        let err = service
            .update(CategoryId::new(), CategoryUpdate::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_cascades_to_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", None, None).unwrap();
        let fuel = service.create("Fuel", None, None).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        storage
            .insert_expense(Expense::new(Money::from_cents(1000), day, food.id))
            .unwrap();
        storage
            .insert_expense(Expense::new(Money::from_cents(2000), day, fuel.id))
            .unwrap();

        assert_eq!(service.delete(food.id).unwrap(), 1);
        assert_eq!(service.list().unwrap().len(), 1);

        let remaining = storage.expenses(ExpenseOrder::DateDescending).unwrap();
        let totals = crate::reports::totals_by_category(&service.list().unwrap(), &remaining);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, Money::from_cents(2000));
    }

    #[test]
    fn test_write_failures_reach_the_caller() {
        let (_temp_dir, storage) = create_test_storage();
        let food = CategoryService::new(&storage).create("Food", None, None).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        storage
            .insert_expense(Expense::new(Money::from_cents(1000), day, food.id))
            .unwrap();

        let failing = ReadOnlyStore(&storage);
        let service = CategoryService::new(&failing);

        let err = service.delete(food.id).unwrap_err();
        assert!(matches!(err, BudgetlyError::Storage(_)));
        assert!(matches!(
            service.create("Fuel", None, None).unwrap_err(),
            BudgetlyError::Storage(_)
        ));

        assert_eq!(storage.categories().unwrap(), vec![food.clone()]);
        assert_eq!(storage.expenses_in_category(food.id).unwrap().len(), 1);
    }
}
