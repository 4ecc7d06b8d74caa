//! Storage layer for Budgetly
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The [`ExpenseStore`] trait is the seam the services talk to;
//! [`Storage`] implements it over two JSON files.

pub mod categories;
pub mod expenses;
pub mod file_io;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use tracing::{debug, info};

use crate::config::paths::BudgetlyPaths;
use crate::error::{BudgetlyError, BudgetlyResult};
use crate::models::{Category, CategoryId, Expense, ExpenseId};

/// A poisoned lock means another thread panicked mid-update
fn lock_err(e: impl std::fmt::Display) -> BudgetlyError {
    BudgetlyError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Ordering of expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseOrder {
    /// Newest first (expense list screen)
    #[default]
    DateDescending,
    /// Oldest first (chart feeds)
    DateAscending,
}

/// Persistence collaborator for categories and expenses
///
/// Every write persists immediately. Deleting a category deletes the
/// expenses that reference it.
pub trait ExpenseStore {
    /// All categories, sorted by name
    fn categories(&self) -> BudgetlyResult<Vec<Category>>;

    fn expenses(&self, order: ExpenseOrder) -> BudgetlyResult<Vec<Expense>>;

    fn category(&self, id: CategoryId) -> BudgetlyResult<Option<Category>>;

    /// Case-insensitive lookup by name
    fn category_by_name(&self, name: &str) -> BudgetlyResult<Option<Category>>;

    fn expense(&self, id: ExpenseId) -> BudgetlyResult<Option<Expense>>;

    /// Expenses of one category, newest first
    fn expenses_in_category(&self, id: CategoryId) -> BudgetlyResult<Vec<Expense>>;

    fn insert_category(&self, category: Category) -> BudgetlyResult<()>;

    fn update_category(&self, category: Category) -> BudgetlyResult<()>;

    /// Delete a category and its expenses, returning how many expenses went with it
    fn delete_category(&self, id: CategoryId) -> BudgetlyResult<usize>;

    fn insert_expense(&self, expense: Expense) -> BudgetlyResult<()>;

    fn update_expense(&self, expense: Expense) -> BudgetlyResult<()>;

    fn delete_expense(&self, id: ExpenseId) -> BudgetlyResult<()>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetlyPaths) -> BudgetlyResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> BudgetlyResult<()> {
        self.categories.load()?;
        self.expenses.load()?;
        debug!(
            categories = self.categories.count()?,
            expenses = self.expenses.count()?,
            "loaded storage"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> BudgetlyResult<()> {
        self.categories.save()?;
        self.expenses.save()?;
        Ok(())
    }

    fn require_category(&self, id: CategoryId) -> BudgetlyResult<()> {
        match self.categories.get(id)? {
            Some(_) => Ok(()),
            None => Err(BudgetlyError::category_not_found(id.to_string())),
        }
    }
}

impl ExpenseStore for Storage {
    fn categories(&self) -> BudgetlyResult<Vec<Category>> {
        self.categories.get_all()
    }

    fn expenses(&self, order: ExpenseOrder) -> BudgetlyResult<Vec<Expense>> {
        self.expenses.get_all(order)
    }

    fn category(&self, id: CategoryId) -> BudgetlyResult<Option<Category>> {
        self.categories.get(id)
    }

    fn category_by_name(&self, name: &str) -> BudgetlyResult<Option<Category>> {
        self.categories.get_by_name(name)
    }

    fn expense(&self, id: ExpenseId) -> BudgetlyResult<Option<Expense>> {
        self.expenses.get(id)
    }

    fn expenses_in_category(&self, id: CategoryId) -> BudgetlyResult<Vec<Expense>> {
        self.expenses.get_by_category(id)
    }

    fn insert_category(&self, category: Category) -> BudgetlyResult<()> {
        let id = category.id;
        self.categories.upsert(category)?;
        self.categories.save()?;
        debug!(%id, "inserted category");
        Ok(())
    }

    fn update_category(&self, category: Category) -> BudgetlyResult<()> {
        self.require_category(category.id)?;
        self.categories.upsert(category)?;
        self.categories.save()
    }

    fn delete_category(&self, id: CategoryId) -> BudgetlyResult<usize> {
        if self.categories.delete(id)?.is_none() {
            return Err(BudgetlyError::category_not_found(id.to_string()));
        }
        let removed = self.expenses.delete_by_category(id)?;

        self.categories.save()?;
        self.expenses.save()?;
        info!(%id, removed_expenses = removed, "deleted category");
        Ok(removed)
    }

    fn insert_expense(&self, expense: Expense) -> BudgetlyResult<()> {
        self.require_category(expense.category_id)?;
        let id = expense.id;
        self.expenses.upsert(expense)?;
        self.expenses.save()?;
        debug!(%id, "inserted expense");
        Ok(())
    }

    fn update_expense(&self, expense: Expense) -> BudgetlyResult<()> {
        if self.expenses.get(expense.id)?.is_none() {
            return Err(BudgetlyError::expense_not_found(expense.id.to_string()));
        }
        self.require_category(expense.category_id)?;
        self.expenses.upsert(expense)?;
        self.expenses.save()
    }

    fn delete_expense(&self, id: ExpenseId) -> BudgetlyResult<()> {
        if self.expenses.delete(id)?.is_none() {
            return Err(BudgetlyError::expense_not_found(id.to_string()));
        }
        self.expenses.save()
    }
}

/// Store doubles for service tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Serves reads from a real [`Storage`] and fails every write as a full
    /// disk would
    pub(crate) struct ReadOnlyStore<'a>(pub &'a Storage);

    pub(crate) fn disk_full() -> BudgetlyError {
        BudgetlyError::Storage("No space left on device".into())
    }

    impl ExpenseStore for ReadOnlyStore<'_> {
        fn categories(&self) -> BudgetlyResult<Vec<Category>> {
            self.0.categories()
        }

        fn expenses(&self, order: ExpenseOrder) -> BudgetlyResult<Vec<Expense>> {
            self.0.expenses(order)
        }

        fn category(&self, id: CategoryId) -> BudgetlyResult<Option<Category>> {
            self.0.category(id)
        }

        fn category_by_name(&self, name: &str) -> BudgetlyResult<Option<Category>> {
            self.0.category_by_name(name)
        }

        fn expense(&self, id: ExpenseId) -> BudgetlyResult<Option<Expense>> {
            self.0.expense(id)
        }

        fn expenses_in_category(&self, id: CategoryId) -> BudgetlyResult<Vec<Expense>> {
            self.0.expenses_in_category(id)
        }

        fn insert_category(&self, _: Category) -> BudgetlyResult<()> {
            Err(disk_full())
        }

        fn update_category(&self, _: Category) -> BudgetlyResult<()> {
            Err(disk_full())
        }

        fn delete_category(&self, _: CategoryId) -> BudgetlyResult<usize> {
            Err(disk_full())
        }

        fn insert_expense(&self, _: Expense) -> BudgetlyResult<()> {
            Err(disk_full())
        }

        fn update_expense(&self, _: Expense) -> BudgetlyResult<()> {
            Err(disk_full())
        }

        fn delete_expense(&self, _: ExpenseId) -> BudgetlyResult<()> {
            Err(disk_full())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, _storage) = create_storage();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_expense_requires_existing_category() {
        let (_temp_dir, storage) = create_storage();
        let orphan = Expense::new(Money::from_cents(100), date(1), CategoryId::new());

        let err = storage.insert_expense(orphan).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(storage.expenses(ExpenseOrder::default()).unwrap().len(), 0);
    }

    #[test]
    fn test_cascade_delete() {
        let (_temp_dir, storage) = create_storage();
        let food = Category::new("Food");
        let fuel = Category::new("Fuel");
        let food_id = food.id;
        let fuel_id = fuel.id;
        storage.insert_category(food).unwrap();
        storage.insert_category(fuel).unwrap();

        storage
            .insert_expense(Expense::new(Money::from_cents(1000), date(1), food_id))
            .unwrap();
        storage
            .insert_expense(Expense::new(Money::from_cents(500), date(8), food_id))
            .unwrap();
        storage
            .insert_expense(Expense::new(Money::from_cents(2000), date(8), fuel_id))
            .unwrap();

        assert_eq!(storage.delete_category(food_id).unwrap(), 2);

        let remaining = storage.expenses(ExpenseOrder::DateDescending).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].category_id, fuel_id);
        assert!(storage.category(food_id).unwrap().is_none());

        assert!(storage.delete_category(food_id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_writes_persist_across_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        let category = Category::new("Rent");
        let category_id = category.id;
        storage.insert_category(category).unwrap();
        let expense = Expense::new(Money::from_cents(120000), date(1), category_id);
        let expense_id = expense.id;
        storage.insert_expense(expense).unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert!(reloaded.category_by_name("rent").unwrap().is_some());
        assert_eq!(
            reloaded.expense(expense_id).unwrap().unwrap().amount,
            Money::from_cents(120000)
        );
    }

    #[test]
    fn test_update_and_delete_missing_expense() {
        let (_temp_dir, storage) = create_storage();
        let ghost = Expense::new(Money::from_cents(100), date(1), CategoryId::new());

        assert!(storage.update_expense(ghost.clone()).unwrap_err().is_not_found());
        assert!(storage.delete_expense(ghost.id).unwrap_err().is_not_found());
    }
}
