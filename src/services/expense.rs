//! Expense service
//!
//! Provides business logic for recording, editing, deleting and listing
//! expenses. Amounts must be positive and the category must exist.

use chrono::NaiveDate;
use tracing::info;

use super::category::persist_failed;
use crate::error::{BudgetlyError, BudgetlyResult};
use crate::models::{CategoryId, Expense, ExpenseId, Money};
use crate::reports::{self, ExpenseFilter};
use crate::storage::{ExpenseOrder, ExpenseStore};

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub note: Option<String>,
}

/// Changes to apply to an existing expense
///
/// `note: Some(None)` clears the note.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryId>,
    pub note: Option<Option<String>>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense
    pub fn add(&self, input: NewExpense) -> BudgetlyResult<Expense> {
        self.require_category(input.category_id)?;

        let mut expense = Expense::new(input.amount, input.date, input.category_id);
        expense.set_note(input.note);
        expense
            .validate()
            .map_err(|e| BudgetlyError::Validation(e.to_string()))?;

        self.store
            .insert_expense(expense.clone())
            .map_err(|e| persist_failed("add expense", e))?;

        info!(id = %expense.id, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> BudgetlyResult<Option<Expense>> {
        self.store.expense(id)
    }

    /// Find an expense by full or short ID
    pub fn find(&self, identifier: &str) -> BudgetlyResult<Option<Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.store.expense(id);
        }

        Ok(self
            .store
            .expenses(ExpenseOrder::DateDescending)?
            .into_iter()
            .find(|e| e.id.matches(identifier)))
    }

    /// Find an expense or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> BudgetlyResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| BudgetlyError::expense_not_found(identifier))
    }

    /// All expenses, newest first
    pub fn list(&self) -> BudgetlyResult<Vec<Expense>> {
        self.store.expenses(ExpenseOrder::DateDescending)
    }

    /// Expenses recorded against one category, newest first
    pub fn list_in_category(&self, category_id: CategoryId) -> BudgetlyResult<Vec<Expense>> {
        self.store.expenses_in_category(category_id)
    }

    /// Expenses matching `filter`, newest first
    pub fn list_filtered(&self, filter: &ExpenseFilter) -> BudgetlyResult<Vec<Expense>> {
        let categories = self.store.categories()?;
        let expenses = self.list()?;
        Ok(reports::filter(&categories, &expenses, filter))
    }

    /// Apply an update to an existing expense
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> BudgetlyResult<Expense> {
        let mut expense = self
            .store
            .expense(id)?
            .ok_or_else(|| BudgetlyError::expense_not_found(id.to_string()))?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(category_id) = update.category_id {
            self.require_category(category_id)?;
            expense.category_id = category_id;
        }
        if let Some(note) = update.note {
            expense.set_note(note);
        }

        expense
            .validate()
            .map_err(|e| BudgetlyError::Validation(e.to_string()))?;
        expense.updated_at = chrono::Utc::now();

        self.store
            .update_expense(expense.clone())
            .map_err(|e| persist_failed("update expense", e))?;

        Ok(expense)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, id: ExpenseId) -> BudgetlyResult<Expense> {
        let expense = self
            .store
            .expense(id)?
            .ok_or_else(|| BudgetlyError::expense_not_found(id.to_string()))?;

        self.store
            .delete_expense(id)
            .map_err(|e| persist_failed("delete expense", e))?;

        Ok(expense)
    }

    fn require_category(&self, id: CategoryId) -> BudgetlyResult<()> {
        match self.store.category(id)? {
            Some(_) => Ok(()),
            None => Err(BudgetlyError::Validation(format!(
                "Unknown category: {}",
                id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetlyPaths;
    use crate::models::Category;
    use crate::services::CategoryService;
    use crate::storage::testing::ReadOnlyStore;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn setup_category(storage: &Storage, name: &str) -> Category {
        CategoryService::new(storage).create(name, None, None).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn new_expense(cents: i64, d: u32, category: &Category, note: Option<&str>) -> NewExpense {
        NewExpense {
            amount: Money::from_cents(cents),
            date: date(d),
            category_id: category.id,
            note: note.map(String::from),
        }
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(new_expense(1250, 9, &food, Some("  Lunch ")))
            .unwrap();
        assert_eq!(expense.note(), Some("Lunch"));
        assert_eq!(service.get(expense.id).unwrap().unwrap(), expense);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let service = ExpenseService::new(&storage);

        assert!(service.add(new_expense(0, 9, &food, None)).unwrap_err().is_validation());
        assert!(service.add(new_expense(-100, 9, &food, None)).unwrap_err().is_validation());

        let ghost = Category::new("Ghost");
        assert!(service.add(new_expense(100, 9, &ghost, None)).unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first_and_filtered() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let fuel = setup_category(&storage, "Fuel");
        let service = ExpenseService::new(&storage);

        service.add(new_expense(1000, 2, &food, Some("Groceries"))).unwrap();
        service.add(new_expense(500, 8, &food, Some("Coffee"))).unwrap();
        service.add(new_expense(2000, 9, &fuel, None)).unwrap();

        let dates: Vec<_> = service.list().unwrap().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(9), date(8), date(2)]);

        let coffee = service
            .list_filtered(&ExpenseFilter::new().search("coffee"))
            .unwrap();
        assert_eq!(coffee.len(), 1);

        let food_only = service
            .list_filtered(&ExpenseFilter::new().category(food.id))
            .unwrap();
        assert_eq!(food_only.len(), 2);
    }

    #[test]
    fn test_update_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let fuel = setup_category(&storage, "Fuel");
        let service = ExpenseService::new(&storage);
        let expense = service.add(new_expense(1000, 2, &food, Some("Snacks"))).unwrap();

        let updated = service
            .update(
                expense.id,
                ExpenseUpdate {
                    amount: Some(Money::from_cents(1500)),
                    category_id: Some(fuel.id),
                    note: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, Money::from_cents(1500));
        assert_eq!(updated.category_id, fuel.id);
        assert!(updated.note().is_none());

        let err = service
            .update(
                expense.id,
                ExpenseUpdate {
                    amount: Some(Money::zero()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            service.get(expense.id).unwrap().unwrap().amount,
            Money::from_cents(1500)
        );
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let service = ExpenseService::new(&storage);
        let expense = service.add(new_expense(1000, 2, &food, None)).unwrap();

        let found = service.find(&expense.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, expense.id);

        let removed = service.delete(expense.id).unwrap();
        assert_eq!(removed.id, expense.id);
        assert!(service.list().unwrap().is_empty());
        assert!(service.delete(expense.id).unwrap_err().is_not_found());
        assert!(service.require("exp-00000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_in_category() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let fuel = setup_category(&storage, "Fuel");
        let service = ExpenseService::new(&storage);

        service.add(new_expense(1000, 2, &food, None)).unwrap();
        service.add(new_expense(500, 8, &food, None)).unwrap();
        service.add(new_expense(2000, 9, &fuel, None)).unwrap();

        let dates: Vec<_> = service
            .list_in_category(food.id)
            .unwrap()
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec![date(8), date(2)]);
        assert!(service.list_in_category(CategoryId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_write_failures_reach_the_caller() {
        let (_temp_dir, storage) = create_test_storage();
        let food = setup_category(&storage, "Food");
        let kept = ExpenseService::new(&storage)
            .add(new_expense(1000, 2, &food, None))
            .unwrap();

        let failing = ReadOnlyStore(&storage);
        let service = ExpenseService::new(&failing);

        let err = service.add(new_expense(500, 8, &food, None)).unwrap_err();
        assert!(matches!(err, BudgetlyError::Storage(_)));

        let err = service
            .update(
                kept.id,
                ExpenseUpdate {
                    amount: Some(Money::from_cents(1500)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, BudgetlyError::Storage(_)));

        let err = service.delete(kept.id).unwrap_err();
        assert!(matches!(err, BudgetlyError::Storage(_)));

        let stored = storage.expenses(ExpenseOrder::DateDescending).unwrap();
        assert_eq!(stored, vec![kept]);
    }
}
