//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json, with an index from
//! category to expense IDs for cascade deletes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetlyError;
use crate::models::{CategoryId, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_err, ExpenseOrder};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with a category index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: category_id -> expense_ids
    by_category: RwLock<HashMap<CategoryId, Vec<ExpenseId>>>,
}

fn sort_expenses(expenses: &mut [Expense], order: ExpenseOrder) {
    match order {
        ExpenseOrder::DateDescending => expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.created_at.cmp(&a.created_at))
                .then(a.id.cmp(&b.id))
        }),
        ExpenseOrder::DateAscending => expenses.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        }),
    }
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the category index
    pub fn load(&self) -> Result<(), BudgetlyError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_err)?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;

        data.clear();
        by_category.clear();

        for expense in file_data.expenses {
            by_category
                .entry(expense.category_id)
                .or_default()
                .push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk, newest first
    pub fn save(&self) -> Result<(), BudgetlyError> {
        let file_data = ExpenseData {
            expenses: self.get_all(ExpenseOrder::DateDescending)?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetlyError> {
        let data = self.data.read().map_err(lock_err)?;
        Ok(data.get(&id).cloned())
    }

    pub fn get_all(&self, order: ExpenseOrder) -> Result<Vec<Expense>, BudgetlyError> {
        let data = self.data.read().map_err(lock_err)?;
        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_expenses(&mut expenses, order);
        Ok(expenses)
    }

    /// Get the expenses of one category, newest first
    pub fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, BudgetlyError> {
        let data = self.data.read().map_err(lock_err)?;
        let by_category = self.by_category.read().map_err(lock_err)?;

        let ids = by_category.get(&category_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_expenses(&mut expenses, ExpenseOrder::DateDescending);
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), BudgetlyError> {
        let mut data = self.data.write().map_err(lock_err)?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_category.get_mut(&old.category_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_category
            .entry(expense.category_id)
            .or_default()
            .push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetlyError> {
        let mut data = self.data.write().map_err(lock_err)?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;

        let removed = data.remove(&id);
        if let Some(expense) = &removed {
            if let Some(ids) = by_category.get_mut(&expense.category_id) {
                ids.retain(|&eid| eid != id);
            }
        }
        Ok(removed)
    }

    /// Delete every expense of a category, returning how many were removed
    pub fn delete_by_category(&self, category_id: CategoryId) -> Result<usize, BudgetlyError> {
        let mut data = self.data.write().map_err(lock_err)?;
        let mut by_category = self.by_category.write().map_err(lock_err)?;

        let ids = by_category.remove(&category_id).unwrap_or_default();
        Ok(ids.iter().filter(|id| data.remove(id).is_some()).count())
    }

    pub fn count(&self) -> Result<usize, BudgetlyError> {
        let data = self.data.read().map_err(lock_err)?;
        Ok(data.len())
    }
}
