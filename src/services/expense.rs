//! Expense service
//!
//! Provides business logic for expense management: validated creation,
//! edits, and deletes, each expressed as a full load, an in-memory change,
//! and a full save of the ledger.

use tracing::info;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, ExpenseUpdate, Money};
use crate::storage::{
    delete_by_id, edit_by_id, next_id, normalize_category, validate_amount, validate_date,
    ExpenseStore,
};

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: String,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate and record a new expense, assigning the next free id
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        validate_date(&input.date)?;
        validate_amount(input.amount)?;
        let category = normalize_category(&input.category)?;

        let existing = self.store.load()?;
        let expense = Expense::new(
            next_id(&existing)?,
            input.date,
            input.amount,
            category,
            input.description,
        );

        self.store.append(expense.clone())?;
        info!(id = %expense.id, "created expense");

        Ok(expense)
    }

    /// List all expenses in ledger order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }

    /// Get the first expense with the given id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self.store.load()?.into_iter().find(|e| e.id == id))
    }

    /// Apply a partial update to an expense
    ///
    /// Returns the updated expense, or `None` if no expense has that id (in
    /// which case the ledger is not rewritten).
    pub fn update(&self, id: ExpenseId, update: &ExpenseUpdate) -> ExpenseResult<Option<Expense>> {
        let expenses = self.store.load()?;
        let edited = edit_by_id(&expenses, id, update)?;

        let Some(updated) = edited.iter().find(|e| e.id == id).cloned() else {
            return Ok(None);
        };

        self.store.save(&edited)?;
        info!(id = %id, "updated expense");

        Ok(Some(updated))
    }

    /// Delete every expense with the given id, returning how many were removed
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<usize> {
        let expenses = self.store.load()?;
        let remaining = delete_by_id(&expenses, id);
        let removed = expenses.len() - remaining.len();

        if removed > 0 {
            self.store.save(&remaining)?;
            info!(id = %id, removed, "deleted expense");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        store.initialize().unwrap();
        (temp_dir, store)
    }

    fn input(date: &str, amount: &str, category: &str, description: &str) -> CreateExpenseInput {
        CreateExpenseInput {
            date: date.into(),
            amount: Money::parse(amount).unwrap(),
            category: category.into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let first = service.create(input("2024-01-01", "10", " Food ", "lunch")).unwrap();
        let second = service.create(input("2024-01-02", "5.5", "Rent", "")).unwrap();

        assert_eq!(first.id, ExpenseId::new(1));
        assert_eq!(first.category, "Food");
        assert_eq!(second.id, ExpenseId::new(2));
        assert_eq!(service.list().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        assert!(service
            .create(input("2024-13-01", "1", "Food", ""))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create(input("2024-01-01", "-1", "Food", ""))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create(input("2024-01-01", "1", "  ", ""))
            .unwrap_err()
            .is_validation());

        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_after_largest_id_fails() {
        let (_temp_dir, store) = create_test_store();
        store
            .save(&[Expense::new(
                ExpenseId::new(i64::MAX),
                "2024-01-01",
                Money::from_cents(100),
                "Food",
                "",
            )])
            .unwrap();
        let service = ExpenseService::new(&store);

        let err = service
            .create(input("2024-01-02", "1", "Food", ""))
            .unwrap_err();
        assert!(matches!(err, crate::error::ExpenseError::Overflow(_)));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_update() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);
        let created = service.create(input("2024-01-01", "10", "Food", "lunch")).unwrap();

        let updated = service
            .update(created.id, &ExpenseUpdate::new().amount(Money::from_cents(1234)))
            .unwrap()
            .unwrap();

        assert_eq!(updated.amount, Money::from_cents(1234));
        assert_eq!(updated.description, "lunch");
        assert_eq!(service.get(created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_unknown_id() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);
        service.create(input("2024-01-01", "10", "Food", "")).unwrap();

        let result = service
            .update(ExpenseId::new(99), &ExpenseUpdate::new().description("x"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_reports_removed_count() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);
        let created = service.create(input("2024-01-01", "10", "Food", "")).unwrap();

        assert_eq!(service.delete(ExpenseId::new(99)).unwrap(), 0);
        assert_eq!(service.delete(created.id).unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
    }
}
