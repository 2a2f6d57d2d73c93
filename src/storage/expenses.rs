//! Expense store backed by a CSV ledger
//!
//! `ExpenseStore` owns the path of the ledger and performs whole-file loads
//! and saves. The collection operations (`next_id`, `delete_by_id`,
//! `edit_by_id`, `search`) are pure functions over an in-memory slice and
//! return new collections.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate};

use super::codec::{decode_expenses, encode_expenses};
use super::file_io::{open_reader, write_atomic};
use super::init::{initialize_ledger, ledger_exists};
use super::validation::{normalize_category, validate_amount, validate_date};

/// Store for the expense ledger at a fixed path
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the ledger at `path`
    ///
    /// No I/O happens here; call [`ExpenseStore::initialize`] to create the
    /// file on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the ledger path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger (and its directories) if it does not exist yet
    pub fn initialize(&self) -> ExpenseResult<()> {
        initialize_ledger(&self.path)
    }

    /// Check if the ledger file exists
    pub fn is_initialized(&self) -> bool {
        ledger_exists(&self.path)
    }

    /// Load every well-formed expense from the ledger
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let reader = open_reader(&self.path)?;
        let expenses = decode_expenses(reader)?;
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Replace the ledger contents with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_atomic(&self.path, encode_expenses(expenses).as_bytes())?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }

    /// Add one expense to the ledger
    ///
    /// This is a load followed by a save; it is not atomic across the two.
    pub fn append(&self, expense: Expense) -> ExpenseResult<()> {
        let mut expenses = self.load()?;
        info!(id = %expense.id, "appending expense");
        expenses.push(expense);
        self.save(&expenses)
    }
}

/// One greater than the largest id present, or 1 for an empty collection
///
/// Fails when the largest id is already `i64::MAX`.
pub fn next_id(expenses: &[Expense]) -> ExpenseResult<ExpenseId> {
    match expenses.iter().map(|e| e.id).max() {
        None => Ok(ExpenseId::new(1)),
        Some(max) => max.checked_next().ok_or_else(|| {
            ExpenseError::Overflow(format!("No id is left after expense {}", max))
        }),
    }
}

/// Remove every expense with the given id
pub fn delete_by_id(expenses: &[Expense], id: ExpenseId) -> Vec<Expense> {
    expenses.iter().filter(|e| e.id != id).cloned().collect()
}

/// Apply `update` to the first expense with the given id
///
/// Supplied fields are validated the same way as on creation before anything
/// is changed. An unknown id returns the collection unchanged.
pub fn edit_by_id(
    expenses: &[Expense],
    id: ExpenseId,
    update: &ExpenseUpdate,
) -> ExpenseResult<Vec<Expense>> {
    if let Some(date) = &update.date {
        validate_date(date)?;
    }
    if let Some(amount) = update.amount {
        validate_amount(amount)?;
    }
    let category = update
        .category
        .as_deref()
        .map(normalize_category)
        .transpose()?;

    let mut out = expenses.to_vec();

    if let Some(expense) = out.iter_mut().find(|e| e.id == id) {
        if let Some(date) = &update.date {
            expense.date = date.clone();
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = category;
        }
        if let Some(description) = &update.description {
            expense.description = description.clone();
        }
    }

    Ok(out)
}

/// Case-insensitive search over category and description, in original order
pub fn search(expenses: &[Expense], text: &str) -> Vec<Expense> {
    let needle = text.to_lowercase();
    expenses
        .iter()
        .filter(|e| e.matches_text(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::codec::HEADER;
    use std::fs;
    use tempfile::TempDir;

    fn expense(id: i64, date: &str, cents: i64, category: &str, description: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            date,
            Money::from_cents(cents),
            category,
            description,
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "2024-01-05", 350, "Food", "morning coffee"),
            expense(2, "2024-01-20", 120000, "Rent", "January rent"),
            expense(3, "2024-02-02", 4599, "Travel", "train, return"),
        ]
    }

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("data").join("expenses.csv"));
        (temp_dir, store)
    }

    fn ids(expenses: &[Expense]) -> Vec<i64> {
        expenses.iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_load_requires_initialized_ledger() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.is_initialized());
        assert!(store.load().unwrap_err().is_io());

        store.initialize().unwrap();
        assert!(store.is_initialized());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();
        let mut items = sample();
        items.push(expense(4, "2024-02-03", 1, "Misc", "quote \" and\nnewline"));

        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), items);

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with(HEADER));
        assert!(text.contains("3,2024-02-02,45.99,Travel,\"train, return\""));
    }

    #[test]
    fn test_append() {
        let (_temp_dir, store) = create_test_store();
        store.initialize().unwrap();

        store.append(expense(1, "2024-01-05", 350, "Food", "")).unwrap();
        store.append(expense(2, "2024-01-06", 700, "Food", "")).unwrap();

        assert_eq!(ids(&store.load().unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let (_temp_dir, store) = create_test_store();
        store.initialize().unwrap();
        fs::write(
            store.path(),
            format!(
                "{}\n1,2024-01-01,10.00,Food,a\nabc,2024-01-01,10,Food,x\n2,2024-01-02,3.00,Food,b\n",
                HEADER
            ),
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(ids(&loaded), vec![1, 2]);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]).unwrap(), ExpenseId::new(1));
        assert_eq!(
            next_id(&[expense(5, "2024-01-01", 0, "A", "")]).unwrap(),
            ExpenseId::new(6)
        );
        assert_eq!(
            next_id(&[
                expense(3, "2024-01-01", 0, "A", ""),
                expense(7, "2024-01-01", 0, "A", ""),
            ])
            .unwrap(),
            ExpenseId::new(8)
        );
    }

    #[test]
    fn test_next_id_after_largest_id() {
        let (_temp_dir, store) = create_test_store();
        store.initialize().unwrap();
        fs::write(
            store.path(),
            format!("{}\n9223372036854775807,2024-01-01,1.00,Food,a\n", HEADER),
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].id, ExpenseId::new(i64::MAX));

        let err = next_id(&loaded).unwrap_err();
        assert!(matches!(err, ExpenseError::Overflow(_)));
    }

    #[test]
    fn test_delete_by_id() {
        let items = sample();
        assert_eq!(ids(&delete_by_id(&items, ExpenseId::new(2))), vec![1, 3]);
        assert_eq!(delete_by_id(&items, ExpenseId::new(9)), items);
    }

    #[test]
    fn test_delete_removes_all_duplicates() {
        let items = vec![
            expense(1, "2024-01-01", 100, "A", ""),
            expense(1, "2024-01-02", 200, "B", ""),
            expense(2, "2024-01-03", 300, "C", ""),
        ];
        assert_eq!(ids(&delete_by_id(&items, ExpenseId::new(1))), vec![2]);
    }

    #[test]
    fn test_edit_only_amount() {
        let items = sample();
        let update = ExpenseUpdate::new().amount(Money::from_cents(999));

        let edited = edit_by_id(&items, ExpenseId::new(2), &update).unwrap();

        assert_eq!(edited[0], items[0]);
        assert_eq!(edited[2], items[2]);
        assert_eq!(edited[1].amount, Money::from_cents(999));
        assert_eq!(edited[1].date, items[1].date);
        assert_eq!(edited[1].category, items[1].category);
        assert_eq!(edited[1].description, items[1].description);
    }

    #[test]
    fn test_edit_normalizes_category() {
        let items = sample();
        let update = ExpenseUpdate::new()
            .category("  Groceries ")
            .date("2024-03-01")
            .description("");

        let edited = edit_by_id(&items, ExpenseId::new(1), &update).unwrap();
        assert_eq!(edited[0].category, "Groceries");
        assert_eq!(edited[0].date, "2024-03-01");
        assert_eq!(edited[0].description, "");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let items = sample();
        let update = ExpenseUpdate::new().amount(Money::from_cents(1));
        assert_eq!(edit_by_id(&items, ExpenseId::new(42), &update).unwrap(), items);
    }

    #[test]
    fn test_edit_rejects_invalid_fields() {
        let items = sample();

        let bad_date = ExpenseUpdate::new().date("2024-13-01");
        assert!(edit_by_id(&items, ExpenseId::new(1), &bad_date)
            .unwrap_err()
            .is_validation());

        let bad_amount = ExpenseUpdate::new().amount(Money::from_cents(-1));
        assert!(edit_by_id(&items, ExpenseId::new(1), &bad_amount)
            .unwrap_err()
            .is_validation());

        let bad_category = ExpenseUpdate::new().category("   ");
        assert!(edit_by_id(&items, ExpenseId::new(1), &bad_category)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_edit_affects_first_duplicate_only() {
        let items = vec![
            expense(1, "2024-01-01", 100, "A", ""),
            expense(1, "2024-01-02", 200, "B", ""),
        ];
        let update = ExpenseUpdate::new().description("first");

        let edited = edit_by_id(&items, ExpenseId::new(1), &update).unwrap();
        assert_eq!(edited[0].description, "first");
        assert_eq!(edited[1].description, "");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = sample();
        assert_eq!(ids(&search(&items, "COFFEE")), vec![1]);
        assert_eq!(ids(&search(&items, "rent")), vec![2]);
        assert_eq!(ids(&search(&items, "TRAVEL")), vec![3]);
        assert!(search(&items, "nothing").is_empty());
        assert_eq!(ids(&search(&items, "")), vec![1, 2, 3]);
    }
}
