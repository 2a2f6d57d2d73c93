//! Filters over an expense collection
//!
//! Filters never mutate their input; they return the matching records in
//! their original order.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::validation::{normalize_category, validate_date};

/// Expenses dated within `[start_date, end_date]`, inclusive
///
/// Both bounds must be valid `YYYY-MM-DD` dates and `end_date` must not be
/// earlier than `start_date`. ISO dates sort lexicographically in calendar
/// order, so bounds and record dates are compared as strings.
pub fn filter_by_date(
    expenses: &[Expense],
    start_date: &str,
    end_date: &str,
) -> ExpenseResult<Vec<Expense>> {
    validate_date(start_date)?;
    validate_date(end_date)?;

    if end_date < start_date {
        return Err(ExpenseError::Validation(format!(
            "End date {} must be on or after start date {}",
            end_date, start_date
        )));
    }

    Ok(expenses
        .iter()
        .filter(|e| start_date <= e.date.as_str() && e.date.as_str() <= end_date)
        .cloned()
        .collect())
}

/// Expenses whose category matches `category`, ignoring case
///
/// The target is trimmed first and must not be empty.
pub fn filter_by_category(expenses: &[Expense], category: &str) -> ExpenseResult<Vec<Expense>> {
    let target = normalize_category(category)?.to_lowercase();

    Ok(expenses
        .iter()
        .filter(|e| e.category.to_lowercase() == target)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn expense(id: i64, date: &str, category: &str) -> Expense {
        Expense::new(ExpenseId::new(id), date, Money::from_cents(100), category, "")
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "2023-12-31", "Food"),
            expense(2, "2024-01-01", "food"),
            expense(3, "2024-01-15", "Rent"),
            expense(4, "2024-01-31", "FOOD"),
            expense(5, "2024-02-01", "Travel"),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<i64> {
        expenses.iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_filter_by_date_inclusive() {
        let result = filter_by_date(&sample(), "2024-01-01", "2024-01-31").unwrap();
        assert_eq!(ids(&result), vec![2, 3, 4]);
    }

    #[test]
    fn test_filter_by_date_single_day() {
        let result = filter_by_date(&sample(), "2024-01-15", "2024-01-15").unwrap();
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_filter_by_date_reversed_range() {
        let err = filter_by_date(&sample(), "2024-02-01", "2024-01-01").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_filter_by_date_invalid_bound() {
        assert!(filter_by_date(&sample(), "2024-1-01", "2024-01-31")
            .unwrap_err()
            .is_validation());
        assert!(filter_by_date(&sample(), "2024-01-01", "2024-13-31")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_filter_by_category_ignores_case() {
        let result = filter_by_category(&sample(), "  fOOd ").unwrap();
        assert_eq!(ids(&result), vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_by_category_exact_match_only() {
        assert!(filter_by_category(&sample(), "Foo").unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_category_empty_target() {
        assert!(filter_by_category(&sample(), "  ").unwrap_err().is_validation());
    }
}
