//! Expense model
//!
//! An expense is the only entity in the ledger: an id, a calendar date, a
//! non-negative amount, a category, and a free-form description.

use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
///
/// The date is kept as the validated `YYYY-MM-DD` text rather than a parsed
/// calendar date. Range filters compare dates as strings and the ledger
/// accepts days that do not exist in a given month (e.g. `2024-02-31`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Expense date (`YYYY-MM-DD`)
    pub date: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Category, trimmed and never empty
    pub category: String,

    /// Free-form description, may be empty
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against category or description
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.category.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} {}", self.id, self.date, self.amount, self.category)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// A partial update for an existing expense
///
/// Each field is either `None` (leave unchanged) or `Some(value)` (replace).
/// Values are validated by the store before they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub date: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Create an update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Replace the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether the update would change anything
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            "2024-01-05",
            Money::from_cents(350),
            "Food",
            "Morning Coffee",
        )
    }

    #[test]
    fn test_matches_text() {
        let e = coffee();
        assert!(e.matches_text("coffee"));
        assert!(e.matches_text("foo"));
        assert!(e.matches_text(""));
        assert!(!e.matches_text("rent"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            coffee().to_string(),
            "#1 2024-01-05 $3.50 Food - Morning Coffee"
        );
    }

    #[test]
    fn test_update_builder() {
        let update = ExpenseUpdate::new().amount(Money::from_cents(100)).category("Fun");
        assert_eq!(update.amount, Some(Money::from_cents(100)));
        assert_eq!(update.category.as_deref(), Some("Fun"));
        assert!(update.date.is_none());
        assert!(!update.is_empty());
        assert!(ExpenseUpdate::new().is_empty());
    }
}
