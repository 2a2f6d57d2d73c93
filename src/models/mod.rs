//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the ledger:
//! expenses, their identifiers, and monetary amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseUpdate};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
