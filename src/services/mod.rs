//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and id assignment.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseService};
