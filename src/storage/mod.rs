//! Storage layer for the expense tracker
//!
//! Persists the full expense collection as a CSV ledger with atomic
//! whole-file writes, and provides the field validation shared by every
//! operation that creates or changes an expense.

pub mod codec;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod validation;

pub use expenses::{delete_by_id, edit_by_id, next_id, search, ExpenseStore};
pub use init::initialize_ledger;
pub use validation::{normalize_category, parse_amount, validate_amount, validate_date};
