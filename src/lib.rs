//! Expense Tracker - personal expense tracking backed by a CSV ledger
//!
//! This library provides the core functionality for the `expenses` binary:
//! a flat-file record store for expenses and a set of pure filter and
//! summary functions over the loaded records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, money)
//! - `storage`: CSV ledger storage, validation, and record operations
//! - `reports`: Date and category filters, per-category summaries
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::reports::totals_by_category;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.csv");
//! store.initialize()?;
//! let totals = totals_by_category(&store.load()?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
