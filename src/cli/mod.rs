//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod menu;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use menu::run_menu;
pub use report::{handle_report_command, ReportCommands};

/// Today's local date as `YYYY-MM-DD`
pub(crate) fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
