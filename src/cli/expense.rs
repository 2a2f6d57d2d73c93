//! Expense CLI commands
//!
//! Implements the commands that change the ledger: add, edit, and delete.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_details;
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, ExpenseUpdate};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::{parse_amount, ExpenseStore};

use super::today;

/// Commands that modify expenses
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// Edit fields of an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let input = CreateExpenseInput {
                date: date.unwrap_or_else(today),
                amount: parse_amount(&amount)?,
                category,
                description,
            };

            let expense = service.create(input)?;

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            date,
            amount,
            category,
            description,
        } => {
            let update = ExpenseUpdate {
                date,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                description,
            };

            if update.is_empty() {
                println!("Nothing to change. Pass at least one of --date, --amount, --category, --description.");
                return Ok(());
            }

            match service.update(id, &update)? {
                Some(updated) => {
                    println!("Updated expense:");
                    print!("{}", format_expense_details(&updated, symbol));
                }
                None => println!("No expense with ID {} (nothing changed)", id),
            }
        }

        ExpenseCommands::Delete { id, force } => {
            if !force {
                match service.get(id)? {
                    Some(expense) => {
                        println!("About to delete expense:");
                        print!("{}", format_expense_details(&expense, symbol));
                        println!();
                        println!("Use --force to confirm deletion");
                    }
                    None => println!("No expense with ID {} (nothing deleted)", id),
                }
                return Ok(());
            }

            match service.delete(id)? {
                0 => println!("No expense with ID {} (nothing deleted)", id),
                1 => println!("Deleted expense {}", id),
                n => println!("Deleted {} expenses with ID {}", n, id),
            }
        }
    }

    Ok(())
}
