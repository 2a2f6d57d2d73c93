//! Expense display formatting
//!
//! Renders expenses as a table with the columns ID, Date, Amount, Category,
//! and Description.

use crate::models::{Expense, Money};

use super::truncate;

/// Format a single expense as a table row
fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    // Keep multi-line descriptions on one row
    let description = expense.description.replace(['\r', '\n'], " ");

    format!(
        "{:<5} {:<10} {:>12} {:<16} {}",
        expense.id,
        expense.date,
        expense.amount.format_with_symbol(currency_symbol),
        truncate(&expense.category, 16),
        description
    )
    .trim_end()
    .to_string()
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<10} {:>12} {:<16} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("  ID:          {}\n", expense.id));
    output.push_str(&format!("  Date:        {}\n", expense.date));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }

    output
}

/// Format the "count | total" footer shown under a table
pub fn format_totals_line(label: &str, count: usize, total: Money, currency_symbol: &str) -> String {
    format!(
        "{}: {}  |  Total: {}\n",
        label,
        count,
        total.format_with_symbol(currency_symbol)
    )
}
