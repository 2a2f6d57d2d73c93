//! Category summary
//!
//! Aggregates expense amounts by category. The raw totals are an unordered
//! map; [`CategorySummary`] sorts them by category name for display.

use std::collections::HashMap;
use std::io::Write;

use crate::display::truncate;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::codec::escape_field;

/// Sum of amounts per category, keyed by the exact category string
///
/// Fails if a category total does not fit in cents.
pub fn totals_by_category(expenses: &[Expense]) -> ExpenseResult<HashMap<String, Money>> {
    let mut totals: HashMap<String, Money> = HashMap::new();
    for expense in expenses {
        let total = totals
            .entry(expense.category.clone())
            .or_insert_with(Money::zero);
        *total = total
            .checked_add(expense.amount)
            .ok_or_else(|| total_too_large(&expense.category))?;
    }
    Ok(totals)
}

/// Sum of all amounts
///
/// Fails if the total does not fit in cents.
pub fn overall(expenses: &[Expense]) -> ExpenseResult<Money> {
    Money::checked_sum(expenses.iter().map(|e| e.amount))
        .ok_or_else(|| total_too_large("all categories"))
}

fn total_too_large(scope: &str) -> ExpenseError {
    ExpenseError::Overflow(format!("Total for {} is too large to represent", scope))
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Share of the overall total
    pub percentage: f64,
}

/// Per-category totals for a collection
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// One row per category, sorted by name
    pub categories: Vec<CategoryTotal>,
    /// Total across all categories
    pub overall: Money,
    /// Number of expenses summarized
    pub expense_count: usize,
}

impl CategorySummary {
    /// Build the summary for a collection
    pub fn generate(expenses: &[Expense]) -> ExpenseResult<Self> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for expense in expenses {
            *counts.entry(expense.category.as_str()).or_default() += 1;
        }

        let overall = overall(expenses)?;

        let mut categories: Vec<CategoryTotal> = totals_by_category(expenses)?
            .into_iter()
            .map(|(category, total)| {
                let percentage = if overall.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / overall.cents() as f64) * 100.0
                };
                let expense_count = counts.get(category.as_str()).copied().unwrap_or(0);

                CategoryTotal {
                    category,
                    total,
                    expense_count,
                    percentage,
                }
            })
            .collect();

        categories.sort_by(|a, b| a.category.cmp(&b.category));

        Ok(Self {
            categories,
            overall,
            expense_count: expenses.len(),
        })
    }

    /// Look up the total for one category
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "{:<24} {:>14} {:>7} {:>7}\n",
            "Category", "Total", "Count", "%"
        ));
        output.push_str(&"-".repeat(55));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>14} {:>7} {:>6.1}%\n",
                truncate(&row.category, 24),
                row.total.format_with_symbol(currency_symbol),
                row.expense_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(55));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>7}\n",
            "OVERALL",
            self.overall.format_with_symbol(currency_symbol),
            self.expense_count
        ));

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        writeln!(writer, "category,total,count,percentage")
            .map_err(|e| ExpenseError::Io(e.to_string()))?;

        for row in &self.categories {
            writeln!(
                writer,
                "{},{},{},{:.2}",
                escape_field(&row.category),
                row.total.to_decimal_string(),
                row.expense_count,
                row.percentage
            )
            .map_err(|e| ExpenseError::Io(e.to_string()))?;
        }

        Ok(())
    }
}
