//! Interactive menu
//!
//! A numbered menu over stdin/stdout. Validation errors are reported as
//! `Input error: ...` and totals too large to represent as `Error: ...`;
//! either way the menu is shown again. I/O errors end the session.
//! Input and output are generic so the loop can be driven from tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_totals_line};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate};
use crate::reports::{filter_by_category, filter_by_date, overall, CategorySummary};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::{parse_amount, search, ExpenseStore};

use super::today;

const MENU: &str = "
==== Expense Tracker ====
1) Add expense
2) View all expenses
3) Filter by date range
4) Filter by category
5) Summary by category
6) Overall total
7) Delete expense by ID
8) Edit expense by ID
9) Search
0) Exit
";

/// Run the interactive menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    store: &ExpenseStore,
    settings: &Settings,
    input: R,
    output: W,
) -> ExpenseResult<()> {
    Menu {
        service: ExpenseService::new(store),
        symbol: &settings.currency_symbol,
        input,
        output,
    }
    .run()
}

struct Menu<'a, R, W> {
    service: ExpenseService<'a>,
    symbol: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    fn run(&mut self) -> ExpenseResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                break;
            };

            let result = match choice.as_str() {
                "1" => self.add(),
                "2" => self.view_all(),
                "3" => self.filter_dates(),
                "4" => self.filter_category(),
                "5" => self.summary(),
                "6" => self.total(),
                "7" => self.delete(),
                "8" => self.edit(),
                "9" => self.search(),
                "0" => break,
                other => {
                    debug!(choice = other, "unknown menu choice");
                    writeln!(self.output, "Invalid choice. Please enter 0-9.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(ExpenseError::Validation(msg)) => writeln!(self.output, "Input error: {}", msg)?,
                Err(ExpenseError::Overflow(msg)) => writeln!(self.output, "Error: {}", msg)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_id(&mut self) -> ExpenseResult<Option<ExpenseId>> {
        let Some(text) = self.prompt("Expense ID: ")? else {
            return Ok(None);
        };

        text.parse()
            .map(Some)
            .map_err(|_| ExpenseError::Validation(format!("ID must be a whole number, got '{}'", text)))
    }

    fn show(&mut self, expenses: &[Expense]) -> ExpenseResult<()> {
        write!(self.output, "{}", format_expense_table(expenses, self.symbol))?;
        if !expenses.is_empty() {
            write!(
                self.output,
                "{}",
                format_totals_line("Matches", expenses.len(), overall(expenses)?, self.symbol)
            )?;
        }
        Ok(())
    }

    fn add(&mut self) -> ExpenseResult<()> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(());
        };
        let amount = parse_amount(&amount)?;
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Description (optional): ")? else {
            return Ok(());
        };

        let expense = self.service.create(CreateExpenseInput {
            date: if date.is_empty() { today() } else { date },
            amount,
            category,
            description,
        })?;

        writeln!(self.output, "Added expense:")?;
        write!(self.output, "{}", format_expense_details(&expense, self.symbol))?;
        Ok(())
    }

    fn view_all(&mut self) -> ExpenseResult<()> {
        let expenses = self.service.list()?;
        write!(self.output, "{}", format_expense_table(&expenses, self.symbol))?;
        write!(
            self.output,
            "{}",
            format_totals_line("Expenses", expenses.len(), overall(&expenses)?, self.symbol)
        )?;
        Ok(())
    }

    fn filter_dates(&mut self) -> ExpenseResult<()> {
        let Some(start) = self.prompt("Start date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(end) = self.prompt("End date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        let matches = filter_by_date(&self.service.list()?, &start, &end)?;
        self.show(&matches)
    }

    fn filter_category(&mut self) -> ExpenseResult<()> {
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(());
        };

        let matches = filter_by_category(&self.service.list()?, &category)?;
        self.show(&matches)
    }

    fn summary(&mut self) -> ExpenseResult<()> {
        let summary = CategorySummary::generate(&self.service.list()?)?;
        write!(self.output, "{}", summary.format_terminal(self.symbol))?;
        Ok(())
    }

    fn total(&mut self) -> ExpenseResult<()> {
        let total = overall(&self.service.list()?)?;
        writeln!(self.output, "Overall total: {}", total.format_with_symbol(self.symbol))?;
        Ok(())
    }

    fn delete(&mut self) -> ExpenseResult<()> {
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };

        match self.service.delete(id)? {
            0 => writeln!(self.output, "No expense with ID {}.", id)?,
            _ => writeln!(self.output, "Deleted expense {}.", id)?,
        }
        Ok(())
    }

    fn edit(&mut self) -> ExpenseResult<()> {
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };
        let Some(current) = self.service.get(id)? else {
            writeln!(self.output, "No expense with ID {}.", id)?;
            return Ok(());
        };

        write!(self.output, "{}", format_expense_details(&current, self.symbol))?;
        writeln!(self.output, "Leave a field blank to keep it.")?;

        let mut update = ExpenseUpdate::new();
        let Some(date) = self.prompt("New date: ")? else {
            return Ok(());
        };
        if !date.is_empty() {
            update = update.date(date);
        }
        let Some(amount) = self.prompt("New amount: ")? else {
            return Ok(());
        };
        if !amount.is_empty() {
            update = update.amount(parse_amount(&amount)?);
        }
        let Some(category) = self.prompt("New category: ")? else {
            return Ok(());
        };
        if !category.is_empty() {
            update = update.category(category);
        }
        let Some(description) = self.prompt("New description: ")? else {
            return Ok(());
        };
        if !description.is_empty() {
            update = update.description(description);
        }

        if update.is_empty() {
            writeln!(self.output, "Nothing changed.")?;
            return Ok(());
        }

        match self.service.update(id, &update)? {
            Some(updated) => {
                writeln!(self.output, "Updated expense:")?;
                write!(self.output, "{}", format_expense_details(&updated, self.symbol))?;
            }
            None => writeln!(self.output, "No expense with ID {}.", id)?,
        }
        Ok(())
    }

    fn search(&mut self) -> ExpenseResult<()> {
        let Some(text) = self.prompt("Search text: ")? else {
            return Ok(());
        };

        let matches = search(&self.service.list()?, &text);
        self.show(&matches)
    }
}
