//! CLI commands for querying the ledger
//!
//! Listing, filtering, searching, and the per-category summary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_totals_line};
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{filter_by_category, filter_by_date, overall, CategorySummary};
use crate::services::ExpenseService;
use crate::storage::{search, ExpenseStore};

/// Query subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show totals grouped by category
    Summary {
        /// Print the summary as CSV
        #[arg(long)]
        csv: bool,

        /// Write the CSV summary to a file
        #[arg(short, long, conflicts_with = "csv")]
        output: Option<PathBuf>,
    },

    /// Show the total of all expenses
    Total,

    /// Search descriptions and categories
    Search {
        /// Text to look for (case-insensitive)
        text: String,
    },
}

/// Handle query commands
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::List { from, to, category } => {
            let mut matches = match (from, to) {
                (Some(from), Some(to)) => filter_by_date(&expenses, &from, &to)?,
                _ => expenses,
            };
            if let Some(category) = category {
                matches = filter_by_category(&matches, &category)?;
            }

            print!("{}", format_expense_table(&matches, symbol));
            if !matches.is_empty() {
                print!(
                    "{}",
                    format_totals_line("Matches", matches.len(), overall(&matches)?, symbol)
                );
            }
        }

        ReportCommands::Summary { csv, output } => {
            let summary = CategorySummary::generate(&expenses)?;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    ExpenseError::Io(format!("Failed to create file {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                summary.export_csv(&mut writer)?;
                writer.flush().map_err(|e| {
                    ExpenseError::Io(format!("Failed to write file {}: {}", path.display(), e))
                })?;
                println!("Summary exported to: {}", path.display());
            } else if csv {
                let stdout = io::stdout();
                summary.export_csv(&mut stdout.lock())?;
            } else {
                print!("{}", summary.format_terminal(symbol));
            }
        }

        ReportCommands::Total => {
            println!(
                "Overall total: {} ({} expenses)",
                overall(&expenses)?.format_with_symbol(symbol),
                expenses.len()
            );
        }

        ReportCommands::Search { text } => {
            let matches = search(&expenses, &text);

            print!("{}", format_expense_table(&matches, symbol));
            if !matches.is_empty() {
                print!(
                    "{}",
                    format_totals_line("Matches", matches.len(), overall(&matches)?, symbol)
                );
            }
        }
    }

    Ok(())
}
