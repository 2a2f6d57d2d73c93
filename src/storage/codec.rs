//! CSV encoding for the expense ledger
//!
//! The on-disk format is a header line followed by one record per expense:
//!
//! ```text
//! id,date,amount,category,description
//! 1,2024-01-05,3.50,Food,"coffee, large"
//! ```
//!
//! A field is wrapped in quotes only when it contains a comma, a quote, or a
//! line break; embedded quotes are doubled. Amounts are always written with
//! two fractional digits. On read, rows that cannot be turned into an
//! expense are dropped so one corrupt line never hides the rest of the data.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};

/// Header line of every ledger file
pub const HEADER: &str = "id,date,amount,category,description";

/// Number of fields in a ledger record
pub const FIELD_COUNT: usize = 5;

/// Quote a field if it contains a delimiter, quote, or line break
pub fn escape_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render a single expense as a ledger line (without the trailing newline)
pub fn encode_expense(expense: &Expense) -> String {
    format!(
        "{},{},{},{},{}",
        expense.id,
        escape_field(&expense.date),
        expense.amount.to_decimal_string(),
        escape_field(&expense.category),
        escape_field(&expense.description)
    )
}

/// Render a full ledger, header included
pub fn encode_expenses(expenses: &[Expense]) -> String {
    let mut output = String::with_capacity(HEADER.len() + 1 + expenses.len() * 48);
    output.push_str(HEADER);
    output.push('\n');

    for expense in expenses {
        output.push_str(&encode_expense(expense));
        output.push('\n');
    }

    output
}

/// Parse a ledger, skipping the header line and any malformed rows
///
/// Only failures of the underlying reader are reported; a row with too few
/// fields, a non-integer id, or an unusable amount is dropped.
pub fn decode_expenses<R: Read>(reader: R) -> ExpenseResult<Vec<Expense>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut expenses = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        // Record 0 follows the header, which sits on line 1
        let line = index + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(ExpenseError::Io(format!("Failed to read ledger: {}", e)));
            }
            Err(e) => {
                debug!(line, error = %e, "skipping unreadable ledger row");
                continue;
            }
        };

        match decode_record(&record) {
            Some(expense) => expenses.push(expense),
            None => debug!(line, "skipping malformed ledger row"),
        }
    }

    Ok(expenses)
}

/// Turn one CSV record into an expense, or `None` if it is malformed
fn decode_record(record: &StringRecord) -> Option<Expense> {
    if record.len() < FIELD_COUNT {
        return None;
    }

    let id: i64 = record.get(0)?.trim().parse().ok()?;
    let amount = Money::parse(record.get(2)?).ok()?;
    if amount.is_negative() {
        return None;
    }

    Some(Expense::new(
        ExpenseId::new(id),
        record.get(1)?,
        amount,
        record.get(3)?,
        record.get(4)?,
    ))
}
