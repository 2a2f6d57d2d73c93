//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses for terminal display.

pub mod expense;

pub use expense::{format_expense_details, format_expense_table, format_totals_line};

/// Shorten `s` to at most `max_chars` characters, marking the cut with `…`
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
