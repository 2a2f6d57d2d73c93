//! Field validation shared by every mutator
//!
//! Dates are checked for shape and range only. There is no month-length or
//! leap-year check, so `2024-02-31` is accepted.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Validate a `YYYY-MM-DD` date string
pub fn validate_date(date: &str) -> ExpenseResult<()> {
    let bytes = date.as_bytes();

    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(ExpenseError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD (e.g., 2025-10-24)",
            date
        )));
    }

    let two_digits = |at: usize| u32::from(bytes[at] - b'0') * 10 + u32::from(bytes[at + 1] - b'0');
    let month = two_digits(5);
    let day = two_digits(8);

    if !(1..=12).contains(&month) {
        return Err(ExpenseError::Validation(format!(
            "Invalid date '{}': month must be between 01 and 12",
            date
        )));
    }

    if !(1..=31).contains(&day) {
        return Err(ExpenseError::Validation(format!(
            "Invalid date '{}': day must be between 01 and 31",
            date
        )));
    }

    Ok(())
}

/// Parse a user-supplied amount, rejecting non-numeric and negative values
pub fn parse_amount(text: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(text).map_err(|e| {
        ExpenseError::Validation(format!("Amount must be a number. {}", e))
    })?;
    validate_amount(amount)?;
    Ok(amount)
}

/// Reject negative amounts
pub fn validate_amount(amount: Money) -> ExpenseResult<()> {
    if amount.is_negative() {
        return Err(ExpenseError::Validation(format!(
            "Amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(())
}

/// Trim a category, rejecting empty or whitespace-only input
pub fn normalize_category(category: &str) -> ExpenseResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::Validation("Category cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(validate_date("2024-01-01").is_ok());
        assert!(validate_date("2024-12-31").is_ok());
        // No cross-check of day against month
        assert!(validate_date("2024-02-31").is_ok());
        assert!(validate_date("2023-02-29").is_ok());
    }

    #[test]
    fn test_month_out_of_range() {
        let err = validate_date("2024-13-01").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("month"));
        assert!(validate_date("2024-00-10").is_err());
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(validate_date("2024-01-00").is_err());
        assert!(validate_date("2024-01-32").is_err());
    }

    #[test]
    fn test_bad_shape() {
        assert!(validate_date("").is_err());
        assert!(validate_date("2024-1-01").is_err());
        assert!(validate_date("2024/01/01").is_err());
        assert!(validate_date("2024-01-01 ").is_err());
        assert!(validate_date("20a4-01-01").is_err());
        assert!(validate_date("2024-01-0é").is_err());
        assert!(validate_date("24-01-2024").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert_eq!(parse_amount("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        let err = parse_amount("-1.00").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        let err = parse_amount("ten").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("  Food ").unwrap(), "Food");
        assert!(normalize_category("").unwrap_err().is_validation());
        assert!(normalize_category(" \t ").is_err());
    }
}
