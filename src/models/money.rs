//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The ledger always renders amounts with exactly two fractional
//! digits, so cents are the natural unit.

use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, or `None` if the result does not fit in cents
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, or `None` if any partial sum does not fit in cents
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+3", "$10.50", "10", ".5", "10.",
    /// and an exponent such as "1e2" or "2.5E-1". More than two fractional
    /// digits are rounded half away from zero to the nearest cent, so "0.125"
    /// parses as 13 cents.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let overflow = || MoneyParseError::Overflow(original.to_string());

        // Handle sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(at) => (&s[..at], parse_exponent(&s[at + 1..]).ok_or_else(invalid)?),
            None => (s, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let digits: Vec<i64> = whole
            .bytes()
            .chain(fraction.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();
        let len = i64::try_from(digits.len()).map_err(|_| overflow())?;

        // Position in `digits` just past the last whole-cent digit
        let point = i64::try_from(whole.len())
            .map_err(|_| overflow())?
            .saturating_add(exponent)
            .saturating_add(2);

        let mut cents: i64 = 0;
        for &digit in digits.iter().take(usize::try_from(point.clamp(0, len)).unwrap_or(0)) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit))
                .ok_or_else(overflow)?;
        }

        // Trailing zeros implied by the exponent; a nonzero value overflows
        // within a few iterations
        if cents != 0 {
            let mut remaining = point.saturating_sub(len);
            while remaining > 0 {
                cents = cents.checked_mul(10).ok_or_else(overflow)?;
                remaining -= 1;
            }
        }

        let round_digit = usize::try_from(point)
            .ok()
            .and_then(|i| digits.get(i))
            .copied()
            .unwrap_or(0);
        if round_digit >= 5 {
            cents = cents.checked_add(1).ok_or_else(overflow)?;
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format as a plain decimal with exactly two fractional digits ("12.50")
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

/// Parse the part after `e`/`E`: an optional sign and at least one digit
///
/// Out-of-range exponents saturate; the caller turns them into an overflow
/// or a zero amount.
fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -value } else { value })
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount too large: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
