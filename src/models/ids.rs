//! Strongly-typed expense identifier
//!
//! Ids are plain integers on disk. The newtype keeps them from being mixed up
//! with counts or indexes in the rest of the code.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an ID from its integer value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// The id that follows this one, or `None` past the largest id
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
