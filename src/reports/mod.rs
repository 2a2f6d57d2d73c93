//! Summary and filter engine
//!
//! Read-only derivations over an in-memory expense collection: date and
//! category filters, per-category totals, and the overall total.

pub mod filter;
pub mod summary;

pub use filter::{filter_by_category, filter_by_date};
pub use summary::{overall, totals_by_category, CategorySummary, CategoryTotal};
