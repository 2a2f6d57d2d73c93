//! Ledger initialization
//!
//! Creating the ledger is an explicit step so that loading never has hidden
//! side effects on the filesystem.

use std::path::Path;

use tracing::info;

use crate::error::ExpenseResult;

use super::codec::encode_expenses;
use super::file_io::write_atomic;

/// Create the ledger with only a header line, if it does not exist
///
/// Parent directories are created as needed. An existing ledger is left
/// untouched.
pub fn initialize_ledger<P: AsRef<Path>>(path: P) -> ExpenseResult<()> {
    let path = path.as_ref();

    if ledger_exists(path) {
        return Ok(());
    }

    info!(path = %path.display(), "creating expense ledger");
    write_atomic(path, encode_expenses(&[]).as_bytes())
}

/// Check if the ledger file exists
pub fn ledger_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}
