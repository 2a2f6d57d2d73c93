//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the ledger on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};

/// Open a file for buffered reading
pub fn open_reader<P: AsRef<Path>>(path: P) -> ExpenseResult<BufReader<File>> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(BufReader::new(file))
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> ExpenseResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> ExpenseResult<()> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path
        .file_name()
        .ok_or_else(|| ExpenseError::Io(format!("Not a file path: {}", path.display())))?
        .to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = write_temp(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            ExpenseError::Io(format!("Failed to replace {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        // Never leave a partial temp file next to the ledger
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Write and sync `contents` to `temp_path`
fn write_temp(temp_path: &Path, contents: &[u8]) -> ExpenseResult<()> {
    let file = File::create(temp_path).map_err(|e| {
        ExpenseError::Io(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| ExpenseError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
