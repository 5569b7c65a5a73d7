//! Bill storage
//!
//! A rendered bill is written under a key derived from the bill's name.
//! `BillStore` is the port the bill saves through; `FileBillStore` is the
//! adapter that writes `<dir>/<key>.txt` on the local filesystem.
//!
//! Two bills whose names sanitize to the same key share one file, and the
//! later save overwrites the earlier one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::BillingError;

/// Directory bills are written to when none is configured
pub const DEFAULT_BILLS_DIR: &str = "bills";

/// File extension of a saved bill
pub const BILL_EXTENSION: &str = "txt";

/// Longest key, in UTF-8 bytes, kept from a bill name
///
/// File names are limited to 255 bytes on common filesystems; this leaves
/// room for the extension.
pub const MAX_KEY_BYTES: usize = 200;

/// Destination for rendered bills
pub trait BillStore {
    /// Writes `contents` under `key`, replacing anything already stored there
    ///
    /// Returns the location written to.
    fn write(&self, key: &str, contents: &str) -> io::Result<PathBuf>;
}

/// Writes bills as plain UTF-8 text files in a single directory
///
/// The directory is never created; a missing directory is a save error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBillStore {
    dir: PathBuf,
}

impl FileBillStore {
    /// Creates a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory bills are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{BILL_EXTENSION}"))
    }
}

impl Default for FileBillStore {
    fn default() -> Self {
        Self::new(DEFAULT_BILLS_DIR)
    }
}

impl BillStore for FileBillStore {
    fn write(&self, key: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path_for(key);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Derives a storage key that is safe to use as a single file name
///
/// Letters, digits, spaces, `-`, `_`, `.` and `'` are kept; everything
/// else (path separators, control characters, `:` and the like) is
/// dropped. Leading and trailing dots and spaces are trimmed, so the key
/// is never `.`, `..` or a hidden file, and is capped at [`MAX_KEY_BYTES`]
/// bytes, cut on a character boundary.
///
/// # Errors
///
/// Returns `InvalidName` if nothing usable remains.
pub fn sanitize_storage_key(name: &str) -> Result<String, BillingError> {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(*c, ' ' | '-' | '_' | '.' | '\''))
        .collect();

    let trim = |s: &str| s.trim_matches(|c: char| c == '.' || c == ' ').to_string();

    let key = trim(&kept);
    let mut end = key.len().min(MAX_KEY_BYTES);
    while !key.is_char_boundary(end) {
        end -= 1;
    }
    let key = trim(&key[..end]);

    if key.is_empty() {
        return Err(BillingError::InvalidName(name.to_string()));
    }

    Ok(key)
}
