use crate::{StorageError, StorageResult};

use std::fmt::Debug;

/// Durable string slots addressed by key, the local-storage analogue.
///
/// Implementations must be safe to share between threads; every call is a
/// complete operation with no partial writes visible to readers.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Read a record. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Create or replace a record.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a record. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Keep a copy of a record that is about to be discarded as corrupt.
    ///
    /// Returns a description of where the copy went, or `None` when the
    /// backend keeps nothing.
    fn backup_corrupted(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(None)
    }
}

/// Keys are non-empty ASCII alphanumerics plus `.`, `-`, `_` and `:`.
#[track_caller]
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}
