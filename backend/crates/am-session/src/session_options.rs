use crate::DEFAULT_SESSION_KEY;

/// Per-store settings that are not part of authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Storage key of the durable record
    pub key: String,
    /// Ask the backend to keep a copy of a corrupt record before deleting it
    pub backup_corrupted: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            key: String::from(DEFAULT_SESSION_KEY),
            backup_corrupted: false,
        }
    }
}
