use crate::{KeyValueStore, StorageError, StorageResult, validate_key};

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
    writes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with records; seeding does not count as a write.
    pub fn seeded<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of successful `set` and `remove` calls so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;

        let records = self
            .records
            .read()
            .map_err(|_| StorageError::lock_poisoned())?;

        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;

        self.records
            .write()
            .map_err(|_| StorageError::lock_poisoned())?
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);

        debug!("Stored {} bytes under '{key}' (memory)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;

        self.records
            .write()
            .map_err(|_| StorageError::lock_poisoned())?
            .remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);

        debug!("Removed '{key}' (memory)");
        Ok(())
    }
}
