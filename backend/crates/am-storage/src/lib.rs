//! Key-value persistence for the member dashboard.
//!
//! The session store keeps exactly one record here. Two backends ship:
//! [`MemoryStore`] for tests and throwaway runs, and [`FileStore`], which
//! writes each key to its own JSON file with an atomic rename.

mod error;
mod file_store;
mod key_value_store;
mod memory_store;


pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use key_value_store::{KeyValueStore, validate_key};
pub use memory_store::MemoryStore;
