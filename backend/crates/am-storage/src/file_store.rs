use crate::{KeyValueStore, StorageError, StorageResult, validate_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const RECORD_EXTENSION: &str = "json";

/// One file per key under a directory.
///
/// The directory is created on the first write, not on construction, so an
/// unused store leaves no trace on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`. `:` is not portable in file names,
    /// so it is written as `_`.
    pub fn record_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self
            .dir
            .join(format!("{}.{RECORD_EXTENSION}", key.replace(':', "_"))))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.record_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    /// Saves using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.record_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        // Unique per write so concurrent writers never share a temp file
        let temp_path = final_path.with_extension(format!(
            "{RECORD_EXTENSION}.tmp.{}.{}",
            std::process::id(),
            Uuid::new_v4().simple()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored {} bytes at {final_path:?}", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.record_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = path.with_extension(format!("{RECORD_EXTENSION}.corrupted.{timestamp}"));

        if let Err(e) = fs::rename(&path, &backup_path) {
            warn!("Could not backup corrupted record {path:?}: {e}");
            return Err(StorageError::backup_failed(path, e));
        }

        info!("Backed up corrupted record to {backup_path:?}");
        Ok(Some(backup_path.display().to_string()))
    }
}
