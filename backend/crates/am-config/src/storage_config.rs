use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKUP_CORRUPTED, DEFAULT_STORAGE_DIR,
    DEFAULT_STORAGE_KEY,
};

use crate::config::relative_path_problem;

use std::str::FromStr;

use serde::Deserialize;

/// Where the durable session record lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One JSON file per key under `storage.dir`
    #[default]
    File,
    /// Process memory only; nothing survives a restart
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::storage(format!(
                "storage.backend must be 'file' or 'memory', got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend, relative to the config directory
    pub dir: String,
    /// The single named slot holding the session record
    pub key: String,
    /// Keep a copy of a corrupt session record instead of only deleting it
    pub backup_corrupted: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: String::from(DEFAULT_STORAGE_DIR),
            key: String::from(DEFAULT_STORAGE_KEY),
            backup_corrupted: DEFAULT_BACKUP_CORRUPTED,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.key.is_empty() {
            return Err(ConfigError::storage("storage.key cannot be empty"));
        }

        if !self
            .key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'))
        {
            return Err(ConfigError::storage(format!(
                "storage.key may only contain ASCII letters, digits, '.', '-', '_' and ':', got '{}'",
                self.key
            )));
        }

        if self.backend == StorageBackend::File
            && let Some(problem) = relative_path_problem("storage.dir", &self.dir)
        {
            return Err(ConfigError::storage(problem));
        }

        Ok(())
    }
}
