use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ContentConfig,
    DEFAULT_CONFIG_DIR, LoggingConfig, SessionConfig, StorageBackend, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AM_CONFIG_DIR env var, else use ./.am/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AM_CONFIG_DIR env var > ./.am/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.session.validate()?;
        self.content.validate()?;

        if let Some(ref file) = self.logging.file
            && let Some(problem) = relative_path_problem("logging.file", file)
        {
            return Err(ConfigError::config(problem));
        }

        Ok(())
    }

    /// Absolute directory of the file storage backend.
    pub fn storage_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the seed file, when one is configured.
    pub fn seed_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.content.seed_file {
            Some(ref file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        match self.storage.backend {
            StorageBackend::File => info!(
                "  storage: file ({}), key={}, backup_corrupted={}",
                self.storage.dir, self.storage.key, self.storage.backup_corrupted
            ),
            StorageBackend::Memory => info!("  storage: memory, key={}", self.storage.key),
        }

        info!(
            "  session: sign_in={}ms, provider={}ms, sign_up={}ms",
            self.session.sign_in_delay_ms,
            self.session.provider_delay_ms,
            self.session.sign_up_delay_ms
        );

        info!(
            "  content: seed={}{}",
            self.content.seed.as_str(),
            self.content
                .seed_file
                .as_deref()
                .map(|f| format!(" ({f})"))
                .unwrap_or_default()
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Storage
        Self::apply_env_enum("AM_STORAGE_BACKEND", &mut self.storage.backend)?;
        Self::apply_env_string("AM_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_string("AM_STORAGE_KEY", &mut self.storage.key);
        Self::apply_env_bool(
            "AM_STORAGE_BACKUP_CORRUPTED",
            &mut self.storage.backup_corrupted,
        );

        // Session
        Self::apply_env_parse("AM_SIGN_IN_DELAY_MS", &mut self.session.sign_in_delay_ms);
        Self::apply_env_parse("AM_PROVIDER_DELAY_MS", &mut self.session.provider_delay_ms);
        Self::apply_env_parse("AM_SIGN_UP_DELAY_MS", &mut self.session.sign_up_delay_ms);

        // Content
        Self::apply_env_enum("AM_CONTENT_SEED", &mut self.content.seed)?;
        Self::apply_env_option_string("AM_CONTENT_SEED_FILE", &mut self.content.seed_file);

        // Logging
        Self::apply_env_parse("AM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AM_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for enum values.
    /// Unlike numbers, an unknown variant is reported instead of ignored.
    fn apply_env_enum<T>(var_name: &str, target: &mut T) -> ConfigErrorResult<()>
    where
        T: std::str::FromStr<Err = ConfigError>,
    {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.parse()?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// Describes why `path` may not be used as a config-relative path.
pub(crate) fn relative_path_problem(field: &str, path: &str) -> Option<String> {
    if path.trim().is_empty() {
        return Some(format!("{field} cannot be empty"));
    }

    if Path::new(path).is_absolute() || path.contains("..") {
        return Some(format!(
            "{field} must be relative and cannot contain '..', got '{path}'"
        ));
    }

    None
}
