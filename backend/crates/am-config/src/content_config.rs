use crate::{ConfigError, ConfigErrorResult};

use crate::config::relative_path_problem;

use std::str::FromStr;

use serde::Deserialize;

/// Initial contents of the article collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// Demo articles shipped with the content store
    #[default]
    Builtin,
    /// Start with no articles
    Empty,
    /// JSON array read from `content.seed_file`
    File,
}

impl SeedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Empty => "empty",
            Self::File => "file",
        }
    }
}

impl FromStr for SeedSource {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s {
            "builtin" => Ok(Self::Builtin),
            "empty" => Ok(Self::Empty),
            "file" => Ok(Self::File),
            _ => Err(ConfigError::content(format!(
                "content.seed must be 'builtin', 'empty' or 'file', got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub seed: SeedSource,
    /// Relative to the config directory
    pub seed_file: Option<String>,
}

impl ContentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (self.seed, self.seed_file.as_deref()) {
            (SeedSource::File, None) => Err(ConfigError::content(
                "content.seed_file is required when content.seed = 'file'",
            )),
            (SeedSource::File, Some(path)) => match relative_path_problem("content.seed_file", path) {
                Some(problem) => Err(ConfigError::content(problem)),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
