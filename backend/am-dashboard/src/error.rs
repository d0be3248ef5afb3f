use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Config error: {0}")]
    Config(#[from] am_config::ConfigError),

    #[error("{0}")]
    Session(#[from] am_session::SessionError),

    #[error("{0}")]
    Content(#[from] am_content::ContentError),

    #[error("{0}")]
    Core(#[from] am_core::CoreError),

    #[error("Failed to read article seed {}: {source}", path.display())]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No article with id '{id}'")]
    ArticleNotFound { id: String },

    #[error("{message}")]
    InvalidCommand { message: String },

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
