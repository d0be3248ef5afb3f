use crate::error::{DashboardError, Result as DashboardErrorResult};

use std::sync::Arc;

use am_config::{Config, SeedSource, StorageBackend};
use am_content::{ContentStore, builtin_seed};
use am_core::{ANONYMOUS_AUTHOR, Article, ArticleDraft};
use am_session::{AuthDelays, SessionOptions, SessionStore, SimulatedAuthenticator};
use am_storage::{FileStore, KeyValueStore, MemoryStore};
use log::info;

/// Everything a command needs, built once per process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub content: Arc<ContentStore>,
    pub authenticator: Arc<SimulatedAuthenticator>,
}

impl AppState {
    /// Wire the stores together. The session is hydrated before returning.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<SimulatedAuthenticator>,
        options: SessionOptions,
        content: ContentStore,
    ) -> Self {
        let session = SessionStore::open(storage, authenticator.clone(), options);

        Self {
            session: Arc::new(session),
            content: Arc::new(content),
            authenticator,
        }
    }

    pub fn from_config(config: &Config) -> DashboardErrorResult<Self> {
        let storage: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => {
                let dir = config.storage_dir()?;
                info!("Session storage: {}", dir.display());
                Arc::new(FileStore::new(dir))
            }
            StorageBackend::Memory => {
                info!("Session storage: memory (not kept across runs)");
                Arc::new(MemoryStore::new())
            }
        };

        let authenticator = Arc::new(SimulatedAuthenticator::new(AuthDelays {
            sign_in: config.session.sign_in_delay(),
            provider: config.session.provider_delay(),
            sign_up: config.session.sign_up_delay(),
        }));

        let options = SessionOptions {
            key: config.storage.key.clone(),
            backup_corrupted: config.storage.backup_corrupted,
        };

        Ok(Self::new(
            storage,
            authenticator,
            options,
            seed_content(config)?,
        ))
    }

    /// Name stamped on new articles.
    pub fn author_name(&self) -> String {
        self.session
            .display_name()
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string())
    }

    pub fn publish_article(&self, draft: ArticleDraft) -> DashboardErrorResult<Article> {
        let author = self.author_name();
        Ok(self.content.publish(draft, &author)?)
    }
}

fn seed_content(config: &Config) -> DashboardErrorResult<ContentStore> {
    match config.content.seed {
        SeedSource::Builtin => Ok(ContentStore::new(builtin_seed())),
        SeedSource::Empty => Ok(ContentStore::empty()),
        SeedSource::File => {
            // validate() guarantees a seed file for this source
            let Some(path) = config.seed_file_path()? else {
                return Ok(ContentStore::empty());
            };

            let text = std::fs::read_to_string(&path)
                .map_err(|source| DashboardError::SeedFile { path, source })?;
            Ok(ContentStore::from_seed_json(&text))
        }
    }
}
