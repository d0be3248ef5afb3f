#![allow(dead_code)]

use am_session::{AuthDelays, SessionOptions, SessionStore, SimulatedAuthenticator};
use am_storage::{FileStore, MemoryStore};

use std::path::Path;
use std::sync::Arc;

pub const SESSION_KEY: &str = "fouram:auth:user";

/// Session over an in-memory store, not yet hydrated.
pub struct MemoryHarness {
    pub storage: Arc<MemoryStore>,
    pub auth: Arc<SimulatedAuthenticator>,
    pub store: SessionStore,
}

impl MemoryHarness {
    /// Authenticator resolves without delay.
    pub fn new(records: &[(&str, &str)]) -> Self {
        Self::with_delays(records, AuthDelays::none())
    }

    pub fn with_delays(records: &[(&str, &str)], delays: AuthDelays) -> Self {
        let storage = Arc::new(MemoryStore::seeded(records.iter().copied()));
        let auth = Arc::new(SimulatedAuthenticator::new(delays));
        let store = SessionStore::new(storage.clone(), auth.clone(), SessionOptions::default());

        Self {
            storage,
            auth,
            store,
        }
    }

    /// Hydrated session with nothing stored.
    pub fn signed_out() -> Self {
        let harness = Self::new(&[]);
        harness.store.hydrate();
        harness
    }
}

impl MemoryHarness {
    /// A second session over the same storage, as a restarted process sees it.
    pub fn reopen(&self) -> SessionStore {
        SessionStore::open(
            self.storage.clone(),
            Arc::new(SimulatedAuthenticator::new(AuthDelays::none())),
            SessionOptions::default(),
        )
    }
}

/// Hydrated session backed by files under `dir`.
pub fn file_session(dir: &Path, backup_corrupted: bool) -> SessionStore {
    let options = SessionOptions {
        backup_corrupted,
        ..SessionOptions::default()
    };

    SessionStore::open(
        Arc::new(FileStore::new(dir)),
        Arc::new(SimulatedAuthenticator::new(AuthDelays::none())),
        options,
    )
}

pub fn stored_user_json(id: &str, name: &str, email: &str) -> String {
    format!(r#"{{"id":"{id}","name":"{name}","email":"{email}","role":"user","skills":[]}}"#)
}
