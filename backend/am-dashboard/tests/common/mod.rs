#![allow(dead_code)]

use am_content::{ContentStore, builtin_seed};
use am_dashboard::commands::Commands;
use am_dashboard::{AppState, Cli};
use am_session::{AuthDelays, SessionOptions, SimulatedAuthenticator};
use am_storage::MemoryStore;

use std::env;
use std::sync::Arc;

use clap::Parser;
use tempfile::TempDir;

/// In-memory state with the built-in articles and instant authentication.
pub fn memory_state() -> AppState {
    AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(SimulatedAuthenticator::new(AuthDelays::none())),
        SessionOptions::default(),
        ContentStore::new(builtin_seed()),
    )
}

/// Parse a command the way the binary does.
pub fn command(args: &[&str]) -> Commands {
    Cli::try_parse_from(std::iter::once("am").chain(args.iter().copied()))
        .unwrap()
        .command
}

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set AM_CONFIG_DIR
pub fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("AM_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
