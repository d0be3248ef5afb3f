//! Composition root of the 4am member dashboard.
//!
//! [`AppState`] builds the session and content stores from [`am_config::Config`];
//! [`runner::execute`] maps CLI commands onto them and [`shell::run`] drives
//! the same commands from a line-based input.

pub mod app_state;
pub mod article_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;
pub mod shell;


pub use app_state::AppState;
pub use cli::Cli;
pub use error::{DashboardError, Result as DashboardResult};
