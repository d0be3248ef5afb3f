//! am - 4am member dashboard CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in and show who is signed in
//! am sign-in ops@4am.test
//! am whoami --pretty
//!
//! # Publish and list articles in one process
//! printf 'articles publish --title Hi --content "Hello there"\narticles list\n' | am shell
//! ```

use am_dashboard::commands::Commands;
use am_dashboard::{AppState, Cli, DashboardResult, logger, runner, shell};

use std::process::ExitCode;
use std::sync::Arc;

use am_config::Config;
use am_session::SessionStore;
use clap::Parser;
use log::{info, warn};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> DashboardResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting am v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::from_config(&config)?;
    spawn_interrupt_handler(state.session.clone());

    match cli.command {
        Commands::Shell => {
            let mut stdout = std::io::stdout();
            let mut stderr = std::io::stderr();
            let input = BufReader::new(tokio::io::stdin());

            shell::run(&state, input, &mut stdout, &mut stderr, cli.pretty).await?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let value = runner::execute(&state, command).await?;
            println!("{}", runner::render(&value, cli.pretty)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Ctrl-C aborts a sign-in that is still waiting on the authenticator.
fn spawn_interrupt_handler(session: Arc<SessionStore>) {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {e}");
                return;
            }

            if session.cancel_pending() == 0 {
                info!("Interrupted");
                std::process::exit(130);
            }
        }
    });
}
