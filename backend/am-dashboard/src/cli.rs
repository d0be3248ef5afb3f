use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "am")]
#[command(about = "4am member dashboard: session and articles")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
