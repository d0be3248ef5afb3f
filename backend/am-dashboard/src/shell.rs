//! Line-oriented front end over the same commands as the `am` binary.
//!
//! Articles live only in memory, so a shell is the way to publish and then
//! read them back within one process.

use crate::app_state::AppState;
use crate::cli::Cli;
use crate::error::{DashboardError, Result as DashboardErrorResult};
use crate::runner;

use std::io::Write;

use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// What a shell session did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Run commands from `input` until it ends or an exit word is read.
///
/// Results go to `out`, one JSON document per command. Failures are
/// reported on `err` and do not stop the loop. Blank lines and lines starting
/// with `#` are ignored.
pub async fn run<R, O, E>(
    state: &AppState,
    input: R,
    out: &mut O,
    err: &mut E,
    pretty: bool,
) -> DashboardErrorResult<ShellSummary>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
{
    let mut lines = input.lines();
    let mut summary = ShellSummary::default();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if EXIT_WORDS.contains(&line) {
            debug!("Shell exit requested");
            break;
        }

        summary.executed += 1;
        match run_line(state, line, pretty).await {
            Ok(output) => writeln!(out, "{output}")?,
            Err(LineError::Usage(text)) => {
                summary.failed += 1;
                write!(err, "{text}")?;
            }
            Err(LineError::Help(text)) => write!(out, "{text}")?,
            Err(LineError::Failed(e)) => {
                summary.failed += 1;
                writeln!(err, "Error: {e}")?;
            }
        }
    }

    out.flush()?;
    info!(
        "Shell finished: {} command(s), {} failed",
        summary.executed, summary.failed
    );
    Ok(summary)
}

enum LineError {
    /// Clap rejected the line; text is its rendered message
    Usage(String),
    /// Help or version output requested
    Help(String),
    Failed(DashboardError),
}

impl From<DashboardError> for LineError {
    fn from(e: DashboardError) -> Self {
        Self::Failed(e)
    }
}

async fn run_line(state: &AppState, line: &str, pretty: bool) -> Result<String, LineError> {
    let words = split_line(line)?;

    let cli = match Cli::try_parse_from(std::iter::once(String::from("am")).chain(words)) {
        Ok(cli) => cli,
        Err(e) => {
            let text = e.render().to_string();
            return match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Err(LineError::Help(text)),
                _ => Err(LineError::Usage(text)),
            };
        }
    };

    let value = runner::execute(state, cli.command).await?;
    Ok(runner::render(&value, pretty || cli.pretty)?)
}

/// Split a command line into words.
///
/// Whitespace separates words. Single quotes keep everything literally;
/// double quotes group words and honor backslash escapes, as does a bare
/// backslash outside quotes.
pub fn split_line(line: &str) -> DashboardErrorResult<Vec<String>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::None | Quote::Double, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => {
                    return Err(DashboardError::InvalidCommand {
                        message: String::from("line ends with a dangling backslash"),
                    });
                }
            },
            (_, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err(DashboardError::InvalidCommand {
            message: String::from("unterminated quote"),
        });
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
