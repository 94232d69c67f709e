//! `shell`: many screens in one session, read line by line from stdin.
//!
//! The session keeps one [`CommandContext`], so a screen opened again
//! inside its freshness window is served from the cache.

use std::{io::Write, str::FromStr};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::{
    cli::route::Route,
    commands::{open::route_screen, player::PlayerParams, search::search_screen, CommandContext},
    Result, ScoutError,
};

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    Blank,
    Quit,
    /// `search <query>`
    Search(String),
    /// Any client route, e.g. `/player/<uuid>`
    Open(Route),
}

impl FromStr for ShellLine {
    type Err = ScoutError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        match line {
            "" => Ok(Self::Blank),
            "exit" | "quit" => Ok(Self::Quit),
            _ => match line.strip_prefix("search") {
                Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                    Ok(Self::Search(rest.trim().to_string()))
                }
                _ => line.parse().map(Self::Open),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failures: usize,
}

/// Run every line of `input` against `ctx`, writing screens to `out`.
///
/// A failing line prints `Error: ...` and the session carries on. Only I/O
/// errors end it early.
pub async fn run_session<R, W>(
    ctx: &CommandContext,
    params: PlayerParams,
    input: R,
    out: &mut W,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let screen = match line.parse::<ShellLine>() {
            Ok(ShellLine::Blank) => continue,
            Ok(ShellLine::Quit) => break,
            Ok(ShellLine::Search(query)) => search_screen(ctx, &query).await,
            Ok(ShellLine::Open(route)) => route_screen(ctx, &route, params).await,
            Err(e) => Err(e),
        };
        summary.commands += 1;

        let failure = match screen {
            Ok(screen) => screen.write_to(out)?,
            Err(e) => Some(e),
        };
        if let Some(e) = failure {
            summary.failures += 1;
            warn!(line = line.trim(), error = %e, "Command failed");
            writeln!(out, "Error: {e}")?;
        }
        out.flush()?;
    }

    debug!(
        commands = summary.commands,
        failures = summary.failures,
        "Session ended"
    );
    Ok(summary)
}

/// Failed lines are reported inline, so the session itself still succeeds.
pub async fn handle_shell(ctx: &CommandContext, params: PlayerParams) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(ctx, params, stdin, &mut stdout).await?;
    Ok(())
}
