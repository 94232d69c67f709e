//! Command implementations for the football scout CLI
//!
//! Each command builds a [`Screen`] from the query layer and the views, then
//! prints it. Building and printing are split so the screens can be tested
//! without capturing stdout.

pub mod about;
pub mod open;
pub mod player;
pub mod players;
pub mod search;
pub mod shell;


use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::{
    api::PlayerQueries,
    core::{http::ApiClient, QueryState},
    Result, ScoutError,
};

/// Resources shared by every command.
pub struct CommandContext {
    pub queries: PlayerQueries,
    /// Print backend data as JSON instead of the rendered view.
    pub as_json: bool,
}

impl CommandContext {
    /// Resolve the backend URL and build the query layer.
    pub fn new(base_url: Option<&str>, as_json: bool) -> Result<Self> {
        let client = ApiClient::from_env(base_url)?;
        debug!(base_url = %client.base_url(), "Backend configured");
        Ok(Self::with_client(client, as_json))
    }

    pub fn with_client(client: ApiClient, as_json: bool) -> Self {
        Self {
            queries: PlayerQueries::new(client),
            as_json,
        }
    }

    pub fn log_cache_stats(&self) {
        for (cache, stats) in self.queries.stats() {
            debug!(
                cache,
                hits = stats.hits,
                misses = stats.misses,
                coalesced = stats.coalesced,
                "Cache stats"
            );
        }
    }
}

/// What a command prints, plus the error behind a generic failure message.
///
/// Views collapse every query error into one message; the error itself is
/// kept so the process can still exit non-zero with the details on stderr.
#[derive(Debug, Clone)]
pub struct Screen {
    pub text: Option<String>,
    pub error: Option<ScoutError>,
}

impl Screen {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn from_state<V>(text: Option<String>, state: &QueryState<V>) -> Self {
        Self {
            text,
            error: state.error().cloned(),
        }
    }

    /// Write the text to `out` and hand back the kept error, if any.
    pub fn write_to<W: Write>(self, out: &mut W) -> Result<Option<ScoutError>> {
        if let Some(text) = self.text {
            writeln!(out, "{text}")?;
        }
        Ok(self.error)
    }

    /// Print the text to stdout and hand back the failure, if any.
    pub fn print(self) -> Result<()> {
        match self.write_to(&mut std::io::stdout())? {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Pretty JSON for `--json` output.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// JSON of the loaded data, nothing for any other state.
pub(crate) fn state_json<V: Serialize>(state: &QueryState<V>) -> Result<Option<String>> {
    state.data().map(to_json).transpose()
}
