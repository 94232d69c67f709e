//! Backend location and process configuration.

use std::path::PathBuf;

use url::Url;

use crate::{Result, ScoutError};

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "SCOUT_API_BASE_URL";

/// Used when neither the flag nor the environment names a backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// What [`load_dotenv`] found.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    Missing,
    Unreadable(String),
}

impl DotenvOutcome {
    fn from_result(result: std::result::Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Unreadable(e.to_string()),
        }
    }

    /// Report the outcome. Call once the logger is installed.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Self::Missing => {}
            Self::Unreadable(error) => tracing::warn!(%error, "ignoring unreadable .env"),
        }
    }
}

/// Load `.env` from the working directory if there is one.
///
/// Variables already set in the environment win over the file. This runs
/// before logging is set up so a `RUST_LOG` from the file takes effect.
pub fn load_dotenv() -> DotenvOutcome {
    DotenvOutcome::from_result(dotenvy::dotenv())
}

/// Resolve the backend base URL: explicit flag, then `SCOUT_API_BASE_URL`,
/// then [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(flag: Option<&str>) -> Result<Url> {
    let raw = match flag {
        Some(url) => url.to_string(),
        None => std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    };
    parse_base_url(&raw)
}

/// Parse and check an http(s) base URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ScoutError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScoutError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme `{other}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        let url = parse_base_url("http://localhost:8000").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8000));

        assert!(parse_base_url("https://api.example.com/v1/").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        match parse_base_url("not a url").unwrap_err() {
            ScoutError::InvalidBaseUrl { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidBaseUrl, got {other:?}"),
        }

        match parse_base_url("ftp://files.example.com").unwrap_err() {
            ScoutError::InvalidBaseUrl { message, .. } => assert!(message.contains("ftp")),
            other => panic!("Expected InvalidBaseUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_dotenv_outcome_classification() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(
            DotenvOutcome::from_result(Err(missing)),
            DotenvOutcome::Missing
        ));

        let bad_line = dotenvy::Error::LineParse("RUST_LOG debug".to_string(), 8);
        assert!(matches!(
            DotenvOutcome::from_result(Err(bad_line)),
            DotenvOutcome::Unreadable(_)
        ));

        let path = PathBuf::from("/srv/scout/.env");
        match DotenvOutcome::from_result(Ok(path.clone())) {
            DotenvOutcome::Loaded(loaded) => assert_eq!(loaded, path),
            other => panic!("Expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        // One test so the env var is never touched concurrently
        std::env::remove_var(BASE_URL_ENV_VAR);
        let url = resolve_base_url(None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");

        std::env::set_var(BASE_URL_ENV_VAR, "http://backend.internal:9000");
        let url = resolve_base_url(None).unwrap();
        assert_eq!(url.host_str(), Some("backend.internal"));

        let url = resolve_base_url(Some("https://override.example.com")).unwrap();
        assert_eq!(url.host_str(), Some("override.example.com"));

        std::env::set_var(BASE_URL_ENV_VAR, "   ");
        let url = resolve_base_url(None).unwrap();
        assert_eq!(url.host_str(), Some("localhost"));

        std::env::remove_var(BASE_URL_ENV_VAR);
    }
}
