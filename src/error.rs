//! Error types for the football scout client

use std::sync::Arc;

use thiserror::Error;

use crate::api::validate::ValidationError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScoutError>;

/// Every failure the client can surface.
///
/// The enum is `Clone` so that a single failed request can be handed to every
/// caller that was coalesced onto it; non-`Clone` library errors are kept
/// behind an `Arc`.
#[derive(Error, Debug, Clone)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    Http(#[source] Arc<reqwest::Error>),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[source] Arc<serde_json::Error>),

    #[error("Response failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Invalid route: {route}")]
    InvalidRoute { route: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("I/O error: {0}")]
    Io(#[source] Arc<std::io::Error>),
}

impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        ScoutError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::Json(Arc::new(err))
    }
}

impl From<std::io::Error> for ScoutError {
    fn from(err: std::io::Error) -> Self {
        ScoutError::Io(Arc::new(err))
    }
}

impl ScoutError {
    /// True for the "entity does not exist" family of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScoutError::NotFound { .. } | ScoutError::Status { status: 404, .. }
        )
    }
}
