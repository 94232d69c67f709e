//! Core utilities shared across the client
//!
//! - `cache`: keyed query cache with freshness windows and request coalescing
//! - `config`: backend base URL resolution and `.env` loading
//! - `http`: the configured transport client
//! - `logger`: tracing subscriber setup

pub mod cache;
pub mod config;
pub mod http;
pub mod logger;

// Re-export commonly used items for convenience
pub use cache::{CacheKey, QueryCache, QueryPolicy, QueryState};
pub use config::{resolve_base_url, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use http::ApiClient;
