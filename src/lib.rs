//! Football Scout Client Library
//!
//! A client for a football player analytics REST backend: player search,
//! profiles with per-competition stats, similar players and the player list.
//!
//! ## Features
//!
//! - **Validated ingress**: every backend payload is decoded and checked
//!   before anything else sees it; failures name the offending field
//! - **Query cache**: per-operation freshness windows and retention, with
//!   concurrent requests for the same key coalesced onto one network call
//! - **Text views**: the search dropdown, profile page and list page rendered
//!   for the terminal, or the raw data with `--json`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_scout::{api::PlayerQueries, core::ApiClient, PlayerUuid, Season};
//!
//! # async fn example() -> football_scout::Result<()> {
//! let queries = PlayerQueries::new(ApiClient::from_env(None)?);
//!
//! let state = queries
//!     .player_details(&PlayerUuid::new("abc"), Season::default())
//!     .await;
//! if let Some(detail) = state.data() {
//!     println!("{}", detail.player.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a backend (defaults to `http://localhost:8000`):
//! ```bash
//! export SCOUT_API_BASE_URL=https://scout.example.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod views;

// Re-export commonly used types
pub use cli::types::{PlayerUuid, Position, Season};
pub use error::{Result, ScoutError};
