//! Text renderings of the client screens.
//!
//! Every function here is pure: it takes a [`QueryState`] or an entity and
//! returns the text to print. Data logic stays in [`crate::api`]; the only
//! computation done here is formatting and the stats totals row.
//!
//! - `search`: autocomplete dropdown
//! - `player`: profile header, stats table, recent matches, attribution, footer
//! - `similar`: similar players card
//! - `players`: player list page
//! - `about`: static about page
//!
//! [`QueryState`]: crate::core::QueryState

pub mod about;
pub mod format;
pub mod player;
pub mod players;
pub mod search;
pub mod similar;
pub mod table;

pub use format::{format_eur, format_market_value, NOT_AVAILABLE};
pub use player::{competition_totals, render_player, CompetitionTotals};
pub use search::render_search;
