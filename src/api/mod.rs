//! Backend API: response schemas, endpoint calls and cached read operations.

pub mod http;
pub mod queries;
pub mod types;
pub mod validate;

pub use queries::PlayerQueries;
pub use types::{PagedPlayers, Player, PlayerDetail, SearchResult};
pub use validate::{Validate, ValidationError};
