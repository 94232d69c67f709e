//! Type-safe wrappers and enums for player data.

pub mod ids;
pub mod position;

pub use ids::{PlayerUuid, Season};
pub use position::Position;
