//! Identifier and season types.

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for backend player identifiers.
///
/// The backend hands out opaque string ids (`player_uuid` in search results,
/// `id` on player records). An empty id means "no player selected".
///
/// # Examples
///
/// ```rust
/// use football_scout::PlayerUuid;
///
/// let uuid = PlayerUuid::new("abc");
/// assert_eq!(uuid.as_str(), "abc");
/// assert!(!uuid.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerUuid(String);

impl PlayerUuid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerUuid {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for PlayerUuid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
