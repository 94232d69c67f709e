//! Football position types and utilities.

use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary playing position as reported by the backend.
///
/// The backend uses the short codes `GK`, `DF`, `MF`, `FW` and `NA`; the last
/// one covers players whose position is unknown.
///
/// # Examples
///
/// ```rust
/// use football_scout::Position;
///
/// let gk: Position = "gk".parse().unwrap();
/// assert_eq!(gk, Position::Goalkeeper);
/// assert_eq!(gk.to_string(), "GK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
    #[serde(rename = "NA")]
    Unknown,
}

impl Position {
    /// Short code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
            Position::Unknown => "NA",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Unknown => "Unknown",
        }
    }

    /// Best-effort mapping of a free-form position string such as the
    /// `primary_position` of a search result (`"FW,MF"` becomes `Forward`).
    ///
    /// Anything unrecognised maps to `Unknown` instead of failing.
    pub fn from_loose(raw: &str) -> Self {
        raw.split(',')
            .next()
            .and_then(|first| first.trim().parse().ok())
            .unwrap_or(Position::Unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DF" | "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MF" | "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FW" | "FWD" | "FORWARD" => Ok(Position::Forward),
            "NA" | "UNKNOWN" => Ok(Position::Unknown),
            _ => Err(ScoutError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
