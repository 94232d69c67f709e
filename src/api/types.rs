//! Entities returned by the analytics backend.
//!
//! Field names follow the backend's JSON; the Rust names are snake_case with
//! serde renames where the wire differs (`xG`, `xA`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::validate::{
    check_finite, check_fraction, check_positive, check_url, FieldPath, Validate,
    ValidationError,
};
use crate::cli::types::{PlayerUuid, Position};


type Checked = std::result::Result<(), ValidationError>;

/// Present-but-nullable: the key must exist, `null` is allowed.
///
/// A plain `Option` field would quietly accept a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Club a player belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub league: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Validate for Team {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        check_url(&path.field("logo_url"), self.logo_url.as_deref())
    }
}

/// Player record as listed by `GET /players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerUuid,
    pub name: String,
    pub position: Position,
    #[serde(deserialize_with = "nullable")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub nationality: Option<String>,
    pub team_id: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Whole euros; negative values are rejected by the `u64` itself.
    #[serde(deserialize_with = "nullable")]
    pub market_value_eur: Option<u64>,
    /// Model-estimated rather than observed. Always sent by the backend.
    pub market_value_is_estimated: bool,
}

impl Validate for Player {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        if let Some(age) = self.age {
            check_positive(&path.field("age"), age)?;
        }
        check_url(&path.field("photo_url"), self.photo_url.as_deref())
    }
}

/// Season aggregates shown in the profile header.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SeasonStats {
    #[serde(deserialize_with = "nullable")]
    pub minutes: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub goals: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub assists: Option<u32>,
    #[serde(rename = "xG", deserialize_with = "nullable")]
    pub xg: Option<f64>,
    #[serde(rename = "xA", deserialize_with = "nullable")]
    pub xa: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub rating: Option<f64>,
}

impl Validate for SeasonStats {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        check_finite(&path.field("xG"), self.xg)?;
        check_finite(&path.field("xA"), self.xa)?;
        check_finite(&path.field("rating"), self.rating)
    }
}

/// One competition's line for the season.
///
/// Field players carry `goals`/`assists`/`xG`/`xA`, goalkeepers carry
/// `goals_received`/`clean_sheets`/`save_percentage`. The two sets never mix;
/// [`PlayerDetail`] validation enforces that against `is_goalkeeper`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompetitionStat {
    pub competition: String,
    pub matches: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(rename = "xG", default, skip_serializing_if = "Option::is_none")]
    pub xg: Option<f64>,
    #[serde(rename = "xA", default, skip_serializing_if = "Option::is_none")]
    pub xa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_received: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_sheets: Option<u32>,
    /// Fraction in `[0, 1]`, not a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_percentage: Option<f64>,
    pub minutes: u32,
}

/// A competition line narrowed to the column set it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatLine<'a> {
    Field {
        competition: &'a str,
        matches: u32,
        goals: u32,
        assists: u32,
        xg: Option<f64>,
        xa: Option<f64>,
        minutes: u32,
    },
    Goalkeeper {
        competition: &'a str,
        matches: u32,
        goals_received: u32,
        clean_sheets: u32,
        save_percentage: Option<f64>,
        minutes: u32,
    },
}

impl CompetitionStat {
    fn has_field_keys(&self) -> bool {
        self.goals.is_some() || self.assists.is_some() || self.xg.is_some() || self.xa.is_some()
    }

    fn has_goalkeeper_keys(&self) -> bool {
        self.goals_received.is_some()
            || self.clean_sheets.is_some()
            || self.save_percentage.is_some()
    }

    /// Missing counters read as zero, matching how the table shows them.
    pub fn line(&self, is_goalkeeper: bool) -> StatLine<'_> {
        if is_goalkeeper {
            StatLine::Goalkeeper {
                competition: &self.competition,
                matches: self.matches,
                goals_received: self.goals_received.unwrap_or(0),
                clean_sheets: self.clean_sheets.unwrap_or(0),
                save_percentage: self.save_percentage,
                minutes: self.minutes,
            }
        } else {
            StatLine::Field {
                competition: &self.competition,
                matches: self.matches,
                goals: self.goals.unwrap_or(0),
                assists: self.assists.unwrap_or(0),
                xg: self.xg,
                xa: self.xa,
                minutes: self.minutes,
            }
        }
    }

    fn validate_for(&self, path: &FieldPath<'_>, is_goalkeeper: bool) -> Checked {
        if is_goalkeeper && self.has_field_keys() {
            return Err(path.error("goalkeeper stat set (no goals/assists/xG/xA)"));
        }
        if !is_goalkeeper && self.has_goalkeeper_keys() {
            return Err(
                path.error("field-player stat set (no goals_received/clean_sheets/save_percentage)")
            );
        }
        check_finite(&path.field("xG"), self.xg)?;
        check_finite(&path.field("xA"), self.xa)?;
        check_fraction(&path.field("save_percentage"), self.save_percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchResult {
    pub fn code(&self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecentMatch {
    pub date: String,
    pub competition: String,
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
    pub result: MatchResult,
}

/// One feature's share of an estimated market value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeatureAttribution {
    pub feature: String,
    /// Signed fraction of the estimate.
    pub contribution: f64,
}

/// Full profile returned by `GET /player/{uuid}/details`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    pub team_name: String,
    #[serde(default)]
    pub team_logo_url: Option<String>,
    pub is_goalkeeper: bool,
    pub stats: SeasonStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_stats: Option<Vec<CompetitionStat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_matches: Option<Vec<RecentMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_attribution: Option<Vec<FeatureAttribution>>,
    pub last_updated: String,
    pub sources: Vec<String>,
}

impl PlayerDetail {
    pub fn competition_stats(&self) -> &[CompetitionStat] {
        self.competition_stats.as_deref().unwrap_or_default()
    }

    pub fn recent_matches(&self) -> &[RecentMatch] {
        self.recent_matches.as_deref().unwrap_or_default()
    }

    /// Attribution is only meaningful for estimated values.
    pub fn explained_estimate(&self) -> Option<&[FeatureAttribution]> {
        if self.player.market_value_is_estimated {
            self.feature_attribution.as_deref()
        } else {
            None
        }
    }
}

impl Validate for PlayerDetail {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        self.player.validate_at(path)?;
        check_url(&path.field("team_logo_url"), self.team_logo_url.as_deref())?;
        self.stats.validate_at(&path.field("stats"))?;

        let comp_path = path.field("competition_stats");
        for (i, stat) in self.competition_stats().iter().enumerate() {
            stat.validate_for(&comp_path.index(i), self.is_goalkeeper)?;
        }

        if let Some(features) = &self.feature_attribution {
            let attr_path = path.field("feature_attribution");
            for (i, f) in features.iter().enumerate() {
                let item = attr_path.index(i);
                check_finite(&item.field("contribution"), Some(f.contribution))?;
            }
        }
        Ok(())
    }
}

/// One page of `GET /players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PagedPlayers {
    pub items: Vec<Player>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Validate for PagedPlayers {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        self.items.validate_at(&path.field("items"))?;
        check_positive(&path.field("page"), self.page)?;
        check_positive(&path.field("page_size"), self.page_size)?;

        if self.items.len() as u64 > u64::from(self.page_size) {
            return Err(path.field("items").error("at most page_size items"));
        }
        let traversed =
            u64::from(self.page - 1) * u64::from(self.page_size) + self.items.len() as u64;
        if traversed > self.total {
            return Err(path
                .field("total")
                .error(format!("total of at least {traversed} for this page")));
        }
        Ok(())
    }
}

/// Reduced player projection used by search and similarity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub player_uuid: PlayerUuid,
    pub full_name: String,
    pub primary_position: String,
    /// Some backend builds omit the club on search rows.
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub market_value_eur: Option<u64>,
}

impl SearchResult {
    pub fn position(&self) -> Position {
        Position::from_loose(&self.primary_position)
    }
}

impl Validate for SearchResult {
    fn validate_at(&self, path: &FieldPath<'_>) -> Checked {
        if self.player_uuid.is_empty() {
            return Err(path.field("player_uuid").error("non-empty string"));
        }
        Ok(())
    }
}
