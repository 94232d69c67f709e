//! Player profile screen.
//!
//! Sections, top to bottom: header, competition stats, recent matches, model
//! attribution (estimated values only) and the sources footer. The similar
//! players card lives in [`crate::views::similar`].

use crate::{
    api::types::{CompetitionStat, PlayerDetail, RecentMatch, StatLine},
    core::QueryState,
    views::{
        format::{
            format_contribution, format_date, format_decimal, format_fraction,
            format_market_value, format_optional, NOT_AVAILABLE,
        },
        table::render_table,
    },
    PlayerUuid,
};

pub const FIELD_COLUMNS: [&str; 7] = [
    "Competition",
    "Matches",
    "Goals",
    "Assists",
    "xG",
    "xA",
    "Minutes",
];

pub const GOALKEEPER_COLUMNS: [&str; 6] = [
    "Competition",
    "Matches",
    "Goals Rec.",
    "Clean Sheets",
    "Save %",
    "Minutes",
];

pub const LOADING_PLAYER: &str = "Loading player details...";

/// Column headers for the stats table.
pub fn stat_columns(is_goalkeeper: bool) -> &'static [&'static str] {
    if is_goalkeeper {
        &GOALKEEPER_COLUMNS
    } else {
        &FIELD_COLUMNS
    }
}

/// Summable columns of the stats table, added up across competitions.
///
/// `scored` and `created` are goals and assists for field players, goals
/// received and clean sheets for goalkeepers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompetitionTotals {
    pub matches: u32,
    pub scored: u32,
    pub created: u32,
    pub minutes: u32,
}

pub fn competition_totals(stats: &[CompetitionStat], is_goalkeeper: bool) -> CompetitionTotals {
    stats
        .iter()
        .map(|s| s.line(is_goalkeeper))
        .fold(CompetitionTotals::default(), |acc, line| {
            let (matches, scored, created, minutes) = match line {
                StatLine::Field {
                    matches,
                    goals,
                    assists,
                    minutes,
                    ..
                } => (matches, goals, assists, minutes),
                StatLine::Goalkeeper {
                    matches,
                    goals_received,
                    clean_sheets,
                    minutes,
                    ..
                } => (matches, goals_received, clean_sheets, minutes),
            };
            CompetitionTotals {
                matches: acc.matches.saturating_add(matches),
                scored: acc.scored.saturating_add(scored),
                created: acc.created.saturating_add(created),
                minutes: acc.minutes.saturating_add(minutes),
            }
        })
}

fn stat_row(line: StatLine<'_>) -> Vec<String> {
    match line {
        StatLine::Field {
            competition,
            matches,
            goals,
            assists,
            xg,
            xa,
            minutes,
        } => vec![
            competition.to_string(),
            matches.to_string(),
            goals.to_string(),
            assists.to_string(),
            format_decimal(xg),
            format_decimal(xa),
            minutes.to_string(),
        ],
        StatLine::Goalkeeper {
            competition,
            matches,
            goals_received,
            clean_sheets,
            save_percentage,
            minutes,
        } => vec![
            competition.to_string(),
            matches.to_string(),
            goals_received.to_string(),
            clean_sheets.to_string(),
            format_fraction(save_percentage),
            minutes.to_string(),
        ],
    }
}

fn totals_row(totals: CompetitionTotals, is_goalkeeper: bool) -> Vec<String> {
    let mut row = vec![
        "Total".to_string(),
        totals.matches.to_string(),
        totals.scored.to_string(),
        totals.created.to_string(),
    ];
    if is_goalkeeper {
        row.push(NOT_AVAILABLE.to_string());
    } else {
        row.extend([NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()]);
    }
    row.push(totals.minutes.to_string());
    row
}

pub fn render_header(detail: &PlayerDetail) -> String {
    let player = &detail.player;
    [
        player.name.clone(),
        format!(
            "Value: {}",
            format_market_value(player.market_value_eur, player.market_value_is_estimated)
        ),
        format!("Age: {}", format_optional(player.age)),
        format!("Position: {} ({})", player.position, player.position.label()),
        format!("Club: {}", detail.team_name),
        format!("Nationality: {}", format_optional(player.nationality.as_deref())),
    ]
    .join("\n")
}

/// Per-competition table with a totals row; the column set follows
/// `is_goalkeeper`.
pub fn render_stats_table(detail: &PlayerDetail) -> String {
    let stats = detail.competition_stats();
    if stats.is_empty() {
        return "No competition stats for this season.".to_string();
    }

    let mut rows: Vec<Vec<String>> = stats
        .iter()
        .map(|s| stat_row(s.line(detail.is_goalkeeper)))
        .collect();
    rows.push(totals_row(
        competition_totals(stats, detail.is_goalkeeper),
        detail.is_goalkeeper,
    ));

    format!(
        "Performance by competition\n{}",
        render_table(stat_columns(detail.is_goalkeeper), &rows)
    )
}

fn match_line(m: &RecentMatch) -> String {
    format!(
        "[{}] {} {} - {} {}  ({}, {})",
        m.result.code(),
        m.home_team,
        m.home_score,
        m.away_score,
        m.away_team,
        m.competition,
        format_date(&m.date),
    )
}

pub fn render_recent_matches(matches: &[RecentMatch]) -> Option<String> {
    if matches.is_empty() {
        return None;
    }
    let lines: Vec<String> = matches.iter().map(match_line).collect();
    Some(format!("Recent matches\n{}", lines.join("\n")))
}

/// Features behind an estimated market value. Observed values have nothing
/// to explain.
pub fn render_attribution(detail: &PlayerDetail) -> Option<String> {
    let features = detail.explained_estimate()?;
    if features.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = features
        .iter()
        .map(|f| vec![f.feature.clone(), format_contribution(f.contribution)])
        .collect();
    Some(format!(
        "Model contribution to the estimated value\n{}",
        render_table(&["Feature", "Share"], &rows)
    ))
}

pub fn render_footer(detail: &PlayerDetail) -> String {
    let sources = if detail.sources.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        detail.sources.join(", ")
    };
    format!(
        "Sources: {sources}. Last updated: {}.",
        format_date(&detail.last_updated)
    )
}

/// Every section of a loaded profile, separated by blank lines.
pub fn render_detail(detail: &PlayerDetail) -> String {
    let mut sections = vec![render_header(detail), render_stats_table(detail)];
    sections.extend(render_recent_matches(detail.recent_matches()));
    sections.extend(render_attribution(detail));
    sections.push(render_footer(detail));
    sections.join("\n\n")
}

pub fn render_player(uuid: &PlayerUuid, state: &QueryState<PlayerDetail>) -> String {
    match state {
        QueryState::Idle => "No player selected.".to_string(),
        QueryState::Loading => LOADING_PLAYER.to_string(),
        QueryState::Error(_) => format!("Could not load player details ({uuid})."),
        QueryState::Success(detail) => render_detail(detail),
    }
}
