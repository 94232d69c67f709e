//! Autocomplete dropdown for the search landing page.

use crate::{
    api::types::SearchResult,
    core::QueryState,
    views::format::{format_eur, NOT_AVAILABLE},
};

pub const SEARCHING: &str = "Searching...";
pub const SEARCH_FAILED: &str = "Search is unavailable right now.";

/// One dropdown line: `name (team | position)  Value: €...  -> /player/uuid`.
///
/// The position is normalised to its short code, so `"FW,MF"` shows as `FW`.
pub fn search_row(result: &SearchResult) -> String {
    format!(
        "{} ({} | {})  Value: {}  -> /player/{}",
        result.full_name,
        result.team_name.as_deref().unwrap_or(NOT_AVAILABLE),
        result.position(),
        format_eur(result.market_value_eur),
        result.player_uuid,
    )
}

/// The dropdown for `query`, or `None` when it stays closed.
///
/// The dropdown is closed while the search is disabled (query of two
/// characters or fewer).
pub fn render_search(query: &str, state: &QueryState<Vec<SearchResult>>) -> Option<String> {
    match state {
        QueryState::Idle => None,
        QueryState::Loading => Some(SEARCHING.to_string()),
        QueryState::Error(_) => Some(SEARCH_FAILED.to_string()),
        QueryState::Success(results) if results.is_empty() => {
            Some(format!("No results for \"{query}\"."))
        }
        QueryState::Success(results) => Some(
            results
                .iter()
                .map(search_row)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerUuid, ScoutError};

    fn messi() -> SearchResult {
        SearchResult {
            player_uuid: PlayerUuid::new("abc"),
            full_name: "Lionel Messi".to_string(),
            primary_position: "FW".to_string(),
            team_name: Some("Inter Miami".to_string()),
            market_value_eur: Some(30_000_000),
        }
    }

    #[test]
    fn test_search_row() {
        assert_eq!(
            search_row(&messi()),
            "Lionel Messi (Inter Miami | FW)  Value: €30,000,000  -> /player/abc"
        );
    }

    #[test]
    fn test_search_row_missing_team_and_value() {
        let row = SearchResult {
            team_name: None,
            market_value_eur: None,
            ..messi()
        };
        assert_eq!(
            search_row(&row),
            "Lionel Messi (N/A | FW)  Value: N/A  -> /player/abc"
        );
    }

    #[test]
    fn test_search_row_normalises_position() {
        let row = SearchResult {
            primary_position: "FW,MF".to_string(),
            ..messi()
        };
        assert!(search_row(&row).contains("(Inter Miami | FW)"));

        let row = SearchResult {
            primary_position: "striker".to_string(),
            ..messi()
        };
        assert!(search_row(&row).contains("(Inter Miami | NA)"));
    }

    #[test]
    fn test_render_search_states() {
        assert_eq!(render_search("me", &QueryState::Idle), None);
        assert_eq!(
            render_search("mes", &QueryState::Loading).as_deref(),
            Some(SEARCHING)
        );
        assert_eq!(
            render_search(
                "mes",
                &QueryState::Error(ScoutError::NotFound {
                    resource: "/players/search".to_string()
                })
            )
            .as_deref(),
            Some(SEARCH_FAILED)
        );
        assert_eq!(
            render_search("zzz", &QueryState::Success(Vec::new())).as_deref(),
            Some("No results for \"zzz\".")
        );
    }

    #[test]
    fn test_render_search_one_row_per_result() {
        let out = render_search("mes", &QueryState::Success(vec![messi()])).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("Lionel Messi"));
    }
}
