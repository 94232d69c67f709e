//! Similar players card shown under a profile.

use crate::{api::types::SearchResult, core::QueryState, views::search::search_row};

pub const FINDING_SIMILAR: &str = "Finding similar players...";
pub const SIMILAR_FAILED: &str = "Could not load similar players.";
pub const NO_SIMILAR: &str = "No players with a similar profile.";

/// The card, or `None` while no player is selected.
pub fn render_similar(state: &QueryState<Vec<SearchResult>>) -> Option<String> {
    let text = match state {
        QueryState::Idle => return None,
        QueryState::Loading => FINDING_SIMILAR.to_string(),
        QueryState::Error(_) => SIMILAR_FAILED.to_string(),
        QueryState::Success(players) if players.is_empty() => NO_SIMILAR.to_string(),
        QueryState::Success(players) => {
            let rows: Vec<String> = players
                .iter()
                .map(|p| format!("  {}", search_row(p)))
                .collect();
            format!("Players with a similar profile\n{}", rows.join("\n"))
        }
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerUuid, ScoutError};

    fn row(uuid: &str, name: &str) -> SearchResult {
        SearchResult {
            player_uuid: PlayerUuid::new(uuid),
            full_name: name.to_string(),
            primary_position: "MF".to_string(),
            team_name: Some("River Plate".to_string()),
            market_value_eur: None,
        }
    }

    #[test]
    fn test_render_similar_card() {
        let out = render_similar(&QueryState::Success(vec![
            row("s1", "Enzo Fernández"),
            row("s2", "Alexis Mac Allister"),
        ]))
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Players with a similar profile");
        assert!(lines[1].contains("Enzo Fernández (River Plate | MF)"));
        assert!(lines[2].ends_with("/player/s2"));
    }

    #[test]
    fn test_render_similar_states() {
        assert_eq!(render_similar(&QueryState::Idle), None);
        assert_eq!(
            render_similar(&QueryState::Loading).as_deref(),
            Some(FINDING_SIMILAR)
        );
        assert_eq!(
            render_similar(&QueryState::Error(ScoutError::Status {
                status: 503,
                url: "http://localhost:8000/player/abc/similar".to_string()
            }))
            .as_deref(),
            Some(SIMILAR_FAILED)
        );
        assert_eq!(
            render_similar(&QueryState::Success(Vec::new())).as_deref(),
            Some(NO_SIMILAR)
        );
    }
}
