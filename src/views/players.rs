//! Player list page.

use crate::{
    api::types::{PagedPlayers, Player},
    core::QueryState,
    views::{
        format::{format_market_value, format_optional, group_thousands},
        table::render_table,
    },
};

pub const LOADING_PLAYERS: &str = "Loading players...";
pub const PLAYERS_FAILED: &str = "Could not load players. Is the backend running?";

const COLUMNS: [&str; 5] = ["Name", "Position", "Age", "Value", "Id"];

fn player_row(player: &Player) -> Vec<String> {
    vec![
        player.name.clone(),
        player.position.to_string(),
        format_optional(player.age),
        format_market_value(player.market_value_eur, player.market_value_is_estimated),
        player.id.to_string(),
    ]
}

pub fn render_page(page: &PagedPlayers) -> String {
    let mut out = format!(
        "Players (page {}, {} total)",
        page.page,
        group_thousands(page.total)
    );
    if page.items.is_empty() {
        out.push_str("\nNo players on this page.");
        return out;
    }

    let rows: Vec<Vec<String>> = page.items.iter().map(player_row).collect();
    out.push('\n');
    out.push_str(&render_table(&COLUMNS, &rows));
    out
}

pub fn render_players(state: &QueryState<PagedPlayers>) -> String {
    match state {
        // The list has no enabling condition, so Idle only shows up before
        // the first fetch starts
        QueryState::Idle | QueryState::Loading => LOADING_PLAYERS.to_string(),
        QueryState::Error(_) => PLAYERS_FAILED.to_string(),
        QueryState::Success(page) => render_page(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoutError;

    const PLAYERS: &str = include_str!("../../tests/fixtures/players.json");

    #[test]
    fn test_render_page() {
        let page: PagedPlayers = serde_json::from_str(PLAYERS).unwrap();
        let out = render_page(&page);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Players (page 1, 2 total)");
        assert!(lines[1].starts_with("Name"));
        assert!(lines[3].contains("€90,000,000 [ESTIMATED]"));
        assert!(lines[4].contains("Enzo Pérez"));
        assert!(lines[4].contains("N/A"));
        assert!(!lines[4].contains("ESTIMATED"));
    }

    #[test]
    fn test_render_empty_page() {
        let page = PagedPlayers {
            items: Vec::new(),
            page: 1,
            page_size: 20,
            total: 0,
        };
        assert_eq!(
            render_page(&page),
            "Players (page 1, 0 total)\nNo players on this page."
        );
    }

    #[test]
    fn test_render_players_error() {
        let state = QueryState::Error(ScoutError::Status {
            status: 500,
            url: "http://localhost:8000/players".to_string(),
        });
        assert_eq!(render_players(&state), PLAYERS_FAILED);
        assert_eq!(render_players(&QueryState::Loading), LOADING_PLAYERS);
    }
}
