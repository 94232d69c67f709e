//! `search`: the autocomplete dropdown.

use crate::{
    api::queries::MIN_SEARCH_CHARS,
    commands::{state_json, CommandContext, Screen},
    views::search::render_search,
    Result,
};

pub async fn search_screen(ctx: &CommandContext, query: &str) -> Result<Screen> {
    let state = ctx.queries.search_players(query).await;

    let text = if ctx.as_json {
        state_json(&state)?
    } else {
        render_search(query, &state).or_else(|| {
            Some(format!(
                "Type more than {MIN_SEARCH_CHARS} characters to search."
            ))
        })
    };
    Ok(Screen::from_state(text, &state))
}

pub async fn handle_search(ctx: &CommandContext, query: &str) -> Result<()> {
    search_screen(ctx, query).await?.print()
}
