//! `players`: the player list page.

use crate::{
    commands::{state_json, CommandContext, Screen},
    views::players::render_players,
    Result,
};

pub async fn players_screen(ctx: &CommandContext) -> Result<Screen> {
    let state = ctx.queries.player_list().await;

    let text = if ctx.as_json {
        state_json(&state)?
    } else {
        Some(render_players(&state))
    };
    Ok(Screen::from_state(text, &state))
}

pub async fn handle_players(ctx: &CommandContext) -> Result<()> {
    players_screen(ctx).await?.print()
}
