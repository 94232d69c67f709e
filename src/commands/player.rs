//! `player`: the profile page with its similar players card.

use serde_json::json;

use crate::{
    cli::PlayerOpts,
    commands::{to_json, CommandContext, Screen},
    views::{player::render_player, similar::render_similar},
    PlayerUuid, Result, Season,
};

/// Profile parameters, decoupled from the clap struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerParams {
    pub season: Season,
    pub similar: u8,
}

impl From<&PlayerOpts> for PlayerParams {
    fn from(opts: &PlayerOpts) -> Self {
        Self {
            season: opts.season,
            similar: opts.similar,
        }
    }
}

pub async fn player_screen(
    ctx: &CommandContext,
    uuid: &PlayerUuid,
    params: PlayerParams,
) -> Result<Screen> {
    // Both reads start together, as the page issues them side by side
    let (detail, similar) = tokio::join!(
        ctx.queries.player_details(uuid, params.season),
        ctx.queries.similar_players(uuid, params.similar),
    );

    let text = if ctx.as_json {
        if detail.data().is_some() {
            Some(to_json(&json!({
                "detail": detail.data(),
                "similar": similar.data(),
            }))?)
        } else {
            None
        }
    } else {
        let mut sections = vec![render_player(uuid, &detail)];
        if detail.data().is_some() {
            sections.extend(render_similar(&similar));
        }
        Some(sections.join("\n\n"))
    };

    // A failed similar card is not a failed page
    Ok(Screen::from_state(text, &detail))
}

pub async fn handle_player(
    ctx: &CommandContext,
    uuid: &PlayerUuid,
    params: PlayerParams,
) -> Result<()> {
    player_screen(ctx, uuid, params).await?.print()
}
