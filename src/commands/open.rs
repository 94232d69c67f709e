//! `open <route>`: render a client route by path.

use tracing::debug;

use crate::{
    cli::route::Route,
    commands::{
        about::{about_screen, home_screen},
        player::{player_screen, PlayerParams},
        players::players_screen,
        CommandContext, Screen,
    },
    Result,
};

pub async fn route_screen(
    ctx: &CommandContext,
    route: &Route,
    params: PlayerParams,
) -> Result<Screen> {
    debug!(%route, "Opening route");
    match route {
        Route::Home => Ok(home_screen()),
        Route::Players => players_screen(ctx).await,
        Route::Player(uuid) => player_screen(ctx, uuid, params).await,
        Route::About => Ok(about_screen(ctx)),
    }
}

pub async fn handle_open(ctx: &CommandContext, route: &Route, params: PlayerParams) -> Result<()> {
    route_screen(ctx, route, params).await?.print()
}
