//! `about` and the search landing page, the two static screens.

use crate::{
    commands::{CommandContext, Screen},
    views::about::render_about,
};

pub const LANDING: &str = "Football Scout\n\
    Find, analyze and compare players.\n\
    \n\
    Search by name: football-scout search <name>";

pub fn about_screen(ctx: &CommandContext) -> Screen {
    Screen::text(render_about(ctx.queries.client().base_url()))
}

pub fn home_screen() -> Screen {
    Screen::text(LANDING)
}

pub fn handle_about(ctx: &CommandContext) -> crate::Result<()> {
    about_screen(ctx).print()
}
