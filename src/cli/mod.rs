//! CLI argument definitions and parsing.

pub mod route;
pub mod types;

use clap::{Args, Parser, Subcommand};
use route::Route;
use types::{PlayerUuid, Season};

use crate::api::{http::MAX_SIMILAR, queries::DEFAULT_SIMILAR};

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (or set `SCOUT_API_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Log requests and cache activity to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Print the validated backend data as JSON instead of the rendered view.
    #[clap(long, global = true)]
    pub json: bool,
}

/// Arguments of the player profile screen.
#[derive(Debug, Args)]
pub struct PlayerOpts {
    /// Season year (e.g. 2024).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// How many similar players to list.
    #[clap(
        long,
        default_value_t = DEFAULT_SIMILAR,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_SIMILAR))
    )]
    pub similar: u8,
}

#[derive(Debug, Parser)]
#[clap(
    name = "football-scout",
    version,
    about = "Search and inspect football players from an analytics backend"
)]
pub struct Scout {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Autocomplete search by player name (needs more than 2 characters).
    Search {
        /// Part of the player's name.
        query: String,
    },

    /// First page of the player list.
    Players,

    /// Player profile with stats, recent matches and similar players.
    Player {
        /// Player id as returned by `search`.
        uuid: PlayerUuid,

        #[clap(flatten)]
        opts: PlayerOpts,
    },

    /// About the data and the valuation model.
    About,

    /// Open a client route: `/`, `/players`, `/player/<uuid>` or `/about`.
    Open {
        route: Route,

        #[clap(flatten)]
        opts: PlayerOpts,
    },

    /// Read routes and `search <query>` lines from stdin in one cached session.
    Shell {
        #[clap(flatten)]
        opts: PlayerOpts,
    },
}
