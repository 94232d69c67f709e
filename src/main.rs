//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use football_scout::{
    cli::{Commands, Scout},
    commands::{
        about::handle_about,
        open::handle_open,
        player::{handle_player, PlayerParams},
        players::handle_players,
        search::handle_search,
        shell::handle_shell,
        CommandContext,
    },
    core::{config::load_dotenv, logger::init_cli_logger},
    Result,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = Scout::parse();
    // .env first, so a RUST_LOG it sets reaches the filter
    let dotenv = load_dotenv();
    init_cli_logger(app.global.verbose);
    dotenv.log();

    if let Err(e) = run(app).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(app: Scout) -> Result<()> {
    let ctx = CommandContext::new(app.global.base_url.as_deref(), app.global.json)?;

    let outcome = match app.command {
        Commands::Search { query } => handle_search(&ctx, &query).await,
        Commands::Players => handle_players(&ctx).await,
        Commands::Player { uuid, opts } => {
            handle_player(&ctx, &uuid, PlayerParams::from(&opts)).await
        }
        Commands::About => handle_about(&ctx),
        Commands::Open { route, opts } => {
            handle_open(&ctx, &route, PlayerParams::from(&opts)).await
        }
        Commands::Shell { opts } => handle_shell(&ctx, PlayerParams::from(&opts)).await,
    };

    ctx.log_cache_stats();
    outcome
}
