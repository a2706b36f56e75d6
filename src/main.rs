//! Entry point: parse CLI, install logging, dispatch to command handlers.

use clap::Parser;
use superliga::{
    cli::{Commands, Superliga},
    commands::{seed::handle_seed, serve::handle_serve},
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "superliga=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let app = Superliga::parse();

    match app.command {
        Commands::Serve {
            database,
            bind,
            cors_permissive,
        } => handle_serve(database.db, bind, cors_permissive).await?,

        Commands::Seed { database } => handle_seed(database.db)?,
    }

    Ok(())
}
