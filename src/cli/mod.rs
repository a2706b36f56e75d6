//! CLI argument definitions and parsing.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Where the league database lives
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// SQLite database file (or set `SUPERLIGA_DB_PATH` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the league HTTP API.
    ///
    /// Tables are created on startup if they do not exist yet.
    Serve {
        #[clap(flatten)]
        database: DatabaseArgs,

        /// Listen address (or set `SUPERLIGA_BIND_ADDR` env var).
        #[clap(long, short)]
        bind: Option<SocketAddr>,

        /// Allow cross-origin requests from any origin, not only localhost.
        #[clap(long)]
        cors_permissive: bool,
    },

    /// Load the demonstration league (two teams, three players, one match).
    Seed {
        #[clap(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "superliga", about = "Volleyball league backend", version)]
pub struct Superliga {
    #[clap(subcommand)]
    pub command: Commands,
}
