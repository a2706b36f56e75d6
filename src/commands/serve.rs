//! Serve command implementation

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use super::{resolve_bind_addr, resolve_db_path};
use crate::{
    http::{run_server, ServerConfig},
    storage::LeagueDatabase,
    Result,
};

/// Open the store (creating tables as needed) and serve the HTTP API
pub async fn handle_serve(
    db_path: Option<PathBuf>,
    bind_addr: Option<SocketAddr>,
    cors_permissive: bool,
) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;
    let bind_addr = resolve_bind_addr(bind_addr)?;

    let db = LeagueDatabase::open(&db_path)?;
    info!(path = %db_path.display(), "league database ready");

    run_server(
        db,
        ServerConfig {
            bind_addr,
            cors_permissive,
        },
    )
    .await
}
