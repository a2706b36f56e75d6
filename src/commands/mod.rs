//! Command implementations for the Superliga CLI

pub mod seed;
pub mod serve;


use std::net::SocketAddr;
use std::path::PathBuf;

use dirs::data_dir;

use crate::{
    error::LeagueError, http::server::DEFAULT_BIND_ADDR, Result, BIND_ADDR_ENV_VAR,
    DB_PATH_ENV_VAR,
};

/// Resolve the database path from the CLI flag, then `SUPERLIGA_DB_PATH`,
/// then the platform data directory.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => {
            let dir = data_dir().ok_or_else(|| LeagueError::MissingDataDir {
                env_var: DB_PATH_ENV_VAR.to_string(),
            })?;
            Ok(dir.join("superliga").join("league.db"))
        }
    }
}

/// Resolve the listen address from the CLI flag, then `SUPERLIGA_BIND_ADDR`,
/// then the default. A blank variable counts as unset.
pub fn resolve_bind_addr(bind_addr: Option<SocketAddr>) -> Result<SocketAddr> {
    if let Some(addr) = bind_addr {
        return Ok(addr);
    }

    match std::env::var(BIND_ADDR_ENV_VAR) {
        Ok(addr) if !addr.trim().is_empty() => Ok(addr.trim().parse()?),
        _ => Ok(DEFAULT_BIND_ADDR.parse()?),
    }
}
