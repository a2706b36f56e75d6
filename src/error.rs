//! Error types for the Superliga league backend

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

/// The foreign reference that failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Team,
    HomeTeam,
    AwayTeam,
    Player,
    Match,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Reference::Team => "team",
            Reference::HomeTeam => "home team",
            Reference::AwayTeam => "away team",
            Reference::Player => "player",
            Reference::Match => "match",
        };
        f.write_str(label)
    }
}

/// Field-level validation failure for incoming entity data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid bind address: {0}")]
    InvalidAddr(#[from] std::net::AddrParseError),

    #[error("Could not determine data directory; set {env_var}")]
    MissingDataDir { env_var: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("The {reference} with id {id} does not exist")]
    NotFound { reference: Reference, id: i64 },

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl LeagueError {
    /// True for failures caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LeagueError::Validation(_) | LeagueError::NotFound { .. } | LeagueError::InvalidId(_)
        )
    }
}

#[cfg(test)]
mod tests;
