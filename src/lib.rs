//! Superliga volleyball league backend
//!
//! Teams, players, matches, per-player match statistics and player
//! availability, stored in SQLite and served over a small JSON HTTP API.
//!
//! ## Layout
//!
//! - [`storage`]: the entity accessor layer. Every write validates its
//!   foreign references inside its own transaction before inserting.
//! - [`http`]: axum routes mapping JSON requests onto the accessors.
//! - [`commands`]: `serve` and `seed` entry points used by the binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use superliga::storage::{LeagueDatabase, NewPlayer, NewTeam};
//!
//! # fn example() -> superliga::Result<()> {
//! let mut db = LeagueDatabase::new_in_memory()?;
//! let team = db.create_team(NewTeam {
//!     name: "Los Leones".into(),
//!     city: "Bogotá".into(),
//!     coach: "Carlos Pérez".into(),
//! })?;
//! let player = db.create_player(NewPlayer {
//!     first_name: "Juan".into(),
//!     last_name: "Pérez".into(),
//!     position: "Opuesto".into(),
//!     number: 1,
//!     team_id: team.id,
//! })?;
//! assert_eq!(player.team_id, team.id);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SUPERLIGA_DB_PATH=/var/lib/superliga/league.db
//! export SUPERLIGA_BIND_ADDR=0.0.0.0:3030
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod http;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{LeagueError, Reference, Result, ValidationError};
pub use storage::LeagueDatabase;
pub use types::{AvailabilityId, MatchId, PlayerId, StatisticId, TeamId};

pub const DB_PATH_ENV_VAR: &str = "SUPERLIGA_DB_PATH";
pub const BIND_ADDR_ENV_VAR: &str = "SUPERLIGA_BIND_ADDR";
