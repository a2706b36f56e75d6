//! ID types for league entities.
//!
//! Every table uses a store-assigned integer primary key. Each entity gets its
//! own wrapper so a player id can never be passed where a match id is expected.
//!
//! # Examples
//!
//! ```rust
//! use superliga::TeamId;
//!
//! let team_id: TeamId = "42".parse().unwrap();
//! assert_eq!(team_id.as_i64(), 42);
//! assert_eq!(team_id.to_string(), "42");
//! ```

use crate::error::{LeagueError, Result};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = LeagueError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

entity_id!(
    /// Primary key of a row in `equipo`.
    TeamId
);

entity_id!(
    /// Primary key of a row in `jugador`.
    PlayerId
);

entity_id!(
    /// Primary key of a row in `partido`.
    MatchId
);

entity_id!(
    /// Primary key of a row in `estadistica`.
    StatisticId
);

entity_id!(
    /// Primary key of a row in `estado_jugador`.
    AvailabilityId
);
