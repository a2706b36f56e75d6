//! Storage layer for the league backend
//!
//! This module is the entity accessor layer over the SQLite store,
//! organized into logical components:
//! - `models`: Stored records and the inputs that create them
//! - `schema`: Database connection and schema management
//! - `validation`: Field checks run before any write
//! - `queries`: Create, lookup, update and delete
//! - `relations`: Child listings per team and per match

pub mod models;
pub mod queries;
pub mod relations;
pub mod schema;
pub mod validation;


pub use models::*;
pub use schema::LeagueDatabase;
