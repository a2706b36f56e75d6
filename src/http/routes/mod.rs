//! Route handlers organized by resource

pub mod availability;
pub mod health;
pub mod matches;
pub mod players;
pub mod statistics;
pub mod teams;

use crate::error::{LeagueError, ValidationError};

/// Unwrap a required body field, or fail with a 400 naming it.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, LeagueError> {
    value.ok_or(LeagueError::Validation(ValidationError::Missing { field }))
}
