//! Field checks applied before any row is written

use super::models::{NewAvailability, NewMatch, NewPlayer, NewTeam, PlayerUpdate};
use crate::error::ValidationError;

pub const TEAM_TEXT_MAX: usize = 100;
pub const PLAYER_TEXT_MAX: usize = 50;
pub const MATCH_TEXT_MAX: usize = 20;
pub const INJURY_TEXT_MAX: usize = 100;

/// Reject blank or oversized text. Length is counted in characters, not bytes.
pub fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn check_optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_text(field, v, max),
        None => Ok(()),
    }
}

impl NewTeam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("nombre", &self.name, TEAM_TEXT_MAX)?;
        check_text("ciudad", &self.city, TEAM_TEXT_MAX)?;
        check_text("entrenador", &self.coach, TEAM_TEXT_MAX)
    }
}

impl NewPlayer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("nombre", &self.first_name, PLAYER_TEXT_MAX)?;
        check_text("apellido", &self.last_name, PLAYER_TEXT_MAX)?;
        check_text("posicion", &self.position, PLAYER_TEXT_MAX)
    }
}

impl PlayerUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional_text("nombre", self.first_name.as_deref(), PLAYER_TEXT_MAX)?;
        check_optional_text("apellido", self.last_name.as_deref(), PLAYER_TEXT_MAX)?;
        check_optional_text("posicion", self.position.as_deref(), PLAYER_TEXT_MAX)
    }
}

impl NewMatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("fecha", &self.date, MATCH_TEXT_MAX)?;
        check_text("hora", &self.time, MATCH_TEXT_MAX)
    }
}

impl NewAvailability {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional_text("lesion_tipo", self.injury(), INJURY_TEXT_MAX)
    }
}
