//! Data models for the storage layer
//!
//! Stored records serialize with the Spanish field names used on the wire and
//! in the table columns (`nombre`, `equipo_id`, ...).

use crate::types::{AvailabilityId, MatchId, PlayerId, StatisticId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team row from `equipo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "entrenador")]
    pub coach: String,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city)
    }
}

/// Input for [`LeagueDatabase::create_team`](super::LeagueDatabase::create_team)
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub city: String,
    pub coach: String,
}

/// A player row from `jugador`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "posicion")]
    pub position: String,
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "equipo_id")]
    pub team_id: TeamId,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, #{})",
            self.first_name, self.last_name, self.position, self.number
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub number: u32,
    pub team_id: TeamId,
}

/// Partial player update. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub number: Option<u32>,
    pub team_id: Option<TeamId>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.position.is_none()
            && self.number.is_none()
            && self.team_id.is_none()
    }
}

/// A match row from `partido`
///
/// Date and time are kept as the free-form strings the league schedules with
/// (`"2024-05-20"`, `"8:00 PM"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "equipo_local_id")]
    pub home_team_id: TeamId,
    #[serde(rename = "equipo_visitante_id")]
    pub away_team_id: TeamId,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team {} vs team {} ({} {})",
            self.home_team_id, self.away_team_id, self.date, self.time
        )
    }
}

impl Match {
    /// `"Los Leones vs Las Panteras (2024-05-20 8:00 PM)"`
    pub fn describe(&self, home: &Team, away: &Team) -> String {
        format!("{} vs {} ({} {})", home.name, away.name, self.date, self.time)
    }
}

#[derive(Debug, Clone)]
pub struct NewMatch {
    pub date: String,
    pub time: String,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
}

/// Per-player, per-match counters from `estadistica`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: StatisticId,
    #[serde(rename = "jugador_id")]
    pub player_id: PlayerId,
    #[serde(rename = "partido_id")]
    pub match_id: MatchId,
    #[serde(rename = "puntos")]
    pub points: u32,
    #[serde(rename = "bloqueos")]
    pub blocks: u32,
    #[serde(rename = "saques")]
    pub serves: u32,
    #[serde(rename = "recepciones")]
    pub receptions: u32,
}

impl Statistic {
    fn counters(&self) -> String {
        format!(
            "Points: {}, Blocks: {}, Serves: {}, Receptions: {}",
            self.points, self.blocks, self.serves, self.receptions
        )
    }

    /// The counters labelled with the player's first name
    pub fn describe(&self, player: &Player) -> String {
        format!("{} - {}", player.first_name, self.counters())
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} - {}", self.player_id, self.counters())
    }
}

#[derive(Debug, Clone)]
pub struct NewStatistic {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub points: u32,
    pub blocks: u32,
    pub serves: u32,
    pub receptions: u32,
}

impl NewStatistic {
    /// A statistic line with every counter at zero.
    pub fn new(player_id: PlayerId, match_id: MatchId) -> Self {
        Self {
            player_id,
            match_id,
            points: 0,
            blocks: 0,
            serves: 0,
            receptions: 0,
        }
    }
}

/// Whether a player can take part in a match, from `estado_jugador`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    pub id: AvailabilityId,
    #[serde(rename = "jugador_id")]
    pub player_id: PlayerId,
    #[serde(rename = "partido_id")]
    pub match_id: MatchId,
    #[serde(rename = "disponible")]
    pub available: bool,
    #[serde(rename = "lesion_tipo")]
    pub injury_type: Option<String>,
}

impl AvailabilityStatus {
    fn state(&self) -> String {
        if self.available {
            "available".to_string()
        } else {
            format!(
                "injured ({})",
                self.injury_type.as_deref().unwrap_or("unspecified")
            )
        }
    }

    /// `"Andrés in Los Leones vs Las Panteras (2024-05-20 8:00 PM): injured (...)"`,
    /// with `game` the already described match
    pub fn describe(&self, player: &Player, game: &str) -> String {
        format!("{} in {}: {}", player.first_name, game, self.state())
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} in match {}: {}",
            self.player_id,
            self.match_id,
            self.state()
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewAvailability {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub available: bool,
    pub injury_type: Option<String>,
}

impl NewAvailability {
    /// The injury that gets stored: none for an available player, and a blank
    /// description counts as none.
    pub fn injury(&self) -> Option<&str> {
        if self.available {
            return None;
        }
        self.injury_type.as_deref().filter(|t| !t.trim().is_empty())
    }
}
