//! Child listings: a team's players and matches, a match's statistics and
//! availability records.
//!
//! Each listing returns `None` when the parent does not exist and
//! `Some(vec![])` when it exists without children.

use super::queries::{
    fetch_match, fetch_team, AVAILABILITY_COLUMNS, MATCH_COLUMNS, PLAYER_COLUMNS,
    STATISTIC_COLUMNS,
};
use super::{models::*, schema::LeagueDatabase};
use crate::error::Result;
use crate::types::{MatchId, TeamId};
use rusqlite::{params, Row};
use tracing::warn;

impl LeagueDatabase {
    /// Every player in the league, ordered by id
    pub fn list_players(&self) -> Result<Vec<Player>> {
        self.collect(
            &format!("SELECT {PLAYER_COLUMNS} FROM jugador ORDER BY id"),
            &[],
            Self::row_to_player,
        )
    }

    pub fn list_team_players(&self, team_id: TeamId) -> Result<Option<Vec<Player>>> {
        if fetch_team(&self.conn, team_id)?.is_none() {
            warn!(team_id = %team_id, "cannot list players: team does not exist");
            return Ok(None);
        }
        self.collect(
            &format!("SELECT {PLAYER_COLUMNS} FROM jugador WHERE equipo_id = ? ORDER BY id"),
            params![team_id],
            Self::row_to_player,
        )
        .map(Some)
    }

    /// Matches where the team plays at home or away. A single predicate over
    /// both columns, so each match appears once.
    pub fn list_team_matches(&self, team_id: TeamId) -> Result<Option<Vec<Match>>> {
        if fetch_team(&self.conn, team_id)?.is_none() {
            warn!(team_id = %team_id, "cannot list matches: team does not exist");
            return Ok(None);
        }
        self.collect(
            &format!(
                "SELECT {MATCH_COLUMNS} FROM partido
                 WHERE equipo_local_id = ?1 OR equipo_visitante_id = ?1
                 ORDER BY id"
            ),
            params![team_id],
            Self::row_to_match,
        )
        .map(Some)
    }

    pub fn list_match_statistics(&self, match_id: MatchId) -> Result<Option<Vec<Statistic>>> {
        if fetch_match(&self.conn, match_id)?.is_none() {
            warn!(match_id = %match_id, "cannot list statistics: match does not exist");
            return Ok(None);
        }
        self.collect(
            &format!("SELECT {STATISTIC_COLUMNS} FROM estadistica WHERE partido_id = ? ORDER BY id"),
            params![match_id],
            Self::row_to_statistic,
        )
        .map(Some)
    }

    pub fn list_match_availability(
        &self,
        match_id: MatchId,
    ) -> Result<Option<Vec<AvailabilityStatus>>> {
        if fetch_match(&self.conn, match_id)?.is_none() {
            warn!(match_id = %match_id, "cannot list availability: match does not exist");
            return Ok(None);
        }
        self.collect(
            &format!(
                "SELECT {AVAILABILITY_COLUMNS} FROM estado_jugador WHERE partido_id = ? ORDER BY id"
            ),
            params![match_id],
            Self::row_to_availability,
        )
        .map(Some)
    }

    fn collect<T>(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
        map: fn(&Row) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }
}
