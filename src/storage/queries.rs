//! Entity accessors: create, lookup, update and delete
//!
//! Every write runs inside its own transaction. Foreign references are checked
//! inside that transaction before the insert; an unresolved reference returns
//! [`LeagueError::NotFound`] and the dropped transaction rolls back, so no row
//! is ever written for a rejected call.

use super::{models::*, schema::LeagueDatabase};
use crate::error::{LeagueError, Reference, Result};
use crate::types::{AvailabilityId, MatchId, PlayerId, StatisticId, TeamId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{info, warn};

pub(crate) const TEAM_COLUMNS: &str = "id, nombre, ciudad, entrenador";
pub(crate) const PLAYER_COLUMNS: &str = "id, nombre, apellido, posicion, numero, equipo_id";
pub(crate) const MATCH_COLUMNS: &str = "id, fecha, hora, equipo_local_id, equipo_visitante_id";
pub(crate) const STATISTIC_COLUMNS: &str =
    "id, jugador_id, partido_id, puntos, bloqueos, saques, recepciones";
pub(crate) const AVAILABILITY_COLUMNS: &str =
    "id, jugador_id, partido_id, disponible, lesion_tipo";

impl LeagueDatabase {
    pub fn create_team(&mut self, new: NewTeam) -> Result<Team> {
        new.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO equipo (nombre, ciudad, entrenador) VALUES (?, ?, ?)",
            params![new.name, new.city, new.coach],
        )?;
        let id = TeamId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(team_id = %id, name = %new.name, "team created");
        Ok(Team {
            id,
            name: new.name,
            city: new.city,
            coach: new.coach,
        })
    }

    pub fn get_team(&self, id: TeamId) -> Result<Option<Team>> {
        fetch_team(&self.conn, id)
    }

    /// Create a player on an existing team.
    ///
    /// Fails with `NotFound { reference: Team, .. }` when `team_id` does not
    /// resolve; nothing is written in that case.
    pub fn create_player(&mut self, new: NewPlayer) -> Result<Player> {
        new.validate()?;

        let tx = self.conn.transaction()?;
        require_team(&tx, new.team_id, Reference::Team)?;
        tx.execute(
            "INSERT INTO jugador (nombre, apellido, posicion, numero, equipo_id)
             VALUES (?, ?, ?, ?, ?)",
            params![
                new.first_name,
                new.last_name,
                new.position,
                new.number,
                new.team_id
            ],
        )?;
        let id = PlayerId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(player_id = %id, team_id = %new.team_id, "player created");
        Ok(Player {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            number: new.number,
            team_id: new.team_id,
        })
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        fetch_player(&self.conn, id)
    }

    /// Apply the `Some` fields of `update` to an existing player.
    ///
    /// Presence decides what changes, so `number: Some(0)` does set the jersey
    /// number to zero. A supplied `team_id` must resolve or nothing changes.
    pub fn update_player(&mut self, id: PlayerId, update: PlayerUpdate) -> Result<Player> {
        update.validate()?;

        let tx = self.conn.transaction()?;
        let mut player =
            fetch_player(&tx, id)?.ok_or_else(|| not_found(Reference::Player, id.as_i64()))?;

        if update.is_empty() {
            return Ok(player);
        }

        if let Some(team_id) = update.team_id {
            require_team(&tx, team_id, Reference::Team)?;
            player.team_id = team_id;
        }
        if let Some(first_name) = update.first_name {
            player.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            player.last_name = last_name;
        }
        if let Some(position) = update.position {
            player.position = position;
        }
        if let Some(number) = update.number {
            player.number = number;
        }

        tx.execute(
            "UPDATE jugador
             SET nombre = ?, apellido = ?, posicion = ?, numero = ?, equipo_id = ?
             WHERE id = ?",
            params![
                player.first_name,
                player.last_name,
                player.position,
                player.number,
                player.team_id,
                player.id
            ],
        )?;
        tx.commit()?;

        info!(player_id = %id, "player updated");
        Ok(player)
    }

    /// Delete a player. Statistics and availability rows for the player go
    /// with it through `ON DELETE CASCADE`.
    ///
    /// Returns `false` when no such player exists.
    pub fn delete_player(&mut self, id: PlayerId) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM jugador WHERE id = ?", params![id])?;
        if deleted == 0 {
            warn!(player_id = %id, "cannot delete player: it does not exist");
            return Ok(false);
        }
        tx.commit()?;

        info!(player_id = %id, "player deleted");
        Ok(true)
    }

    /// Schedule a match between two existing teams.
    ///
    /// The home team is checked first, so a call with two unknown teams
    /// reports `HomeTeam`.
    pub fn create_match(&mut self, new: NewMatch) -> Result<Match> {
        new.validate()?;

        let tx = self.conn.transaction()?;
        require_team(&tx, new.home_team_id, Reference::HomeTeam)?;
        require_team(&tx, new.away_team_id, Reference::AwayTeam)?;
        tx.execute(
            "INSERT INTO partido (fecha, hora, equipo_local_id, equipo_visitante_id)
             VALUES (?, ?, ?, ?)",
            params![new.date, new.time, new.home_team_id, new.away_team_id],
        )?;
        let id = MatchId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(
            match_id = %id,
            home = %new.home_team_id,
            away = %new.away_team_id,
            "match created"
        );
        Ok(Match {
            id,
            date: new.date,
            time: new.time,
            home_team_id: new.home_team_id,
            away_team_id: new.away_team_id,
        })
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        fetch_match(&self.conn, id)
    }

    pub fn create_statistic(&mut self, new: NewStatistic) -> Result<Statistic> {
        let tx = self.conn.transaction()?;
        require_player(&tx, new.player_id)?;
        require_match(&tx, new.match_id)?;
        tx.execute(
            "INSERT INTO estadistica (jugador_id, partido_id, puntos, bloqueos, saques, recepciones)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                new.player_id,
                new.match_id,
                new.points,
                new.blocks,
                new.serves,
                new.receptions
            ],
        )?;
        let id = StatisticId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(statistic_id = %id, player_id = %new.player_id, match_id = %new.match_id, "statistic recorded");
        Ok(Statistic {
            id,
            player_id: new.player_id,
            match_id: new.match_id,
            points: new.points,
            blocks: new.blocks,
            serves: new.serves,
            receptions: new.receptions,
        })
    }

    /// Record whether a player is available for a match.
    ///
    /// An injury type only describes an unavailable player and is dropped
    /// when `available` is true. A blank injury type is stored as none.
    pub fn create_availability(&mut self, new: NewAvailability) -> Result<AvailabilityStatus> {
        new.validate()?;
        let injury_type = new.injury().map(str::to_string);

        let tx = self.conn.transaction()?;
        require_player(&tx, new.player_id)?;
        require_match(&tx, new.match_id)?;
        tx.execute(
            "INSERT INTO estado_jugador (jugador_id, partido_id, disponible, lesion_tipo)
             VALUES (?, ?, ?, ?)",
            params![new.player_id, new.match_id, new.available, injury_type],
        )?;
        let id = AvailabilityId::new(tx.last_insert_rowid());
        tx.commit()?;

        info!(
            availability_id = %id,
            player_id = %new.player_id,
            match_id = %new.match_id,
            available = new.available,
            "availability recorded"
        );
        Ok(AvailabilityStatus {
            id,
            player_id: new.player_id,
            match_id: new.match_id,
            available: new.available,
            injury_type,
        })
    }

    pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
        Ok(Team {
            id: row.get(0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            coach: row.get(3)?,
        })
    }

    pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            position: row.get(3)?,
            number: row.get(4)?,
            team_id: row.get(5)?,
        })
    }

    pub(crate) fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
        Ok(Match {
            id: row.get(0)?,
            date: row.get(1)?,
            time: row.get(2)?,
            home_team_id: row.get(3)?,
            away_team_id: row.get(4)?,
        })
    }

    pub(crate) fn row_to_statistic(row: &Row) -> rusqlite::Result<Statistic> {
        Ok(Statistic {
            id: row.get(0)?,
            player_id: row.get(1)?,
            match_id: row.get(2)?,
            points: row.get(3)?,
            blocks: row.get(4)?,
            serves: row.get(5)?,
            receptions: row.get(6)?,
        })
    }

    pub(crate) fn row_to_availability(row: &Row) -> rusqlite::Result<AvailabilityStatus> {
        Ok(AvailabilityStatus {
            id: row.get(0)?,
            player_id: row.get(1)?,
            match_id: row.get(2)?,
            available: row.get(3)?,
            injury_type: row.get(4)?,
        })
    }
}

// Lookups take a plain `&Connection` so they run the same on the shared
// connection and inside an open transaction.

pub(crate) fn fetch_team(conn: &Connection, id: TeamId) -> Result<Option<Team>> {
    let team = conn
        .query_row(
            &format!("SELECT {TEAM_COLUMNS} FROM equipo WHERE id = ?"),
            params![id],
            LeagueDatabase::row_to_team,
        )
        .optional()?;
    Ok(team)
}

pub(crate) fn fetch_player(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let player = conn
        .query_row(
            &format!("SELECT {PLAYER_COLUMNS} FROM jugador WHERE id = ?"),
            params![id],
            LeagueDatabase::row_to_player,
        )
        .optional()?;
    Ok(player)
}

pub(crate) fn fetch_match(conn: &Connection, id: MatchId) -> Result<Option<Match>> {
    let found = conn
        .query_row(
            &format!("SELECT {MATCH_COLUMNS} FROM partido WHERE id = ?"),
            params![id],
            LeagueDatabase::row_to_match,
        )
        .optional()?;
    Ok(found)
}

fn require_team(conn: &Connection, id: TeamId, reference: Reference) -> Result<Team> {
    fetch_team(conn, id)?.ok_or_else(|| not_found(reference, id.as_i64()))
}

fn require_player(conn: &Connection, id: PlayerId) -> Result<Player> {
    fetch_player(conn, id)?.ok_or_else(|| not_found(Reference::Player, id.as_i64()))
}

fn require_match(conn: &Connection, id: MatchId) -> Result<Match> {
    fetch_match(conn, id)?.ok_or_else(|| not_found(Reference::Match, id.as_i64()))
}

fn not_found(reference: Reference, id: i64) -> LeagueError {
    warn!(%reference, id, "referenced entity does not exist");
    LeagueError::NotFound { reference, id }
}
