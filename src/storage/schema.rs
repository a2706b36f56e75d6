//! Database schema and connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Handle to the league store. Every accessor call goes through one of these.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened league database");
        Self::from_connection(conn)
    }

    /// In-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Cascading player deletes depend on this; SQLite defaults it off per connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create the five league tables if they are missing
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS equipo (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                ciudad TEXT NOT NULL,
                entrenador TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS jugador (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                apellido TEXT NOT NULL,
                posicion TEXT NOT NULL,
                numero INTEGER NOT NULL CHECK (numero >= 0),
                equipo_id INTEGER NOT NULL,
                FOREIGN KEY (equipo_id) REFERENCES equipo(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS partido (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                fecha TEXT NOT NULL,
                hora TEXT NOT NULL,
                equipo_local_id INTEGER NOT NULL,
                equipo_visitante_id INTEGER NOT NULL,
                FOREIGN KEY (equipo_local_id) REFERENCES equipo(id),
                FOREIGN KEY (equipo_visitante_id) REFERENCES equipo(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS estadistica (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                jugador_id INTEGER NOT NULL,
                partido_id INTEGER NOT NULL,
                puntos INTEGER NOT NULL DEFAULT 0 CHECK (puntos >= 0),
                bloqueos INTEGER NOT NULL DEFAULT 0 CHECK (bloqueos >= 0),
                saques INTEGER NOT NULL DEFAULT 0 CHECK (saques >= 0),
                recepciones INTEGER NOT NULL DEFAULT 0 CHECK (recepciones >= 0),
                FOREIGN KEY (jugador_id) REFERENCES jugador(id) ON DELETE CASCADE,
                FOREIGN KEY (partido_id) REFERENCES partido(id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS estado_jugador (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                jugador_id INTEGER NOT NULL,
                partido_id INTEGER NOT NULL,
                disponible INTEGER NOT NULL,
                lesion_tipo TEXT,
                FOREIGN KEY (jugador_id) REFERENCES jugador(id) ON DELETE CASCADE,
                FOREIGN KEY (partido_id) REFERENCES partido(id) ON DELETE CASCADE
            )",
            [],
        )?;

        Ok(())
    }
}
