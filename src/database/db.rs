//! SQLite-backed learner state store
//!
//! Holds one row per learner with the serialized scheduler record.
//! Writes are single-statement upserts, so a record is replaced whole or not at all.

use super::store::StateStore;
use crate::error::StoreError;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and ensures the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        // One serialized record per learner. `updated_at` is the wall-clock
        // time of the write, independent of any simulated scheduler clock.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS learner_state (
                learner_id TEXT PRIMARY KEY,
                state TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            (),
        )?;

        Ok(Self { conn })
    }

    /// Lists learners with a stored record, in id order
    pub fn learner_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT learner_id FROM learner_state ORDER BY learner_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(ids)
    }

    /// Removes a learner's record. Returns whether a row was deleted.
    pub fn delete(&mut self, learner_id: &str) -> Result<bool, StoreError> {
        let removed = self.conn.execute(
            "DELETE FROM learner_state WHERE learner_id = ?1",
            params![learner_id],
        )?;
        Ok(removed > 0)
    }
}

impl StateStore for SqliteStore {
    fn load(&self, learner_id: &str) -> Result<Option<String>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT state FROM learner_state WHERE learner_id = ?1",
                params![learner_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(record)
    }

    /// Upserts the record and stamps `updated_at` with the real write time.
    fn save(&mut self, learner_id: &str, record: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO learner_state (learner_id, state, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(learner_id) DO UPDATE SET state = excluded.state, updated_at = excluded.updated_at",
            params![learner_id, record, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
