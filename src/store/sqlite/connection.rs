//! Construction and connection management for NoteStore.

use super::NoteStore;
use super::functions::register_functions;
use super::transaction::Transaction;
use crate::store::{StoreResult, StoreStats, create_schema};
use rusqlite::Connection;
use tracing::debug;

impl NoteStore {
    // ===========================================
    // Construction
    // ===========================================

    /// Creates an empty store with the note schema.
    ///
    /// Each call returns an independent store; there is no shared state.
    pub fn new() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        register_functions(&conn)?;
        debug!("created empty note store");
        Ok(Self { conn })
    }

    /// Discards all data and returns a fresh, empty store.
    pub fn reset(self) -> StoreResult<Self> {
        drop(self);
        debug!("store reset");
        Self::new()
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a write transaction named `label` in logs.
    ///
    /// Rolls back on drop unless `commit()` is called.
    pub fn transaction(&mut self, label: &'static str) -> StoreResult<Transaction<'_>> {
        Transaction::begin(&self.conn, label)
    }

    // ===========================================
    // Statistics
    // ===========================================

    /// Returns row counts for notes, tags, links and ingested files.
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let count = |table: &str| -> StoreResult<u64> {
            let sql = format!("SELECT COUNT(*) FROM {table}");
            let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
            Ok(n as u64)
        };

        Ok(StoreStats {
            notes: count("notes")?,
            tags: count("tags")?,
            links: count("note_tags")?,
            files: count("ingested_files")?,
        })
    }
}
