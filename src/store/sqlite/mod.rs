//! SQLite-backed note store implementation.

mod connection;
mod convert;
mod functions;
mod ingest;
mod repo_impl;
mod snapshot;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// NoteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns an in-memory database holding the whole store. The store is made
/// portable by exporting it to a snapshot blob and importing it back; it never
/// reads or writes files itself.
#[derive(Debug)]
pub struct NoteStore {
    pub(crate) conn: Connection,
}
