//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Version of the relational schema. Snapshots record it and are only
/// accepted by a store with the same version.
pub const SCHEMA_VERSION: u32 = 1;

/// Creates the database schema for the note store.
///
/// Idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `notes` - Imported notes; ids come from AUTOINCREMENT and are never reused
/// - `tags` - Interned tag names (case-sensitive unique)
/// - `note_tags` - Many-to-many junction, with each tag's position in its note
/// - `ingested_files` - Ledger of imported file fingerprints
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS note_tags (
            note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            PRIMARY KEY (note_id, tag_id)
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS ingested_files (
            fingerprint TEXT PRIMARY KEY,
            filename TEXT NOT NULL,
            ingested_at TEXT NOT NULL
        );",
    )?;

    // Timestamps are fixed-width canonical text, so text order is time order.
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_updated ON notes(updated_at DESC, id DESC);
         CREATE INDEX IF NOT EXISTS idx_note_tags_tag ON note_tags(tag_id);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at)
         VALUES (?1, strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
