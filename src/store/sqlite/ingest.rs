//! Row-level write helpers used by ingestion.

use crate::domain::{Normalized, NoteRecord, Timestamp, normalize};
use crate::infra::Fingerprint;
use crate::store::{StoreError, StoreResult};
use rusqlite::{Connection, ErrorCode, params};
use tracing::warn;

/// Inserts one record and its tag links, returning the new note id.
pub(super) fn insert_record(conn: &Connection, record: &NoteRecord) -> StoreResult<i64> {
    let created = normalize(record.created.as_deref());
    let updated = normalize(record.updated.as_deref());
    warn_on_fallback(record, "created", record.created.as_deref(), &created);
    warn_on_fallback(record, "updated", record.updated.as_deref(), &updated);

    conn.prepare_cached(
        "INSERT INTO notes (title, content, author, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?
    .execute(params![
        record.title,
        record.content,
        record.author,
        created.timestamp,
        updated.timestamp,
    ])?;
    let note_id = conn.last_insert_rowid();

    for (position, name) in record.tags.iter().enumerate() {
        if name.trim().is_empty() {
            continue;
        }
        let tag_id = get_or_create_tag(conn, name)?;
        conn.prepare_cached(
            "INSERT OR IGNORE INTO note_tags (note_id, tag_id, position) VALUES (?1, ?2, ?3)",
        )?
        .execute(params![note_id, tag_id, position as i64])?;
    }

    Ok(note_id)
}

/// Returns the id of the tag with this exact name, creating it if needed.
///
/// A single upsert statement, so lookup and creation cannot interleave.
pub(super) fn get_or_create_tag(conn: &Connection, name: &str) -> StoreResult<i64> {
    let id = conn
        .prepare_cached(
            "INSERT INTO tags (name) VALUES (?1)
             ON CONFLICT(name) DO UPDATE SET name = excluded.name
             RETURNING id",
        )?
        .query_row([name], |row| row.get(0))?;
    Ok(id)
}

/// Writes the ledger row; a primary key conflict means the file was already ingested.
pub(super) fn record_ingested(
    conn: &Connection,
    fingerprint: &Fingerprint,
    filename: &str,
) -> StoreResult<()> {
    let result = conn.execute(
        "INSERT INTO ingested_files (fingerprint, filename, ingested_at) VALUES (?1, ?2, ?3)",
        params![fingerprint, filename, Timestamp::now()],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
            Err(StoreError::DuplicateFingerprint {
                fingerprint: fingerprint.clone(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

fn warn_on_fallback(record: &NoteRecord, field: &str, raw: Option<&str>, result: &Normalized) {
    if result.fell_back {
        warn!(
            title = %record.title,
            field,
            raw = raw.unwrap_or(""),
            substituted = %result.timestamp,
            "unusable date in import; using current time"
        );
    }
}
