//! Exporting a NoteStore to a snapshot blob and rebuilding one from it.

use super::NoteStore;
use crate::store::snapshot::{self, NoteRow, NoteTagRow, SnapshotPayload, TagRow};
use crate::store::{NoteRepository, SCHEMA_VERSION, StoreError, StoreResult};
use rusqlite::params;
use tracing::{debug, info};

impl NoteStore {
    /// Serializes every row of the store into a self-contained blob.
    pub fn export_blob(&self) -> StoreResult<Vec<u8>> {
        let payload = self.dump()?;
        let blob = snapshot::encode(&payload)?;
        debug!(
            notes = payload.notes.len(),
            tags = payload.tags.len(),
            bytes = blob.len(),
            "exported snapshot"
        );
        Ok(blob)
    }

    /// Builds a new store from a blob produced by `export_blob`.
    ///
    /// Ids are preserved exactly. Fails with `StoreError::CorruptStore` if the
    /// blob is damaged or its rows violate the schema (duplicate keys, links
    /// to missing notes or tags). The caller's current store is never touched.
    pub fn import_blob(blob: &[u8]) -> StoreResult<Self> {
        let payload = snapshot::decode(blob)?;

        let mut store = Self::new()?;
        store.load(&payload).map_err(|e| match e {
            StoreError::Database(err) => {
                StoreError::corrupt(format!("snapshot rows violate the schema: {err}"))
            }
            other => other,
        })?;

        info!(
            notes = payload.notes.len(),
            tags = payload.tags.len(),
            files = payload.ingested_files.len(),
            "imported snapshot"
        );
        Ok(store)
    }

    fn dump(&self) -> StoreResult<SnapshotPayload> {
        let notes: Vec<NoteRow> = self
            .conn
            .prepare(
                "SELECT id, title, content, author, created_at, updated_at
                 FROM notes ORDER BY id",
            )?
            .query_map([], |row| {
                Ok(NoteRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                    author: row.get(3)?,
                    created_at: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            })?
            .collect::<Result<_, _>>()?;

        let tags: Vec<TagRow> = self
            .conn
            .prepare("SELECT id, name FROM tags ORDER BY id")?
            .query_map([], |row| {
                Ok(TagRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<_, _>>()?;

        let note_tags: Vec<NoteTagRow> = self
            .conn
            .prepare(
                "SELECT note_id, tag_id, position FROM note_tags
                 ORDER BY note_id, position, tag_id",
            )?
            .query_map([], |row| {
                Ok(NoteTagRow {
                    note_id: row.get(0)?,
                    tag_id: row.get(1)?,
                    position: row.get(2)?,
                })
            })?
            .collect::<Result<_, _>>()?;

        Ok(SnapshotPayload {
            schema_version: SCHEMA_VERSION,
            notes,
            tags,
            note_tags,
            ingested_files: self.ingested_files()?,
        })
    }

    /// Inserts every payload row in one transaction, with foreign keys enforced.
    fn load(&mut self, payload: &SnapshotPayload) -> StoreResult<()> {
        let tx = self.transaction("snapshot load")?;

        for note in &payload.notes {
            tx.execute(
                "INSERT INTO notes (id, title, content, author, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    note.id,
                    note.title,
                    note.content,
                    note.author,
                    note.created_at,
                    note.updated_at,
                ],
            )?;
        }

        for tag in &payload.tags {
            tx.execute(
                "INSERT INTO tags (id, name) VALUES (?1, ?2)",
                params![tag.id, tag.name],
            )?;
        }

        for link in &payload.note_tags {
            tx.execute(
                "INSERT INTO note_tags (note_id, tag_id, position) VALUES (?1, ?2, ?3)",
                params![link.note_id, link.tag_id, link.position],
            )?;
        }

        for file in &payload.ingested_files {
            tx.execute(
                "INSERT INTO ingested_files (fingerprint, filename, ingested_at)
                 VALUES (?1, ?2, ?3)",
                params![file.fingerprint, file.filename, file.ingested_at],
            )?;
        }

        tx.commit()
    }
}
