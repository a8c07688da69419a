//! NoteRepository trait implementation for NoteStore.

use super::NoteStore;
use super::functions::CONTAINS_FN;
use super::ingest::{insert_record, record_ingested};
use crate::domain::{NoteRecord, SearchScope, StoredNote};
use crate::infra::Fingerprint;
use crate::store::{IngestedFile, NoteRepository, StoreError, StoreResult, TagWithCount};
use rusqlite::{OptionalExtension, Row, params};
use tracing::{debug, info};

const NOTE_COLUMNS: &str = "n.id, n.title, n.content, n.author, n.created_at, n.updated_at";

const NEWEST_FIRST: &str = "ORDER BY n.updated_at DESC, n.id DESC";

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<StoredNote> {
    Ok(StoredNote {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        tags: Vec::new(),
    })
}

/// SQL predicate over `notes n` selecting matches for `?1` in the given scope.
fn scope_predicate(scope: SearchScope) -> String {
    let any_tag = format!(
        "EXISTS (SELECT 1 FROM note_tags nt JOIN tags t ON t.id = nt.tag_id
                 WHERE nt.note_id = n.id AND {CONTAINS_FN}(t.name, ?1))"
    );
    match scope {
        SearchScope::Title => format!("{CONTAINS_FN}(n.title, ?1)"),
        SearchScope::Author => format!("{CONTAINS_FN}(n.author, ?1)"),
        SearchScope::Content => format!("{CONTAINS_FN}(n.content, ?1)"),
        SearchScope::Tag => any_tag,
        SearchScope::All => format!(
            "({CONTAINS_FN}(n.title, ?1) OR {CONTAINS_FN}(n.author, ?1)
              OR {CONTAINS_FN}(n.content, ?1) OR {any_tag})"
        ),
    }
}

impl NoteStore {
    /// Fills in each note's tag names, in import order.
    fn with_tags(&self, mut notes: Vec<StoredNote>) -> StoreResult<Vec<StoredNote>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT t.name FROM note_tags nt JOIN tags t ON t.id = nt.tag_id
             WHERE nt.note_id = ?1
             ORDER BY nt.position, t.id",
        )?;

        for note in &mut notes {
            note.tags = stmt
                .query_map([note.id], |row| row.get(0))?
                .collect::<Result<_, _>>()?;
        }

        Ok(notes)
    }
}

impl NoteRepository for NoteStore {
    fn has_ingested(&self, fingerprint: &Fingerprint) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM ingested_files WHERE fingerprint = ?1",
                [fingerprint],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn ingest(
        &mut self,
        fingerprint: &Fingerprint,
        filename: &str,
        records: &[NoteRecord],
    ) -> StoreResult<usize> {
        if self.has_ingested(fingerprint)? {
            return Err(StoreError::DuplicateFingerprint {
                fingerprint: fingerprint.clone(),
            });
        }

        let tx = self.transaction("ingest")?;

        for record in records {
            let id = insert_record(tx.conn(), record)?;
            debug!(id, title = %record.title, tags = record.tags.len(), "inserted note");
        }

        // Ledger row last: it marks the whole batch as done.
        record_ingested(tx.conn(), fingerprint, filename)?;
        tx.commit()?;

        info!(
            fingerprint = fingerprint.short(),
            filename,
            notes = records.len(),
            "ingested file"
        );
        Ok(records.len())
    }

    fn query_all(&self) -> StoreResult<Vec<StoredNote>> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes n {NEWEST_FIRST}");
        let notes = self
            .conn
            .prepare(&sql)?
            .query_map([], note_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        self.with_tags(notes)
    }

    fn query_by_id(&self, id: i64) -> StoreResult<Option<StoredNote>> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes n WHERE n.id = ?1");
        let note = self
            .conn
            .query_row(&sql, [id], note_from_row)
            .optional()?;

        match note {
            Some(note) => Ok(self.with_tags(vec![note])?.pop()),
            None => Ok(None),
        }
    }

    fn search(&self, scope: SearchScope, term: &str) -> StoreResult<Vec<StoredNote>> {
        if term.trim().is_empty() {
            return self.query_all();
        }

        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes n WHERE {} {NEWEST_FIRST}",
            scope_predicate(scope)
        );
        let notes = self
            .conn
            .prepare(&sql)?
            .query_map(params![term], note_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%scope, term, matches = notes.len(), "search");
        self.with_tags(notes)
    }

    fn all_tags(&self) -> StoreResult<Vec<TagWithCount>> {
        let tags: Vec<TagWithCount> = self
            .conn
            .prepare(
                "SELECT t.name, COUNT(nt.note_id)
                 FROM tags t LEFT JOIN note_tags nt ON nt.tag_id = t.id
                 GROUP BY t.id
                 ORDER BY t.name, t.id",
            )?
            .query_map([], |row| {
                Ok(TagWithCount::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                ))
            })?
            .collect::<Result<_, _>>()?;
        Ok(tags)
    }

    fn ingested_files(&self) -> StoreResult<Vec<IngestedFile>> {
        let files: Vec<IngestedFile> = self
            .conn
            .prepare(
                "SELECT fingerprint, filename, ingested_at FROM ingested_files
                 ORDER BY ingested_at, fingerprint",
            )?
            .query_map([], |row| {
                Ok(IngestedFile {
                    fingerprint: row.get(0)?,
                    filename: row.get(1)?,
                    ingested_at: row.get(2)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(files)
    }
}
