//! NoteRepository trait and result types.

use crate::domain::{NoteRecord, SearchScope, StoredNote, Timestamp};
use crate::infra::Fingerprint;
use crate::store::StoreResult;
use serde::{Deserialize, Serialize};

// ===========================================
// TagWithCount
// ===========================================

/// A tag with the number of notes it is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagWithCount {
    name: String,
    count: u32,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of notes carrying this tag.
    pub fn count(&self) -> u32 {
        self.count
    }
}

// ===========================================
// IngestedFile
// ===========================================

/// A row of the ingestion ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestedFile {
    pub fingerprint: Fingerprint,
    /// Original file name; informational only.
    pub filename: String,
    pub ingested_at: Timestamp,
}

// ===========================================
// StoreStats
// ===========================================

/// Row counts for each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub notes: u64,
    pub tags: u64,
    pub links: u64,
    pub files: u64,
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Repository trait for the note store.
///
/// Read results are always ordered by `updated_at` descending, with ties
/// broken by id descending (most recently inserted first).
pub trait NoteRepository {
    /// Returns true if a file with this fingerprint has been ingested.
    fn has_ingested(&self, fingerprint: &Fingerprint) -> StoreResult<bool>;

    /// Ingests a batch of records atomically and records the fingerprint.
    ///
    /// Returns the number of notes inserted. Fails with
    /// `StoreError::DuplicateFingerprint` if the fingerprint is already in the
    /// ledger; on any failure the store is left unchanged.
    fn ingest(
        &mut self,
        fingerprint: &Fingerprint,
        filename: &str,
        records: &[NoteRecord],
    ) -> StoreResult<usize>;

    /// Lists every note.
    fn query_all(&self) -> StoreResult<Vec<StoredNote>>;

    /// Retrieves a single note by id.
    fn query_by_id(&self, id: i64) -> StoreResult<Option<StoredNote>>;

    /// Case-insensitive substring search within the given scope.
    ///
    /// A blank term matches every note.
    fn search(&self, scope: SearchScope, term: &str) -> StoreResult<Vec<StoredNote>>;

    /// Returns all tags with note counts, ordered by name.
    fn all_tags(&self) -> StoreResult<Vec<TagWithCount>>;

    /// Returns the ingestion ledger, oldest first.
    fn ingested_files(&self) -> StoreResult<Vec<IngestedFile>>;
}
