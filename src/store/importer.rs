//! Import pipeline: fingerprint, ledger check, parse, ingest.

use crate::infra::{Fingerprint, parse};
use crate::store::{NoteRepository, StoreError, StoreResult};
use tracing::info;

/// What happened to an import document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The document was new; `notes` notes were added.
    Imported {
        fingerprint: Fingerprint,
        notes: usize,
    },
    /// Byte-identical content was imported before; nothing changed.
    AlreadyPresent { fingerprint: Fingerprint },
}

impl ImportOutcome {
    /// Returns the fingerprint of the imported bytes.
    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            ImportOutcome::Imported { fingerprint, .. } => fingerprint,
            ImportOutcome::AlreadyPresent { fingerprint } => fingerprint,
        }
    }

    /// Returns the number of notes added (zero when already present).
    pub fn notes_added(&self) -> usize {
        match self {
            ImportOutcome::Imported { notes, .. } => *notes,
            ImportOutcome::AlreadyPresent { .. } => 0,
        }
    }
}

/// Imports a raw export document into the repository.
///
/// Documents whose fingerprint is already in the ledger are not parsed at
/// all. A duplicate detected by the store itself is reported the same way.
///
/// # Errors
///
/// Returns `StoreError::MalformedImport` if the document cannot be parsed;
/// the repository is unchanged in that case.
pub fn import_document<R: NoteRepository>(
    repo: &mut R,
    filename: &str,
    bytes: &[u8],
) -> StoreResult<ImportOutcome> {
    let fingerprint = Fingerprint::compute(bytes);

    if repo.has_ingested(&fingerprint)? {
        info!(filename, fingerprint = fingerprint.short(), "already imported; skipping");
        return Ok(ImportOutcome::AlreadyPresent { fingerprint });
    }

    let records = parse(bytes)?;

    match repo.ingest(&fingerprint, filename, &records) {
        Ok(notes) => Ok(ImportOutcome::Imported { fingerprint, notes }),
        Err(StoreError::DuplicateFingerprint { fingerprint }) => {
            Ok(ImportOutcome::AlreadyPresent { fingerprint })
        }
        Err(e) => Err(e),
    }
}
