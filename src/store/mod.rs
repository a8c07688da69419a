//! Embedded note store: SQLite schema, ingestion, queries, and snapshots

mod error;
mod importer;
mod repository;
mod schema;
mod snapshot;
mod sqlite;

pub use error::{StoreError, StoreResult};
pub use importer::{ImportOutcome, import_document};
pub use repository::{IngestedFile, NoteRepository, StoreStats, TagWithCount};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use snapshot::{FORMAT_VERSION, MAGIC};
pub use sqlite::{NoteStore, Transaction};
