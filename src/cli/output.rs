//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{StoredNote, Timestamp};
use crate::store::{IngestedFile, TagWithCount};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub updated: Timestamp,
    pub tags: Vec<String>,
}

impl From<&StoredNote> for NoteListing {
    fn from(note: &StoredNote) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            author: note.author.clone(),
            updated: note.updated_at,
            tags: note.tags.clone(),
        }
    }
}

/// A full note, with content either raw or rendered.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created: Timestamp,
    pub updated: Timestamp,
    pub tags: Vec<String>,
    pub content: String,
}

/// A tag with its note count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    pub count: u32,
}

impl From<&TagWithCount> for TagListing {
    fn from(tag: &TagWithCount) -> Self {
        Self {
            name: tag.name().to_string(),
            count: tag.count(),
        }
    }
}

/// An imported file in ledger output.
#[derive(Debug, Serialize)]
pub struct FileListing {
    pub fingerprint: String,
    pub filename: String,
    pub imported: Timestamp,
}

impl From<&IngestedFile> for FileListing {
    fn from(file: &IngestedFile) -> Self {
        Self {
            fingerprint: file.fingerprint.to_string(),
            filename: file.filename.clone(),
            imported: file.ingested_at,
        }
    }
}
