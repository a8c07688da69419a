//! Note types: records produced by the import parser and notes read back from the store.

use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};

/// Title used when an imported note has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when an imported note has none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// A note decoded from an export document, not yet stored.
///
/// Dates are kept exactly as they appeared in the document; they are
/// normalized when the record is ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub tags: Vec<String>,
}

impl NoteRecord {
    /// Creates a record with the given title and defaults for everything else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the raw created and updated dates.
    pub fn dates(mut self, created: impl Into<String>, updated: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self.updated = Some(updated.into());
        self
    }

    /// Sets the tags, in display order.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for NoteRecord {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            created: None,
            updated: None,
            tags: Vec::new(),
        }
    }
}

/// A note as held by the store, with its tag names in import order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredNote {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_record_uses_placeholder_title_and_author() {
        let record = NoteRecord::default();
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.author, "Unknown");
        assert_eq!(record.content, "");
        assert!(record.tags.is_empty());
        assert!(record.created.is_none());
    }

    #[test]
    fn record_builder_sets_fields() {
        let record = NoteRecord::new("Trip")
            .author("Ada")
            .content("<en-note>hi</en-note>")
            .dates("20240115T120000Z", "20240116T090000Z")
            .tags(["Travel", "2024"]);

        assert_eq!(record.title, "Trip");
        assert_eq!(record.author, "Ada");
        assert_eq!(record.created.as_deref(), Some("20240115T120000Z"));
        assert_eq!(record.updated.as_deref(), Some("20240116T090000Z"));
        assert_eq!(record.tags, vec!["Travel", "2024"]);
    }

    #[test]
    fn stored_note_serializes_timestamps_canonically() {
        let note = StoredNote {
            id: 7,
            title: "Trip".into(),
            content: String::new(),
            author: "Unknown".into(),
            created_at: "2024-01-15T12:00:00Z".parse().unwrap(),
            updated_at: "2024-01-16T09:00:00Z".parse().unwrap(),
            tags: vec!["Travel".into()],
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["created_at"], "2024-01-15T12:00:00Z");
        assert_eq!(json["tags"][0], "Travel");
    }
}
