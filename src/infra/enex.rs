//! Parser for ENEX export bundles.
//!
//! An export is an XML document (root `en-export`) holding any number of
//! `note` elements. Each note exposes its fields as child or nested elements:
//! `title`, `content` (usually a CDATA section of ENML markup), `author`
//! (normally under `note-attributes`), `created`, `updated`, and zero or more
//! `tag` elements.

use super::depth::{MAX_DEPTH, exceeds_depth};
use crate::domain::{DEFAULT_AUTHOR, DEFAULT_TITLE, NoteRecord};
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;
use tracing::{debug, warn};

/// Root element name of an export bundle.
const EXPORT_ROOT: &str = "en-export";

/// Errors that make a whole document unusable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("import is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("import is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("import nests elements deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Parses an export document into note records.
///
/// The document as a whole must be UTF-8, well-formed, and nested no deeper
/// than [`MAX_DEPTH`] elements; otherwise nothing is returned. Individual notes are read leniently: missing fields fall back to
/// defaults, blank tags are dropped, and dates are passed through untouched.
pub fn parse(document: &[u8]) -> Result<Vec<NoteRecord>, ParseError> {
    let text = std::str::from_utf8(document)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if exceeds_depth(text, MAX_DEPTH) {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH });
    }
    let doc = Document::parse_with_options(text, dtd_options())?;

    let root = doc.root_element();
    if root.tag_name().name() != EXPORT_ROOT {
        warn!(
            root = root.tag_name().name(),
            "document root is not {EXPORT_ROOT}; reading note elements anyway"
        );
    }

    let records: Vec<NoteRecord> = doc
        .descendants()
        .filter(|node| is_element_named(node, "note"))
        .map(parse_note)
        .collect();

    debug!(notes = records.len(), "parsed export document");
    Ok(records)
}

/// Export documents carry a DOCTYPE declaration, which roxmltree rejects by default.
pub(crate) fn dtd_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

fn parse_note(note: Node<'_, '_>) -> NoteRecord {
    let title = field(note, "title")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let author = field(note, "author")
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    let content = field(note, "content").unwrap_or_default();

    let created = field(note, "created").map(|d| d.trim().to_string());
    let updated = field(note, "updated").map(|d| d.trim().to_string());

    let tags = note
        .descendants()
        .filter(|node| is_element_named(node, "tag"))
        .map(text_content)
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    NoteRecord {
        title,
        content,
        author,
        created,
        updated,
        tags,
    }
}

/// Text of the first descendant element with the given name.
fn field(note: Node<'_, '_>, name: &str) -> Option<String> {
    note.descendants()
        .skip(1)
        .find(|node| is_element_named(node, name))
        .map(text_content)
}

fn is_element_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenated text of all descendant text and CDATA nodes.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
