//! Core types: NoteRecord, StoredNote, Timestamp, SearchScope

mod note;
mod scope;
mod timestamp;

pub use note::{DEFAULT_AUTHOR, DEFAULT_TITLE, NoteRecord, StoredNote};
pub use scope::{ParseScopeError, SearchScope};
pub use timestamp::{Normalized, ParseTimestampError, Timestamp, normalize};
