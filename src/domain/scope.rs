//! Search scopes: which note fields a search term is matched against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The field (or fields) a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    Title,
    Author,
    Content,
    /// Matches if any of the note's tag names contains the term.
    Tag,
    /// Title, author, content, or any tag.
    #[default]
    All,
}

/// Error returned when parsing an unknown scope name.
#[derive(Debug, Clone)]
pub struct ParseScopeError(String);

impl fmt::Display for ParseScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search scope '{}': expected title, author, content, tag, or all",
            self.0
        )
    }
}

impl std::error::Error for ParseScopeError {}

impl SearchScope {
    /// All scopes, in display order.
    pub const ALL: [SearchScope; 5] = [
        SearchScope::Title,
        SearchScope::Author,
        SearchScope::Content,
        SearchScope::Tag,
        SearchScope::All,
    ];

    /// Returns the lowercase scope name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::Title => "title",
            SearchScope::Author => "author",
            SearchScope::Content => "content",
            SearchScope::Tag => "tag",
            SearchScope::All => "all",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == wanted)
            .ok_or_else(|| ParseScopeError(s.to_string()))
    }
}
