//! Custom SQL functions registered on every store connection.

use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;

/// Name of the case-insensitive containment function.
pub(crate) const CONTAINS_FN: &str = "hoard_contains";

/// Registers `hoard_contains(haystack, needle)`.
///
/// True when `haystack` contains `needle` after Unicode lowercasing both.
/// SQLite's own `LIKE` and `lower()` only fold ASCII.
pub(crate) fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        CONTAINS_FN,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack = ctx.get::<Option<String>>(0)?;
            let needle = ctx.get::<Option<String>>(1)?;
            Ok(match (haystack, needle) {
                (Some(haystack), Some(needle)) => contains_folded(&haystack, &needle),
                _ => false,
            })
        },
    )
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
