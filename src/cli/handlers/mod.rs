//! Command handlers for the CLI.

mod import;
mod list;
mod metadata;
mod show;
mod snapshot;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::domain::StoredNote;
use crate::infra::{read_snapshot, write_atomic};
use crate::store::NoteStore;

// Re-export public items
pub use import::handle_import;
pub use list::{handle_list, handle_search};
pub use metadata::{handle_files, handle_tags};
pub use show::handle_show;
pub use snapshot::{handle_export, handle_reset, handle_restore};

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the store file, or starts an empty store if there is none yet.
pub(crate) fn open_store(store_path: &Path) -> Result<NoteStore> {
    let bytes = read_snapshot(store_path)
        .with_context(|| format!("failed to read store at {}", store_path.display()))?;

    match bytes {
        Some(bytes) => NoteStore::import_blob(&bytes)
            .with_context(|| format!("failed to load store at {}", store_path.display())),
        None => {
            debug!(path = %store_path.display(), "no store file; starting empty");
            NoteStore::new().context("failed to create store")
        }
    }
}

/// Writes the whole store to its file, replacing the previous contents atomically.
pub(crate) fn save_store(store: &NoteStore, store_path: &Path) -> Result<()> {
    let blob = store.export_blob().context("failed to serialize store")?;
    write_atomic(store_path, &blob)
        .with_context(|| format!("failed to write store to {}", store_path.display()))?;
    debug!(path = %store_path.display(), bytes = blob.len(), "saved store");
    Ok(())
}

/// Prints the standard note table followed by a count line.
pub(crate) fn print_note_table(notes: &[StoredNote]) {
    println!("{:>6}  {:<40}  {:<20}  {:>10}", "ID", "Title", "Author", "Updated");
    println!(
        "{:>6}  {:<40}  {:<20}  {:>10}",
        "------",
        "----------------------------------------",
        "--------------------",
        "----------"
    );

    for note in notes {
        println!(
            "{:>6}  {:<40}  {:<20}  {:>10}",
            note.id,
            truncate_str(&note.title, 40),
            truncate_str(&note.author, 20),
            note.updated_at.format("%Y-%m-%d")
        );
    }

    println!();
    println!("{} note(s)", notes.len());
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
