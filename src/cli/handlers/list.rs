//! List and search command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, print_note_table};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::StoredNote;
use crate::store::NoteRepository;

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let notes = store.query_all().context("failed to list notes")?;

    print_notes(&notes, args.format, "No notes found.")
}

pub fn handle_search(args: &SearchArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let notes = store
        .search(args.by, &args.term)
        .with_context(|| format!("search failed for term: {}", args.term))?;

    print_notes(&notes, args.format, "No matching notes.")
}

fn print_notes(notes: &[StoredNote], format: OutputFormat, empty_message: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{}", empty_message);
            } else {
                print_note_table(notes);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
