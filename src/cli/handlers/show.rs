//! Show command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::ShowArgs;
use crate::cli::output::{NoteDetail, Output, OutputFormat};
use crate::domain::StoredNote;
use crate::infra::to_plain_text;
use crate::store::NoteRepository;

pub fn handle_show(args: &ShowArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;

    let Some(note) = store
        .query_by_id(args.id)
        .with_context(|| format!("failed to look up note {}", args.id))?
    else {
        bail!("note not found: {}", args.id);
    };

    let detail = note_detail(note, args.raw);

    match args.format {
        OutputFormat::Human => {
            println!("# {}", detail.title);
            println!();
            println!(
                "ID: {}  Author: {}  Created: {}  Updated: {}",
                detail.id,
                detail.author,
                detail.created.format("%Y-%m-%d %H:%M"),
                detail.updated.format("%Y-%m-%d %H:%M")
            );

            if !detail.tags.is_empty() {
                println!("Tags: {}", detail.tags.join(", "));
            }

            println!();

            if !detail.content.is_empty() {
                println!("{}", detail.content);
            }
        }
        OutputFormat::Json => {
            let out = Output::new(detail);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

/// Builds the display form of a note, rendering markup unless `raw` is set.
pub(crate) fn note_detail(note: StoredNote, raw: bool) -> NoteDetail {
    let content = if raw {
        note.content
    } else {
        to_plain_text(&note.content)
    };

    NoteDetail {
        id: note.id,
        title: note.title,
        author: note.author,
        created: note.created_at,
        updated: note.updated_at,
        tags: note.tags,
        content,
    }
}
