//! Export, restore and reset command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_store, save_store};
use crate::cli::{ExportArgs, ResetArgs, RestoreArgs};
use crate::infra::{read_bytes, write_atomic};
use crate::store::NoteStore;

pub fn handle_export(args: &ExportArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let blob = store.export_blob().context("failed to serialize store")?;

    write_atomic(&args.output, &blob)
        .with_context(|| format!("failed to write snapshot to {}", args.output.display()))?;

    let stats = store.stats().context("failed to count notes")?;
    println!(
        "Exported {} notes ({} bytes) to {}",
        stats.notes,
        blob.len(),
        args.output.display()
    );
    Ok(())
}

pub fn handle_restore(args: &RestoreArgs, store_path: &Path) -> Result<()> {
    let blob = read_bytes(&args.input)
        .with_context(|| format!("failed to read snapshot: {}", args.input.display()))?;

    // Validated in full before the active store file is replaced.
    let store = NoteStore::import_blob(&blob)
        .with_context(|| format!("invalid snapshot: {}", args.input.display()))?;

    save_store(&store, store_path)?;

    let stats = store.stats().context("failed to count notes")?;
    println!(
        "Restored {} notes from {}",
        stats.notes,
        args.input.display()
    );
    Ok(())
}

pub fn handle_reset(args: &ResetArgs, store_path: &Path) -> Result<()> {
    if !args.yes {
        bail!("refusing to discard all notes without --yes");
    }

    let store = open_store(store_path)?;
    let store = store.reset().context("failed to reset store")?;
    save_store(&store, store_path)?;

    println!("Store reset: 0 notes available");
    Ok(())
}
