//! Import command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, save_store};
use crate::cli::ImportArgs;
use crate::infra::read_bytes;
use crate::store::{ImportOutcome, import_document};

pub fn handle_import(args: &ImportArgs, store_path: &Path) -> Result<()> {
    let mut store = open_store(store_path)?;

    for path in &args.files {
        let filename = display_name(path);
        let bytes = read_bytes(path)
            .with_context(|| format!("failed to read import file: {}", path.display()))?;

        let outcome = import_document(&mut store, &filename, &bytes)
            .with_context(|| format!("failed to import {}", path.display()))?;

        match outcome {
            ImportOutcome::Imported { notes, .. } => {
                // Persisted before the next file is read.
                save_store(&store, store_path)?;
                println!("Imported {} notes from {}", notes, filename);
            }
            ImportOutcome::AlreadyPresent { .. } => {
                println!("{} has already been imported", filename);
            }
        }
    }

    let stats = store.stats().context("failed to count notes")?;
    println!("{} notes available", stats.notes);
    Ok(())
}

/// Name recorded in the ledger: the file name without its directory.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
