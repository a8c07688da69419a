//! Metadata command handlers (tags, files).

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, truncate_str};
use crate::cli::output::{FileListing, Output, OutputFormat, TagListing};
use crate::cli::{FilesArgs, TagsArgs};
use crate::store::NoteRepository;

pub fn handle_tags(args: &TagsArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let tags = store.all_tags().context("failed to list tags")?;

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for t in &tags {
                    println!("{} ({})", t.name(), t.count());
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags.iter().map(TagListing::from).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn handle_files(args: &FilesArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let files = store
        .ingested_files()
        .context("failed to list imported files")?;

    match args.format {
        OutputFormat::Human => {
            if files.is_empty() {
                println!("No files imported.");
            } else {
                println!("{:<12}  {:<40}  {:>20}", "Fingerprint", "File", "Imported");
                for f in &files {
                    println!(
                        "{:<12}  {:<40}  {:>20}",
                        f.fingerprint.short(),
                        truncate_str(&f.filename, 40),
                        f.ingested_at.to_string()
                    );
                }
                println!();
                println!("{} file(s)", files.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<FileListing> = files.iter().map(FileListing::from).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
