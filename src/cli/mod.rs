//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::SearchScope;
use output::OutputFormat;

/// hoard - a local archive for exported notebooks
#[derive(Parser, Debug)]
#[command(name = "hoard", version, about, long_about = None)]
pub struct Cli {
    /// Store file (overrides config file)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import one or more ENEX export files
    Import(ImportArgs),

    /// List all notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note by id
    Show(ShowArgs),

    /// Search notes by title, author, content or tag
    Search(SearchArgs),

    /// List all tags with note counts
    Tags(TagsArgs),

    /// List imported files
    Files(FilesArgs),

    /// Write a snapshot of the store to a file
    Export(ExportArgs),

    /// Replace the store with a snapshot file
    Restore(RestoreArgs),

    /// Discard every note, tag and imported-file record
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// ENEX files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: i64,

    /// Print the stored markup instead of plain text
    #[arg(long)]
    pub raw: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub term: String,

    /// Field to search
    #[arg(short, long = "by", default_value_t = SearchScope::All)]
    pub by: SearchScope,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `files` command
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Destination file for the snapshot
    pub output: PathBuf,
}

/// Arguments for the `restore` command
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Snapshot file produced by `export`
    pub input: PathBuf,
}

/// Arguments for the `reset` command
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Confirm that all data should be discarded
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_defaults_to_all_fields() {
        let cli = Cli::parse_from(["hoard", "search", "trip"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.by, SearchScope::All);
                assert_eq!(args.term, "trip");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn search_scope_parses_from_flag() {
        let cli = Cli::parse_from(["hoard", "search", "--by", "tag", "travel"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.by, SearchScope::Tag),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_search_scope_is_rejected() {
        let result = Cli::try_parse_from(["hoard", "search", "--by", "body", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from(["hoard", "ls", "-vv", "--store", "/tmp/x.hoard"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/x.hoard")));
    }

    #[test]
    fn import_requires_a_file() {
        assert!(Cli::try_parse_from(["hoard", "import"]).is_err());
    }
}
