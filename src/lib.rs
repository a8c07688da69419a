//! hoard - a local archive for exported notebooks

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_export, handle_files, handle_import, handle_list, handle_reset, handle_restore,
        handle_search, handle_show, handle_tags,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "hoard", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let store_path = config.store_path(cli.store.as_ref());
    tracing::debug!(store = %store_path.display(), "resolved store path");

    match &cli.command {
        Command::Import(args) => handle_import(args, &store_path),
        Command::List(args) => handle_list(args, &store_path),
        Command::Show(args) => handle_show(args, &store_path),
        Command::Search(args) => handle_search(args, &store_path),
        Command::Tags(args) => handle_tags(args, &store_path),
        Command::Files(args) => handle_files(args, &store_path),
        Command::Export(args) => handle_export(args, &store_path),
        Command::Restore(args) => handle_restore(args, &store_path),
        Command::Reset(args) => handle_reset(args, &store_path),
        Command::Completions(_) => Ok(()),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "hoard=warn",
        1 => "hoard=info",
        2 => "hoard=debug",
        _ => "hoard=trace",
    }
}
