//! Command line interface for the bookshelf collection engine.
//!
//! This crate provides a CLI tool for curating books with the `bookshelf` library.
//! It supports operations like:
//! - Searching the catalog
//! - Saving books to the library or wishlist
//! - Tracking reading status and progress
//! - Browsing the library, wishlist, and counters
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! bookshelf search "dune" --category fiction --sort newest
//!
//! # Save the second result as currently reading
//! bookshelf add "dune" --pick 2 --status reading
//!
//! # Update progress and browse
//! bookshelf progress abc123 40
//! bookshelf list --filter reading
//!
//! # Work interactively, keeping search results between commands
//! bookshelf shell
//! ```
//!
//! Output is colored, destructive operations ask for confirmation, and the `-v` flag raises
//! the logging level.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, sync::Arc};

use bookshelf::{
  book::{Collection, ReadingStatus, SaveTarget},
  error::BookshelfError,
  retriever::{GoogleBooks, SortOrder, ALL_CATEGORIES},
  shelf::{Mutation, SearchStatus},
  store::Database,
  view::{Card, Detail, LibraryFilter, Stats},
  Bookshelf, Config,
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// The engine as wired up by the CLI.
pub type Shelf = Bookshelf<Database>;

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Search, shelve, and track the books you read")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the database file. If not specified, uses the path from the configuration file,
  /// which defaults to the platform-specific data directory.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// Path to the configuration file. Defaults to the platform-specific config directory.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used (0-4)
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Loads the configuration and opens the engine on the configured database.
fn open_shelf(cli: &Cli) -> Result<(Shelf, Config)> {
  let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
  let config = Config::load(&config_path)?;
  let db_path = cli.path.clone().unwrap_or_else(|| config.database_path.clone());
  trace!("Using database at: {}", db_path.display());

  let client = GoogleBooks::from_config(&config)?;
  let shelf = Bookshelf::open(Database::open(&db_path)?, Arc::new(client))?;
  Ok((shelf, config))
}

/// Entry point for the bookshelf CLI application
///
/// Parses arguments, sets up logging, opens the engine, and runs the requested command.
/// Failures are reported through the same colored output as everything else and end the
/// process with a non-zero exit code.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let outcome = match open_shelf(&cli) {
    Ok((mut shelf, config)) => run(&cli, &mut shelf, &config).await,
    Err(e) => Err(e),
  };

  if let Err(e) = outcome {
    debug!("Command failed: {e:?}");
    cli.reply(ResponseContent::Error(&e))?;
    std::process::exit(1);
  }
  Ok(())
}

/// Dispatches the parsed subcommand.
async fn run(cli: &Cli, shelf: &mut Shelf, config: &Config) -> Result<()> {
  match cli.command.clone() {
    Commands::Search(args) => search(cli, shelf, config, args).await,
    Commands::Add(args) => add(cli, shelf, config, args).await,
    Commands::Show { id } => show(cli, shelf, &id),
    Commands::Remove(args) => remove(cli, shelf, args),
    Commands::List { filter } => list(cli, shelf, filter),
    Commands::Wishlist => wishlist(cli, shelf),
    Commands::Stats => stats(cli, shelf),
    Commands::Progress { id, percent } => progress(cli, shelf, &id, percent),
    Commands::Status { id, status: new_status } => status(cli, shelf, &id, new_status),
    Commands::Shell => shell(cli, shelf, config).await,
  }
}
