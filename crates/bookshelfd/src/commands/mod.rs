//! Subcommands of the `bookshelf` CLI.
//!
//! Each command takes the [`UserInteraction`] it replies through and the engine it works on.
//! Outside of [`shell`], every invocation is a fresh process, so search results and the
//! selection only last for the command that produced them.

use super::*;

pub mod add;
pub mod list;
pub mod progress;
pub mod remove;
pub mod search;
pub mod shell;
pub mod show;

pub use add::{add, AddArgs};
pub use list::{list, stats, wishlist};
pub use progress::{progress, status};
pub use remove::{remove, RemoveArgs};
pub use search::{search, SearchArgs};
pub use shell::shell;
pub use show::show;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Search the catalog and list the results
  Search(SearchArgs),

  /// Search the catalog and save one of the results
  Add(AddArgs),

  /// Show the details of a book in your library or wishlist
  Show {
    /// Book id
    id: String,
  },

  /// Remove a book from your library or wishlist
  Remove(RemoveArgs),

  /// List your library
  List {
    /// Which entries to show (all, reading, completed)
    #[arg(long, short, default_value_t = LibraryFilter::All)]
    filter: LibraryFilter,
  },

  /// List your wishlist
  Wishlist,

  /// Show library, reading, and wishlist counts
  Stats,

  /// Set the reading progress of a library entry
  Progress {
    /// Book id
    id:      String,
    /// Percentage read, 0 to 100
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    percent: u8,
  },

  /// Mark a library entry as reading or completed
  Status {
    /// Book id
    id:     String,
    /// New status (reading, completed)
    status: ReadingStatus,
  },

  /// Interactive session that keeps search results between commands
  Shell,
}

/// Reports the outcome of a [`Mutation`].
///
/// `done` is shown when the collection changed, `unchanged` when it did not. A persistence
/// failure is shown as a warning after either.
pub(crate) fn report<I: UserInteraction>(
  interaction: &I,
  mutation: Mutation,
  done: &str,
  unchanged: &str,
) -> Result<()> {
  if mutation.applied {
    interaction.reply(ResponseContent::Success(done))?;
  } else {
    interaction.reply(ResponseContent::Info(unchanged))?;
  }
  if let Some(warning) = mutation.warning {
    interaction.reply(ResponseContent::Warning(&format!(
      "{warning}. The change may not survive a restart."
    )))?;
  }
  Ok(())
}
