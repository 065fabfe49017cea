//! Error type for the command line front end.

use thiserror::Error;

use super::*;

/// Errors surfaced by `bookshelf` commands.
#[derive(Error, Debug)]
pub enum BookshelfdError {
  /// Failure inside the collection engine
  #[error(transparent)]
  Bookshelf(#[from] BookshelfError),

  /// Terminal prompt failure
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Terminal I/O failure
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A command was invoked with arguments it cannot act on
  #[error("{0}")]
  Usage(String),
}

/// Result alias for CLI operations.
pub type Result<T> = core::result::Result<T, BookshelfdError>;
