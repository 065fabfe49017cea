//! Error types for the bookshelf library.
//!
//! This module provides a single error type that covers every failure mode of the
//! collection engine and its collaborators:
//! - Search provider failures
//! - Selection sequencing mistakes
//! - Persistence failures
//! - Input parsing
//!
//! None of these are fatal to the engine: after any error the in-memory collections are still
//! consistent, though possibly newer than what is on disk.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bookshelf::{
//!   error::BookshelfError, retriever::GoogleBooks, store::MemoryStore, Bookshelf,
//! };
//!
//! # async fn example() -> Result<(), BookshelfError> {
//! let mut shelf = Bookshelf::open(MemoryStore::default(), Arc::new(GoogleBooks::default()))?;
//! match shelf.search("dune", "all", Default::default()).await {
//!   Err(BookshelfError::SearchFailed(e)) => println!("Search failed, keeping old results: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(_) => println!("Results: {}", shelf.search_view().len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`bookshelf`](crate) crate.
pub type Result<T> = core::result::Result<T, BookshelfError>;

/// Errors that can occur when working with the bookshelf library.
#[derive(Error, Debug)]
pub enum BookshelfError {
  /// The search provider call failed.
  ///
  /// The previous search results are left untouched and nothing is retried. The wrapped error
  /// is the underlying network or API failure.
  #[error("Search failed: {0}")]
  SearchFailed(#[source] Box<BookshelfError>),

  /// An operation that acts on the selected book was called with nothing selected.
  #[error("No book is selected")]
  NoSelection,

  /// Writing a collection to the store failed.
  ///
  /// The in-memory change that preceded the write has already been applied and is not rolled
  /// back, so this is reported as a warning rather than a failure of the operation.
  #[error("Failed to persist `{key}`: {source}")]
  PersistFailed {
    /// Store key that could not be written
    key:    String,
    /// Underlying store failure
    #[source]
    source: Box<BookshelfError>,
  },

  /// No library entry exists with the given id.
  #[error("No library entry with id `{0}`")]
  NotFound(String),

  /// The search query was empty after trimming whitespace.
  #[error("Search query must not be empty")]
  InvalidQuery,

  /// A textual value could not be parsed into one of the library's enums.
  #[error("Invalid value: {0}")]
  InvalidValue(String),

  /// A network request to the search provider failed.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The search provider answered with an error or an unreadable body.
  #[error("API error: {0}")]
  ApiError(String),

  /// A URL for the search provider could not be built.
  #[error(transparent)]
  Url(#[from] url::ParseError),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// Encoding or decoding JSON failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// Generic configuration problem.
  #[error("{0}")]
  Config(String),
}

impl BookshelfError {
  /// Wraps a provider failure as [`BookshelfError::SearchFailed`], leaving it alone if it is
  /// already one.
  pub fn into_search_failure(self) -> Self {
    match self {
      err @ Self::SearchFailed(_) => err,
      err => Self::SearchFailed(Box::new(err)),
    }
  }
}
