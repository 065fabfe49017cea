//! Book search, shelving, and reading-progress tracking.
//!
//! `bookshelf` is a library for curating a personal collection of books, providing:
//!
//! - Catalog search through a pluggable [`retriever::SearchClient`]
//! - A durable library with reading status and progress
//! - A separate durable wishlist
//! - Render-ready views over the current collection state
//!
//! # Features
//!
//! - **Explicit engine**: all state lives in a [`Bookshelf`] value that the caller constructs and
//!   owns; nothing is global
//! - **Pluggable storage**: anything implementing [`store::Store`] can hold the collections,
//!   with SQLite ([`store::Database`]) and in-memory ([`store::MemoryStore`]) adapters included
//! - **Tolerant restore**: missing or corrupt stored collections come back empty instead of
//!   failing
//! - **Out-of-order safe search**: superseded search completions never overwrite newer results
//!
//! # Getting Started
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bookshelf::{
//!   book::SaveTarget,
//!   retriever::{GoogleBooks, SortOrder},
//!   store::Database,
//!   view::LibraryFilter,
//!   Bookshelf,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let store = Database::open(Database::default_path())?;
//!   let mut shelf = Bookshelf::open(store, Arc::new(GoogleBooks::default()))?;
//!
//!   shelf.search("dune", "all", SortOrder::Relevance).await?;
//!   let first = shelf.search_view()[0].id.clone();
//!
//!   shelf.select_for_detail(&first);
//!   shelf.save_selected(SaveTarget::Reading, 0)?;
//!
//!   for card in shelf.library_view(LibraryFilter::Reading) {
//!     println!("{} ({})", card.title, card.authors);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`book`]: Catalog items and the entries stored in each collection
//! - [`state`]: The in-memory collection aggregate and its invariants
//! - [`shelf`]: The engine wiring state, storage, and search together
//! - [`codec`]: Blob encoding for durable collections
//! - [`store`]: Key/value persistence adapters
//! - [`retriever`]: Search provider clients
//! - [`view`]: Pure projections for presentation
//! - [`configuration`]: On-disk configuration
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
  sync::Arc,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod book;
pub mod codec;
pub mod configuration;
pub mod error;
pub mod retriever;
pub mod shelf;
pub mod state;
pub mod store;
pub mod view;

pub use crate::{configuration::Config, shelf::Bookshelf};
use crate::{
  book::*,
  error::*,
  retriever::{SearchClient, SearchRequest, SortOrder},
  state::CollectionState,
  store::Store,
  view::*,
};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use bookshelf::{prelude::*, store::MemoryStore};
///
/// fn example(store: &mut MemoryStore) -> Result<(), BookshelfError> {
///   store.set("bookshelf_library", "[]")?;
///   Ok(())
/// }
/// ```
///
/// # Contents
///
/// - [`Store`]: Trait implemented by persistence adapters
/// - [`SearchClient`]: Trait implemented by catalog providers
/// - [`BookshelfError`]: Core error type for the library
pub mod prelude {
  pub use crate::{error::BookshelfError, retriever::SearchClient, store::Store};
}
