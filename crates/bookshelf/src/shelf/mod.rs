//! The collection state engine.
//!
//! [`Bookshelf`] owns a [`CollectionState`], the [`Store`] it persists to, and the
//! [`SearchClient`] it searches with. Every operation follows the same contract: mutate the
//! in-memory state, persist the durable collections synchronously if they changed (or might
//! have), then let the caller re-derive whichever views it shows.
//!
//! # Persistence failures
//!
//! A failed store write never undoes the in-memory change. Mutating operations return a
//! [`Mutation`] whose `warning` carries the [`BookshelfError::PersistFailed`] so the caller can
//! tell the user their change may not survive a restart.
//!
//! # Searching without blocking
//!
//! [`Bookshelf::search`] is the simple path. When other operations must keep running while a
//! provider call is in flight, split it up:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use bookshelf::{retriever::{GoogleBooks, SortOrder}, store::MemoryStore, Bookshelf};
//! # async fn example() -> bookshelf::error::Result<()> {
//! let mut shelf = Bookshelf::open(MemoryStore::new(), Arc::new(GoogleBooks::default()))?;
//!
//! let pending = shelf.begin_search("dune", "all", SortOrder::Relevance)?;
//! // `pending` does not borrow `shelf`, so this is fine while the search runs.
//! let stats = shelf.stats();
//! let outcome = pending.run().await;
//! shelf.finish_search(outcome)?;
//! # Ok(())
//! # }
//! ```
//!
//! Each search is numbered when it begins. A completion that arrives after a newer search has
//! begun is discarded, so results from an older query can never overwrite a newer one.

use super::*;

mod search;

pub use self::search::{PendingSearch, SearchOutcome, SearchStatus};

/// Result of an operation that may change a durable collection.
#[derive(Debug)]
#[must_use]
pub struct Mutation {
  /// Whether the collection actually changed (`false` for duplicate inserts and missing ids)
  pub applied: bool,
  /// Set when the change could not be written to the store
  pub warning: Option<BookshelfError>,
}

/// The collection state engine.
pub struct Bookshelf<S: Store> {
  /// Library, wishlist, search results, and selection
  state:           CollectionState,
  /// Where the library and wishlist are persisted
  store:           S,
  /// Catalog used by searches
  client:          Arc<dyn SearchClient>,
  /// Number of the most recently begun search
  search_sequence: u64,
}

impl<S: Store + std::fmt::Debug> std::fmt::Debug for Bookshelf<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Bookshelf")
      .field("state", &self.state)
      .field("store", &self.store)
      .field("search_sequence", &self.search_sequence)
      .finish_non_exhaustive()
  }
}

impl<S: Store> Bookshelf<S> {
  /// Creates an engine with empty collections. Call [`Bookshelf::restore`] to load the store.
  pub fn new(store: S, client: Arc<dyn SearchClient>) -> Self {
    Self { state: CollectionState::default(), store, client, search_sequence: 0 }
  }

  /// Creates an engine and restores its collections from `store`.
  pub fn open(store: S, client: Arc<dyn SearchClient>) -> Result<Self> {
    let mut shelf = Self::new(store, client);
    shelf.restore()?;
    Ok(shelf)
  }

  /// Loads the library and wishlist from the store.
  ///
  /// Missing or unreadable blobs yield empty collections. Search results and the selection are
  /// cleared. Returns the fresh [`Stats`].
  ///
  /// # Errors
  ///
  /// Only a failure of the store itself to answer a read is reported.
  pub fn restore(&mut self) -> Result<Stats> {
    let library = self.store.get(codec::LIBRARY_KEY)?;
    let wishlist = self.store.get(codec::WISHLIST_KEY)?;

    self.state = CollectionState::from_collections(
      codec::decode(library.as_deref()),
      codec::decode(wishlist.as_deref()),
    );

    let stats = self.stats();
    debug!(
      "Restored {} library and {} wishlist entries",
      stats.total_library, stats.wishlist_count
    );
    Ok(stats)
  }

  /// Runs a search and replaces the search results with its answer.
  ///
  /// # Errors
  ///
  /// - [`BookshelfError::InvalidQuery`] if `query` is blank; the provider is not called
  /// - [`BookshelfError::SearchFailed`] if the provider fails; the previous results are kept
  pub async fn search(
    &mut self,
    query: &str,
    category: &str,
    sort: SortOrder,
  ) -> Result<SearchStatus> {
    let pending = self.begin_search(query, category, sort)?;
    let outcome = pending.run().await;
    self.finish_search(outcome)
  }

  /// Starts a search without borrowing the engine while it runs.
  ///
  /// Beginning a search supersedes every search begun before it.
  pub fn begin_search(
    &mut self,
    query: &str,
    category: &str,
    sort: SortOrder,
  ) -> Result<PendingSearch> {
    let request = SearchRequest::new(query, category, sort)?;
    self.search_sequence += 1;
    trace!("Beginning search #{}: {:?}", self.search_sequence, request);
    Ok(PendingSearch::new(self.search_sequence, request, Arc::clone(&self.client)))
  }

  /// Applies a finished search.
  ///
  /// Superseded outcomes are dropped whether they succeeded or failed.
  pub fn finish_search(&mut self, outcome: SearchOutcome) -> Result<SearchStatus> {
    let SearchOutcome { sequence, request, result } = outcome;
    if sequence != self.search_sequence {
      debug!(
        "Discarding search #{sequence} for {:?}, superseded by #{}",
        request.query, self.search_sequence
      );
      return Ok(SearchStatus::Superseded);
    }

    match result {
      Ok(books) => {
        debug!("Search for {:?} returned {} results", request.query, books.len());
        let results = books.len();
        self.state.replace_search_results(books);
        Ok(SearchStatus::Applied { results })
      },
      Err(e) => {
        warn!("Search for {:?} failed: {e}", request.query);
        Err(e.into_search_failure())
      },
    }
  }

  /// Looks a book up by id; search results win over the library, which wins over the wishlist.
  pub fn find_item(&self, id: &str) -> Option<&Book> { self.state.find_item(id) }

  /// Selects a book for detail display and saving.
  ///
  /// An unknown id leaves the current selection as it was and returns `false`.
  pub fn select_for_detail(&mut self, id: &str) -> bool {
    let found = self.state.select(id);
    if !found {
      debug!("Nothing to select for id `{id}`");
    }
    found
  }

  /// Saves the selected book to the library or wishlist.
  ///
  /// Saving a book that is already in the target collection is a no-op reported as
  /// `applied: false`. The store is written either way. The book stays in the search results,
  /// and it may end up in both the library and the wishlist.
  ///
  /// # Errors
  ///
  /// [`BookshelfError::NoSelection`] if nothing is selected.
  pub fn save_selected(&mut self, target: SaveTarget, start_progress: u8) -> Result<Mutation> {
    let book = self.state.selected().cloned().ok_or(BookshelfError::NoSelection)?;
    let id = book.id.clone();

    let applied = match target.status() {
      Some(status) => self.state.insert_library(LibraryEntry::new(book, status, start_progress)),
      None => self.state.insert_wishlist(book),
    };
    debug!("Saved `{id}` as {target} (new: {applied})");

    Ok(self.persisted(applied))
  }

  /// Removes a book from a collection. Removing an id that isn't there is not an error.
  pub fn remove_item(&mut self, id: &str, from: Collection) -> Mutation {
    let applied = self.state.remove(from, id);
    debug!("Removed `{id}` from {from} (present: {applied})");
    self.persisted(applied)
  }

  /// Sets the reading progress of a library entry, clamped to 100.
  ///
  /// # Errors
  ///
  /// [`BookshelfError::NotFound`] if the id is not in the library.
  pub fn set_progress(&mut self, id: &str, progress: u8) -> Result<Mutation> {
    let entry =
      self.state.library_entry_mut(id).ok_or_else(|| BookshelfError::NotFound(id.to_string()))?;
    let progress = progress.min(LibraryEntry::MAX_PROGRESS);
    let applied = entry.progress != progress;
    entry.progress = progress;
    Ok(self.persisted(applied))
  }

  /// Changes the reading status of a library entry. Progress is kept as it is.
  ///
  /// # Errors
  ///
  /// [`BookshelfError::NotFound`] if the id is not in the library.
  pub fn set_status(&mut self, id: &str, status: ReadingStatus) -> Result<Mutation> {
    let entry =
      self.state.library_entry_mut(id).ok_or_else(|| BookshelfError::NotFound(id.to_string()))?;
    let applied = entry.status != status;
    entry.status = status;
    Ok(self.persisted(applied))
  }

  /// Library, reading, and wishlist counters.
  pub fn stats(&self) -> Stats { view::stats(&self.state) }

  /// Library cards, optionally filtered by status.
  pub fn library_view(&self, filter: LibraryFilter) -> Vec<Card> {
    view::library_view(&self.state, filter)
  }

  /// Wishlist cards.
  pub fn wishlist_view(&self) -> Vec<Card> { view::wishlist_view(&self.state) }

  /// Cards for the latest search results.
  pub fn search_view(&self) -> Vec<Card> { view::search_view(&self.state) }

  /// Detail record for the selected book.
  pub fn detail_view(&self) -> Option<Detail> { view::detail_view(&self.state) }

  /// Read-only access to the collections.
  pub fn state(&self) -> &CollectionState { &self.state }

  /// The store the collections persist to.
  pub fn store(&self) -> &S { &self.store }

  /// Writes both durable collections and wraps the outcome.
  fn persisted(&mut self, applied: bool) -> Mutation {
    Mutation { applied, warning: self.persist() }
  }

  /// Writes the library and the wishlist, returning the first failure.
  fn persist(&mut self) -> Option<BookshelfError> {
    let blobs = [
      (codec::LIBRARY_KEY, codec::encode(self.state.library())),
      (codec::WISHLIST_KEY, codec::encode(self.state.wishlist())),
    ];

    let mut warning = None;
    for (key, blob) in blobs {
      if let Err(e) = blob.and_then(|blob| self.store.set(key, &blob)) {
        warn!("Failed to persist `{key}`: {e}");
        warning.get_or_insert(BookshelfError::PersistFailed {
          key:    key.to_string(),
          source: Box::new(e),
        });
      }
    }
    warning
  }
}
