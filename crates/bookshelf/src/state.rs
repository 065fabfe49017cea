//! The in-memory collection aggregate.
//!
//! [`CollectionState`] holds the three collections plus the current selection and enforces the
//! invariants that hold no matter how it is mutated:
//!
//! - no id appears twice in the library, and no id appears twice in the wishlist
//! - library and wishlist keep insertion order
//! - search results keep provider order and are replaced wholesale
//!
//! An id may live in the library and the wishlist at the same time. Nothing forbids it today,
//! and whether it should be forbidden is still undecided, so both copies are kept and
//! [`CollectionState::find_item`] resolves the ambiguity by precedence.
//!
//! This type knows nothing about storage; [`Bookshelf`](crate::Bookshelf) persists it.

use super::*;

/// Library, wishlist, latest search results, and the selected book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
  /// Durable: books being read or finished
  library:        Vec<LibraryEntry>,
  /// Durable: books not yet started
  wishlist:       Vec<WishlistEntry>,
  /// Ephemeral: most recent provider response
  search_results: Vec<Book>,
  /// Ephemeral: the book currently inspected
  selected:       Option<Book>,
}

impl CollectionState {
  /// Creates a state from stored collections, with no search results and nothing selected.
  ///
  /// Later duplicates of an id within the same collection are dropped.
  pub fn from_collections(library: Vec<LibraryEntry>, wishlist: Vec<WishlistEntry>) -> Self {
    let mut state = Self::default();
    for entry in library {
      if !state.insert_library(entry.clone()) {
        warn!("Dropping duplicate library entry `{}` from storage", entry.id());
      }
    }
    for book in wishlist {
      if !state.insert_wishlist(book.clone()) {
        warn!("Dropping duplicate wishlist entry `{}` from storage", book.id);
      }
    }
    state
  }

  /// Library entries in insertion order.
  pub fn library(&self) -> &[LibraryEntry] { &self.library }

  /// Wishlist entries in insertion order.
  pub fn wishlist(&self) -> &[WishlistEntry] { &self.wishlist }

  /// Latest search results in provider order.
  pub fn search_results(&self) -> &[Book] { &self.search_results }

  /// The currently selected book.
  pub fn selected(&self) -> Option<&Book> { self.selected.as_ref() }

  /// Whether `collection` holds an entry with this id.
  pub fn contains(&self, collection: Collection, id: &str) -> bool {
    match collection {
      Collection::Library => self.library.iter().any(|e| e.id() == id),
      Collection::Wishlist => self.wishlist.iter().any(|b| b.id == id),
    }
  }

  /// Appends to the library unless the id is already there. Returns whether it was inserted.
  pub fn insert_library(&mut self, entry: LibraryEntry) -> bool {
    if self.contains(Collection::Library, entry.id()) {
      return false;
    }
    self.library.push(entry);
    true
  }

  /// Appends to the wishlist unless the id is already there. Returns whether it was inserted.
  pub fn insert_wishlist(&mut self, book: WishlistEntry) -> bool {
    if self.contains(Collection::Wishlist, &book.id) {
      return false;
    }
    self.wishlist.push(book);
    true
  }

  /// Removes the entry with `id` from `collection`. Returns whether anything was removed.
  pub fn remove(&mut self, collection: Collection, id: &str) -> bool {
    let before = self.len(collection);
    match collection {
      Collection::Library => self.library.retain(|e| e.id() != id),
      Collection::Wishlist => self.wishlist.retain(|b| b.id != id),
    }
    self.len(collection) != before
  }

  /// Number of entries in `collection`.
  pub fn len(&self, collection: Collection) -> usize {
    match collection {
      Collection::Library => self.library.len(),
      Collection::Wishlist => self.wishlist.len(),
    }
  }

  /// Mutable access to a library entry.
  pub fn library_entry_mut(&mut self, id: &str) -> Option<&mut LibraryEntry> {
    self.library.iter_mut().find(|e| e.id() == id)
  }

  /// Replaces the search results wholesale.
  pub fn replace_search_results(&mut self, results: Vec<Book>) { self.search_results = results; }

  /// Looks a book up by id across all collections.
  ///
  /// Search results win over the library, which wins over the wishlist.
  pub fn find_item(&self, id: &str) -> Option<&Book> {
    self
      .search_results
      .iter()
      .find(|b| b.id == id)
      .or_else(|| self.library.iter().map(|e| &e.book).find(|b| b.id == id))
      .or_else(|| self.wishlist.iter().find(|b| b.id == id))
  }

  /// Selects the book with `id`. Leaves the selection untouched and returns `false` on a miss.
  pub fn select(&mut self, id: &str) -> bool {
    match self.find_item(id).cloned() {
      Some(book) => {
        self.selected = Some(book);
        true
      },
      None => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reading(id: &str, title: &str) -> LibraryEntry {
    LibraryEntry::new(Book::new(id, title), ReadingStatus::Reading, 0)
  }

  #[test]
  fn test_insert_is_unique_per_collection() {
    let mut state = CollectionState::default();
    assert!(state.insert_library(reading("a", "A")));
    assert!(!state.insert_library(reading("a", "A again")));
    assert_eq!(state.library()[0].book.title, "A");

    assert!(state.insert_wishlist(Book::new("a", "A")));
    assert!(!state.insert_wishlist(Book::new("a", "A")));
    assert_eq!(state.len(Collection::Library), 1);
    assert_eq!(state.len(Collection::Wishlist), 1);
  }

  #[test]
  fn test_from_collections_drops_duplicates() {
    let state = CollectionState::from_collections(
      vec![reading("a", "first"), reading("b", "B"), reading("a", "second")],
      vec![Book::new("w", "W"), Book::new("w", "W")],
    );
    let ids: Vec<_> = state.library().iter().map(LibraryEntry::id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(state.library()[0].book.title, "first");
    assert_eq!(state.wishlist().len(), 1);
    assert!(state.search_results().is_empty());
    assert!(state.selected().is_none());
  }

  #[test]
  fn test_remove_is_idempotent() {
    let mut state = CollectionState::default();
    state.insert_library(reading("a", "A"));
    assert!(state.remove(Collection::Library, "a"));
    assert!(!state.remove(Collection::Library, "a"));
    assert!(!state.remove(Collection::Wishlist, "missing"));
  }

  #[test]
  fn test_find_item_precedence() {
    let mut state = CollectionState::default();
    state.insert_wishlist(Book::new("x", "wishlist copy"));
    assert_eq!(state.find_item("x").unwrap().title, "wishlist copy");

    state.insert_library(reading("x", "library copy"));
    assert_eq!(state.find_item("x").unwrap().title, "library copy");

    state.replace_search_results(vec![Book::new("x", "search copy")]);
    assert_eq!(state.find_item("x").unwrap().title, "search copy");

    assert!(state.find_item("nope").is_none());
  }

  #[test]
  fn test_select_miss_keeps_previous_selection() {
    let mut state = CollectionState::default();
    state.replace_search_results(vec![Book::new("x", "X")]);
    assert!(state.select("x"));
    assert!(!state.select("gone"));
    assert_eq!(state.selected().unwrap().id, "x");
  }
}
