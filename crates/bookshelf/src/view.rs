//! Render-ready projections of the collection state.
//!
//! Everything here is a pure function of [`CollectionState`]. Views are cheap to rebuild, so
//! callers recompute the ones they show after each engine operation instead of caching them.

use super::*;

/// Library filter by reading status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LibraryFilter {
  /// Every library entry
  #[default]
  All,
  /// Only entries being read
  Reading,
  /// Only finished entries
  Completed,
}

impl LibraryFilter {
  /// Whether an entry passes this filter.
  pub fn matches(self, entry: &LibraryEntry) -> bool {
    match self {
      Self::All => true,
      Self::Reading => entry.status == ReadingStatus::Reading,
      Self::Completed => entry.status == ReadingStatus::Completed,
    }
  }
}

impl Display for LibraryFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::All => write!(f, "all"),
      Self::Reading => write!(f, "reading"),
      Self::Completed => write!(f, "completed"),
    }
  }
}

impl FromStr for LibraryFilter {
  type Err = BookshelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "all" => Ok(Self::All),
      "reading" => Ok(Self::Reading),
      "completed" => Ok(Self::Completed),
      other => Err(BookshelfError::InvalidValue(format!("unknown library filter `{other}`"))),
    }
  }
}

/// Collection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
  /// Entries in the library
  pub total_library:     usize,
  /// Library entries being read
  pub currently_reading: usize,
  /// Entries in the wishlist
  pub wishlist_count:    usize,
}

/// Summary of one book in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
  /// Book id, used for follow-up operations
  pub id:             String,
  /// Title
  pub title:          String,
  /// Authors joined with `", "`
  pub authors:        String,
  /// Cover image URL
  pub thumbnail_url:  String,
  /// Reading status badge, library cards only
  pub status:         Option<ReadingStatus>,
  /// Progress bar value, library cards that are being read only
  pub progress:       Option<u8>,
  /// Collection this card can be removed from; `None` for search results
  pub removable_from: Option<Collection>,
}

impl Card {
  /// Card for a bare book.
  fn from_book(book: &Book, removable_from: Option<Collection>) -> Self {
    Self {
      id: book.id.clone(),
      title: book.title.clone(),
      authors: book.author_line(),
      thumbnail_url: book.thumbnail_url.clone(),
      status: None,
      progress: None,
      removable_from,
    }
  }

  /// Card for a library entry, with its badge and progress.
  fn from_entry(entry: &LibraryEntry) -> Self {
    Self {
      status: Some(entry.status),
      progress: entry.visible_progress(),
      ..Self::from_book(&entry.book, Some(Collection::Library))
    }
  }
}

/// Everything a detail display needs about the selected book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
  /// Book id
  pub id:             String,
  /// Cover image URL
  pub cover_url:      String,
  /// Title
  pub title:          String,
  /// Authors joined with `", "`
  pub authors:        String,
  /// First category
  pub category:       String,
  /// Page count text, `"? pages"` when unknown
  pub pages:          String,
  /// Description
  pub description:    String,
  /// Publication date as reported by the provider
  pub published_date: Option<String>,
  /// Online preview link
  pub preview_url:    Option<String>,
}

impl From<&Book> for Detail {
  fn from(book: &Book) -> Self {
    let pages = match book.page_count {
      Some(count) => format!("{count} pages"),
      None => "? pages".to_string(),
    };
    Self {
      id: book.id.clone(),
      cover_url: book.thumbnail_url.clone(),
      title: book.title.clone(),
      authors: book.author_line(),
      category: book.primary_category().to_string(),
      pages,
      description: book.description.clone(),
      published_date: book.published_date.clone(),
      preview_url: book.preview_url.clone(),
    }
  }
}

/// Library cards in insertion order, filtered by status.
pub fn library_view(state: &CollectionState, filter: LibraryFilter) -> Vec<Card> {
  state.library().iter().filter(|e| filter.matches(e)).map(Card::from_entry).collect()
}

/// Wishlist cards in insertion order.
pub fn wishlist_view(state: &CollectionState) -> Vec<Card> {
  state.wishlist().iter().map(|b| Card::from_book(b, Some(Collection::Wishlist))).collect()
}

/// Search result cards in provider order.
pub fn search_view(state: &CollectionState) -> Vec<Card> {
  state.search_results().iter().map(|b| Card::from_book(b, None)).collect()
}

/// Detail record for the selected book, if any.
pub fn detail_view(state: &CollectionState) -> Option<Detail> { state.selected().map(Detail::from) }

/// Counters over the library and wishlist.
pub fn stats(state: &CollectionState) -> Stats {
  Stats {
    total_library:     state.library().len(),
    currently_reading: state
      .library()
      .iter()
      .filter(|e| e.status == ReadingStatus::Reading)
      .count(),
    wishlist_count:    state.wishlist().len(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state() -> CollectionState {
    let mut state = CollectionState::from_collections(
      vec![
        LibraryEntry::new(Book::new("r1", "Reading One"), ReadingStatus::Reading, 10),
        LibraryEntry::new(Book::new("c1", "Done One"), ReadingStatus::Completed, 60),
        LibraryEntry::new(Book::new("r2", "Reading Two"), ReadingStatus::Reading, 0),
      ],
      vec![Book::new("w1", "Someday")],
    );
    state.replace_search_results(vec![Book::new("s2", "Second"), Book::new("s1", "First")]);
    state
  }

  #[test]
  fn test_library_filters_keep_insertion_order() {
    let state = state();
    let ids = |filter| library_view(&state, filter).into_iter().map(|c| c.id).collect::<Vec<_>>();

    assert_eq!(ids(LibraryFilter::All), vec!["r1", "c1", "r2"]);
    assert_eq!(ids(LibraryFilter::Reading), vec!["r1", "r2"]);
    assert_eq!(ids(LibraryFilter::Completed), vec!["c1"]);
  }

  #[test]
  fn test_library_cards_show_progress_only_while_reading() {
    let cards = library_view(&state(), LibraryFilter::All);
    assert_eq!(cards[0].status, Some(ReadingStatus::Reading));
    assert_eq!(cards[0].progress, Some(10));
    assert_eq!(cards[1].status, Some(ReadingStatus::Completed));
    assert_eq!(cards[1].progress, None);
    assert!(cards.iter().all(|c| c.removable_from == Some(Collection::Library)));
  }

  #[test]
  fn test_search_and_wishlist_views() {
    let state = state();
    let search = search_view(&state);
    assert_eq!(search.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["s2", "s1"]);
    assert!(search.iter().all(|c| c.removable_from.is_none() && c.status.is_none()));

    let wishlist = wishlist_view(&state);
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].authors, "Unknown Author");
    assert_eq!(wishlist[0].removable_from, Some(Collection::Wishlist));
  }

  #[test]
  fn test_detail_view() {
    let mut state = state();
    assert!(detail_view(&state).is_none());

    state.select("s1");
    let detail = detail_view(&state).unwrap();
    assert_eq!(detail.title, "First");
    assert_eq!(detail.pages, "? pages");
    assert_eq!(detail.category, "Uncategorized");

    state.replace_search_results(vec![Book::new("p", "Paged")
      .with_page_count(320)
      .with_categories(["History", "Science"])
      .with_authors(["A", "B"])]);
    state.select("p");
    let detail = detail_view(&state).unwrap();
    assert_eq!(detail.pages, "320 pages");
    assert_eq!(detail.category, "History");
    assert_eq!(detail.authors, "A, B");
  }

  #[test]
  fn test_stats() {
    assert_eq!(stats(&CollectionState::default()), Stats::default());
    assert_eq!(stats(&state()), Stats {
      total_library:     3,
      currently_reading: 2,
      wishlist_count:    1,
    });
  }

  #[test]
  fn test_filter_parsing() {
    assert_eq!("Reading".parse::<LibraryFilter>().unwrap(), LibraryFilter::Reading);
    assert_eq!(LibraryFilter::default().to_string(), "all");
    assert!("wishlist".parse::<LibraryFilter>().is_err());
  }
}
