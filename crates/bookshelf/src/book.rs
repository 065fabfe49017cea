//! Catalog items and the entries kept in each collection.
//!
//! A [`Book`] is a normalized record returned by a search provider. Every field that a
//! provider may omit has a fixed substitute so downstream code never has to deal with gaps in
//! the required fields:
//!
//! - missing authors become `["Unknown Author"]`
//! - a missing description becomes [`NO_DESCRIPTION`]
//! - missing categories become `["Uncategorized"]`
//! - a missing cover becomes [`PLACEHOLDER_THUMBNAIL`]
//!
//! Books are stored as-is in the wishlist ([`WishlistEntry`]) and wrapped with a reading status
//! and progress in the library ([`LibraryEntry`]).
//!
//! # Examples
//!
//! ```
//! use bookshelf::book::{Book, LibraryEntry, ReadingStatus};
//!
//! let book = Book::new("abc123", "Dune");
//! assert_eq!(book.authors, vec!["Unknown Author".to_string()]);
//!
//! let entry = LibraryEntry::new(book, ReadingStatus::Reading, 150);
//! assert_eq!(entry.progress, 100);
//! ```

use super::*;

/// Author substituted when the provider lists none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Description substituted when the provider has none.
pub const NO_DESCRIPTION: &str = "No description available";
/// Category substituted when the provider lists none.
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Cover image used when the provider has no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/128x192?text=No+Cover";

/// A catalog entry as returned by a search provider.
///
/// The `id` is assigned by the provider and is compared as an opaque string. It never changes
/// once a book has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  /// Provider-assigned identifier
  pub id:             String,
  /// Title, empty when the provider omits it
  #[serde(default)]
  pub title:          String,
  /// Ordered, non-empty list of authors
  #[serde(default = "default_authors")]
  pub authors:        Vec<String>,
  /// Free-form description
  #[serde(default = "default_description")]
  pub description:    String,
  /// Ordered, non-empty list of categories
  #[serde(default = "default_categories")]
  pub categories:     Vec<String>,
  /// Number of pages, if known
  #[serde(default)]
  pub page_count:     Option<u32>,
  /// Publication date exactly as the provider reported it
  #[serde(default)]
  pub published_date: Option<String>,
  /// Cover image URL
  #[serde(rename = "thumbnail", default = "default_thumbnail")]
  pub thumbnail_url:  String,
  /// Link to an online preview, if any
  #[serde(rename = "previewLink", default)]
  pub preview_url:    Option<String>,
}

fn default_authors() -> Vec<String> { vec![UNKNOWN_AUTHOR.to_string()] }

fn default_description() -> String { NO_DESCRIPTION.to_string() }

fn default_categories() -> Vec<String> { vec![UNCATEGORIZED.to_string()] }

fn default_thumbnail() -> String { PLACEHOLDER_THUMBNAIL.to_string() }

impl Book {
  /// Creates a book with the given id and title and every other field at its placeholder.
  pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
    Self {
      id:             id.into(),
      title:          title.into(),
      authors:        default_authors(),
      description:    default_description(),
      categories:     default_categories(),
      page_count:     None,
      published_date: None,
      thumbnail_url:  default_thumbnail(),
      preview_url:    None,
    }
  }

  /// Replaces the author list, keeping the placeholder if `authors` is empty.
  pub fn with_authors<I, S>(mut self, authors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    let authors: Vec<String> = authors.into_iter().map(Into::into).collect();
    if !authors.is_empty() {
      self.authors = authors;
    }
    self
  }

  /// Replaces the category list, keeping the placeholder if `categories` is empty.
  pub fn with_categories<I, S>(mut self, categories: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
    if !categories.is_empty() {
      self.categories = categories;
    }
    self
  }

  /// Sets the page count.
  pub fn with_page_count(mut self, pages: u32) -> Self {
    self.page_count = Some(pages);
    self
  }

  /// Authors joined for display, e.g. `"Frank Herbert, Brian Herbert"`.
  pub fn author_line(&self) -> String { self.authors.join(", ") }

  /// The first category, which is what detail displays show.
  pub fn primary_category(&self) -> &str {
    self.categories.first().map(String::as_str).unwrap_or(UNCATEGORIZED)
  }
}

/// Reading status of a library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
  /// Currently being read; progress is tracked
  #[default]
  Reading,
  /// Finished
  Completed,
}

impl Display for ReadingStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Reading => write!(f, "reading"),
      Self::Completed => write!(f, "completed"),
    }
  }
}

impl FromStr for ReadingStatus {
  type Err = BookshelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "reading" => Ok(Self::Reading),
      "completed" => Ok(Self::Completed),
      other => Err(BookshelfError::InvalidValue(format!("unknown reading status `{other}`"))),
    }
  }
}

/// A book in the library, with its reading status and progress.
///
/// `progress` is a percentage in `0..=100`. It is only shown while the entry is
/// [`ReadingStatus::Reading`], and it is kept unchanged when the entry is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
  /// The shelved book
  #[serde(flatten)]
  pub book:     Book,
  /// Whether the book is being read or finished
  pub status:   ReadingStatus,
  /// Percentage read
  #[serde(default)]
  pub progress: u8,
}

impl LibraryEntry {
  /// Largest allowed progress value.
  pub const MAX_PROGRESS: u8 = 100;

  /// Creates an entry, clamping `progress` to [`Self::MAX_PROGRESS`].
  pub fn new(book: Book, status: ReadingStatus, progress: u8) -> Self {
    Self { book, status, progress: progress.min(Self::MAX_PROGRESS) }
  }

  /// The entry's book id.
  pub fn id(&self) -> &str { &self.book.id }

  /// Progress to display, which is only present while reading.
  pub fn visible_progress(&self) -> Option<u8> {
    (self.status == ReadingStatus::Reading).then_some(self.progress)
  }
}

/// A book on the wishlist. It carries nothing beyond the book itself.
pub type WishlistEntry = Book;

/// Where [`Bookshelf::save_selected`](crate::Bookshelf::save_selected) puts the selected book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveTarget {
  /// Library, marked as being read
  Reading,
  /// Library, marked as finished
  Completed,
  /// Wishlist
  Wishlist,
}

impl SaveTarget {
  /// The library status this target maps to, or `None` for the wishlist.
  pub fn status(self) -> Option<ReadingStatus> {
    match self {
      Self::Reading => Some(ReadingStatus::Reading),
      Self::Completed => Some(ReadingStatus::Completed),
      Self::Wishlist => None,
    }
  }
}

impl Display for SaveTarget {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.status() {
      Some(status) => Display::fmt(&status, f),
      None => write!(f, "wishlist"),
    }
  }
}

impl FromStr for SaveTarget {
  type Err = BookshelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "wishlist" => Ok(Self::Wishlist),
      other => other.parse::<ReadingStatus>().map(Self::from).map_err(|_| {
        BookshelfError::InvalidValue(format!("unknown save target `{other}`"))
      }),
    }
  }
}

impl From<ReadingStatus> for SaveTarget {
  fn from(status: ReadingStatus) -> Self {
    match status {
      ReadingStatus::Reading => Self::Reading,
      ReadingStatus::Completed => Self::Completed,
    }
  }
}

/// One of the two durable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  /// Books being read or finished
  Library,
  /// Books not yet started
  Wishlist,
}

impl Collection {
  /// Store key the collection is persisted under.
  pub fn storage_key(self) -> &'static str {
    match self {
      Self::Library => codec::LIBRARY_KEY,
      Self::Wishlist => codec::WISHLIST_KEY,
    }
  }
}

impl Display for Collection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Library => write!(f, "library"),
      Self::Wishlist => write!(f, "wishlist"),
    }
  }
}

impl FromStr for Collection {
  type Err = BookshelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "library" => Ok(Self::Library),
      "wishlist" => Ok(Self::Wishlist),
      other => Err(BookshelfError::InvalidValue(format!("unknown collection `{other}`"))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_book_uses_placeholders() {
    let book = Book::new("abc123", "Dune");
    assert_eq!(book.authors, vec![UNKNOWN_AUTHOR]);
    assert_eq!(book.categories, vec![UNCATEGORIZED]);
    assert_eq!(book.description, NO_DESCRIPTION);
    assert_eq!(book.thumbnail_url, PLACEHOLDER_THUMBNAIL);
    assert_eq!(book.primary_category(), UNCATEGORIZED);
  }

  #[test]
  fn test_empty_author_list_keeps_placeholder() {
    let book = Book::new("x", "X").with_authors(Vec::<String>::new());
    assert_eq!(book.author_line(), UNKNOWN_AUTHOR);

    let book = book.with_authors(["Frank Herbert", "Brian Herbert"]);
    assert_eq!(book.author_line(), "Frank Herbert, Brian Herbert");
  }

  #[test]
  fn test_progress_is_clamped_and_hidden_when_completed() {
    let entry = LibraryEntry::new(Book::new("x", "X"), ReadingStatus::Reading, 250);
    assert_eq!(entry.progress, 100);
    assert_eq!(entry.visible_progress(), Some(100));

    let entry = LibraryEntry::new(Book::new("x", "X"), ReadingStatus::Completed, 40);
    assert_eq!(entry.progress, 40);
    assert_eq!(entry.visible_progress(), None);
  }

  #[test]
  fn test_parse_targets() {
    assert_eq!("wishlist".parse::<SaveTarget>().unwrap(), SaveTarget::Wishlist);
    assert_eq!("Reading".parse::<SaveTarget>().unwrap(), SaveTarget::Reading);
    assert_eq!("completed".parse::<SaveTarget>().unwrap().status(), Some(ReadingStatus::Completed));
    assert!("shelf".parse::<SaveTarget>().is_err());
    assert_eq!("library".parse::<Collection>().unwrap(), Collection::Library);
    assert!("reading".parse::<Collection>().is_err());
  }
}
