//! Catalog search providers.
//!
//! The engine never talks to a catalog directly. It hands a [`SearchRequest`] to a
//! [`SearchClient`] and gets back a list of normalized [`Book`]s. The client owns everything
//! about the provider: URLs, HTTP, timeouts and response parsing.
//!
//! [`GoogleBooks`] is the bundled client for the Google Books volumes API.
//!
//! # Examples
//!
//! Implementing a custom provider:
//!
//! ```no_run
//! use bookshelf::{
//!   book::Book,
//!   error::Result,
//!   retriever::{SearchClient, SearchRequest},
//! };
//!
//! struct Fixed(Vec<Book>);
//!
//! #[async_trait::async_trait]
//! impl SearchClient for Fixed {
//!   async fn search(&self, _request: &SearchRequest) -> Result<Vec<Book>> { Ok(self.0.clone()) }
//! }
//! ```

use super::*;

mod google;

pub use self::google::{GoogleBooks, GOOGLE_BOOKS_API};

/// Maximum number of results asked of a provider per search.
pub const MAX_RESULTS: u32 = 20;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Ordering requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  /// Provider's relevance ranking
  #[default]
  Relevance,
  /// Most recently published first
  Newest,
}

impl Display for SortOrder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Relevance => write!(f, "relevance"),
      Self::Newest => write!(f, "newest"),
    }
  }
}

impl FromStr for SortOrder {
  type Err = BookshelfError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "relevance" => Ok(Self::Relevance),
      "newest" => Ok(Self::Newest),
      other => Err(BookshelfError::InvalidValue(format!("unknown sort order `{other}`"))),
    }
  }
}

/// A single search as sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
  /// Free-text query, already trimmed and non-empty
  pub query:       String,
  /// Subject filter, or [`ALL_CATEGORIES`]
  pub category:    String,
  /// Requested ordering
  pub sort_by:     SortOrder,
  /// Result cap, always [`MAX_RESULTS`] for engine-issued searches
  pub max_results: u32,
}

impl SearchRequest {
  /// Builds a request, rejecting queries that are blank after trimming.
  pub fn new(query: &str, category: &str, sort_by: SortOrder) -> Result<Self> {
    let query = query.trim();
    if query.is_empty() {
      return Err(BookshelfError::InvalidQuery);
    }
    let category = category.trim();
    let category = if category.is_empty() { ALL_CATEGORIES } else { category };

    Ok(Self {
      query: query.to_string(),
      category: category.to_string(),
      sort_by,
      max_results: MAX_RESULTS,
    })
  }

  /// The category filter, or `None` when searching all categories.
  pub fn subject(&self) -> Option<&str> {
    (!self.category.eq_ignore_ascii_case(ALL_CATEGORIES)).then_some(self.category.as_str())
  }
}

/// A remote catalog that can answer [`SearchRequest`]s.
///
/// Implementations return books in provider order with the placeholder defaults from
/// [`crate::book`] already applied. An empty provider answer is an empty list, not an error.
#[async_trait]
pub trait SearchClient: Send + Sync {
  /// Runs one search against the provider.
  async fn search(&self, request: &SearchRequest) -> Result<Vec<Book>>;
}
