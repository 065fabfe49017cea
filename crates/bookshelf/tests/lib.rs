use std::{
  error::Error,
  path::{Path, PathBuf},
  sync::Arc,
};

use async_trait::async_trait;
use bookshelf::{
  book::{Book, Collection, ReadingStatus, SaveTarget},
  error::Result,
  prelude::*,
  retriever::{SearchRequest, SortOrder},
  store::Database,
  view::{LibraryFilter, Stats},
  Bookshelf,
};
use tempfile::{tempdir, TempDir};
use tracing_test::traced_test;

mod workflows;

pub type TestResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Offline catalog: a handful of fixed answers, everything else fails.
pub struct FixtureCatalog;

#[async_trait]
impl SearchClient for FixtureCatalog {
  async fn search(&self, request: &SearchRequest) -> Result<Vec<Book>> {
    match (request.query.as_str(), request.subject()) {
      ("dune", None) => Ok(vec![
        Book::new("abc123", "Dune").with_authors(["Frank Herbert"]).with_page_count(412),
        Book::new("def456", "Dune Messiah").with_authors(["Frank Herbert"]),
      ]),
      ("dune", Some("fiction")) => Ok(vec![Book::new("abc123", "Dune")]),
      ("foundation", _) => Ok(vec![Book::new("fnd1", "Foundation").with_authors(["Isaac Asimov"])]),
      _ => Err(BookshelfError::ApiError("fixture has no answer".into())),
    }
  }
}

pub fn create_test_db() -> (PathBuf, TempDir) {
  let dir = tempdir().unwrap();
  let path = dir.path().join("bookshelf.db");
  (path, dir)
}

pub fn open_shelf(path: &Path) -> Bookshelf<Database> {
  Bookshelf::open(Database::open(path).unwrap(), Arc::new(FixtureCatalog)).unwrap()
}
