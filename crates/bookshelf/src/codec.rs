//! Encoding of the durable collections into store blobs.
//!
//! Each collection is stored under its own key as a JSON array of flat, camelCase records. A
//! library record carries the book fields plus `status` and `progress`:
//!
//! ```json
//! [{"id":"abc123","title":"Dune","authors":["Frank Herbert"],"status":"reading","progress":0}]
//! ```
//!
//! Decoding never fails: an absent or unreadable blob is treated as an empty collection, and a
//! damaged entry is skipped without losing its neighbours, so a damaged store cannot stop the
//! engine from starting.

use serde::de::DeserializeOwned;

use super::*;

/// Store key for the library collection.
pub const LIBRARY_KEY: &str = "bookshelf_library";
/// Store key for the wishlist collection.
pub const WISHLIST_KEY: &str = "bookshelf_wishlist";

/// Encodes a collection into a blob suitable for [`Store::set`].
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> { Ok(serde_json::to_string(items)?) }

/// Decodes a blob produced by [`encode`].
///
/// `None` (key absent) and blobs that are not a JSON array yield an empty collection. Entries
/// of an array are decoded one at a time, and unreadable ones are skipped. Everything dropped
/// is logged.
pub fn decode<T: DeserializeOwned>(blob: Option<&str>) -> Vec<T> {
  let Some(blob) = blob else {
    trace!("No stored blob, starting empty");
    return Vec::new();
  };

  let entries: Vec<serde_json::Value> = match serde_json::from_str(blob) {
    Ok(entries) => entries,
    Err(e) => {
      warn!("Discarding unreadable stored collection: {e}");
      return Vec::new();
    },
  };

  entries
    .into_iter()
    .enumerate()
    .filter_map(|(index, entry)| match serde_json::from_value(entry) {
      Ok(item) => Some(item),
      Err(e) => {
        warn!("Skipping unreadable stored entry #{index}: {e}");
        None
      },
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_library() -> Vec<LibraryEntry> {
    let dune = Book::new("abc123", "Dune")
      .with_authors(["Frank Herbert"])
      .with_categories(["Fiction", "Science Fiction"])
      .with_page_count(412);
    let mut hyperion = Book::new("hyp1", "Hyperion");
    hyperion.published_date = Some("1989".into());
    hyperion.preview_url = Some("http://books.google.com/books?id=hyp1".into());

    vec![
      LibraryEntry::new(dune, ReadingStatus::Reading, 35),
      LibraryEntry::new(hyperion, ReadingStatus::Completed, 80),
    ]
  }

  #[test]
  fn test_library_round_trip() {
    let library = sample_library();
    let blob = encode(&library).unwrap();
    assert_eq!(decode::<LibraryEntry>(Some(&blob)), library);
  }

  #[test]
  fn test_wishlist_round_trip() {
    let wishlist = vec![Book::new("w1", "Foundation"), Book::new("w2", "")];
    let blob = encode(&wishlist).unwrap();
    assert_eq!(decode::<WishlistEntry>(Some(&blob)), wishlist);
  }

  #[test]
  fn test_empty_round_trip() {
    let blob = encode::<LibraryEntry>(&[]).unwrap();
    assert_eq!(blob, "[]");
    assert!(decode::<LibraryEntry>(Some(&blob)).is_empty());
  }

  #[test]
  fn test_library_wire_shape_is_flat() {
    let blob = encode(&sample_library()[..1]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let record = &value[0];
    assert_eq!(record["id"], "abc123");
    assert_eq!(record["status"], "reading");
    assert_eq!(record["progress"], 35);
    assert_eq!(record["pageCount"], 412);
    assert!(record.get("thumbnail").is_some());
    assert!(record.get("book").is_none());
  }

  #[traced_test]
  #[test]
  fn test_absent_and_corrupt_blobs_decode_empty() {
    assert!(decode::<LibraryEntry>(None).is_empty());
    assert!(decode::<LibraryEntry>(Some("{not json")).is_empty());
    assert!(decode::<WishlistEntry>(Some("{\"id\":\"not-an-array\"}")).is_empty());
    assert!(logs_contain("Discarding unreadable stored collection"));
  }

  #[traced_test]
  #[test]
  fn test_bad_entry_keeps_the_rest() {
    let blob = r#"[
      {"id":"ok1","title":"Kept","status":"reading","progress":10},
      {"id":"bad","title":"Too far","status":"reading","progress":300},
      {"id":"ok2","title":"Also kept","status":"shelved","progress":0},
      {"id":"ok3","title":"Last","status":"completed","progress":100}
    ]"#;

    let library = decode::<LibraryEntry>(Some(blob));
    assert_eq!(library.iter().map(LibraryEntry::id).collect::<Vec<_>>(), vec!["ok1", "ok3"]);
    assert_eq!(library[0].progress, 10);
    assert!(logs_contain("Skipping unreadable stored entry #1"));
    assert!(logs_contain("Skipping unreadable stored entry #2"));
  }

  #[test]
  fn test_decode_fills_missing_fields() {
    let blob = r#"[{"id":"x","status":"wishlist","progress":0}]"#;
    let wishlist = decode::<WishlistEntry>(Some(blob));
    assert_eq!(wishlist, vec![Book::new("x", "")]);
  }
}
