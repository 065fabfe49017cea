use std::collections::BTreeMap;

use super::*;

/// A [`Store`] that keeps blobs in memory for the lifetime of the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  /// Blobs by key
  blobs: BTreeMap<String, String>,
}

impl MemoryStore {
  /// Creates an empty store.
  pub fn new() -> Self { Self::default() }

  /// Number of keys that have been written.
  pub fn len(&self) -> usize { self.blobs.len() }

  /// Whether nothing has been written yet.
  pub fn is_empty(&self) -> bool { self.blobs.is_empty() }
}

impl Store for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>> { Ok(self.blobs.get(key).cloned()) }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    self.blobs.insert(key.to_string(), value.to_string());
    Ok(())
  }
}
