//! Durable key/value storage for the collections.
//!
//! The engine only ever reads and writes opaque string blobs under a couple of fixed keys, so a
//! persistence backend just has to implement [`Store`]. Two adapters are provided:
//!
//! - [`Database`]: a SQLite file, the default for the command line front end
//! - [`MemoryStore`]: an in-process map, handy for tests and throwaway sessions

use super::*;

mod memory;
mod sqlite;

pub use self::{memory::MemoryStore, sqlite::Database};

/// Get/set access to opaque blobs keyed by name.
///
/// Writes must be synchronous: when [`Store::set`] returns `Ok`, the value is durable as far as
/// the adapter is concerned.
pub trait Store {
  /// Reads the blob stored under `key`, or `None` if nothing has been written there.
  fn get(&self, key: &str) -> Result<Option<String>>;

  /// Stores `value` under `key`, replacing any previous blob.
  fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
  fn get(&self, key: &str) -> Result<Option<String>> { (**self).get(key) }

  fn set(&mut self, key: &str, value: &str) -> Result<()> { (**self).set(key, value) }
}
