//! SQLite-backed blob storage.
//!
//! The schema is a single `collections` table mapping a key to its latest blob. It is created
//! automatically when a database is opened, and the file itself is created if it doesn't exist.
//!
//! # Examples
//!
//! ```no_run
//! use bookshelf::store::{Database, Store};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open(Database::default_path())?;
//! db.set("bookshelf_wishlist", "[]")?;
//! assert_eq!(db.get("bookshelf_wishlist")?.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

use rusqlite::{params, Connection, OptionalExtension};

use super::*;

/// Handle for the SQLite file holding the collections.
pub struct Database {
  /// SQLite connection handle
  conn: Connection,
}

impl std::fmt::Debug for Database {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Database").field("path", &self.conn.path()).finish()
  }
}

impl Database {
  /// Opens an existing database or creates a new one at the specified path.
  ///
  /// This method will:
  /// 1. Create any missing parent directories
  /// 2. Create the database file if it doesn't exist
  /// 3. Initialize the schema
  ///
  /// # Arguments
  ///
  /// * `path` - Path where the database file should be created or opened
  ///
  /// # Returns
  ///
  /// Returns a [`Result`] containing either:
  /// - A [`Database`] handle
  /// - A [`BookshelfError`] if creation or initialization fails
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    debug!("Opening collection database at {}", path.display());

    let conn = Connection::open(path)?;
    conn
      .execute_batch(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/init.sql")))?;
    Ok(Self { conn })
  }

  /// Opens a private in-memory database, mostly useful for tests.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    conn
      .execute_batch(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/init.sql")))?;
    Ok(Self { conn })
  }

  /// Returns the default path for the database file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.local/share/bookshelf/bookshelf.db`
  /// - On macOS: `~/Library/Application Support/bookshelf/bookshelf.db`
  /// - On Windows: `%APPDATA%\bookshelf\bookshelf.db`
  /// - Fallback: `./bookshelf/bookshelf.db` relative to the current directory
  ///
  /// # Examples
  ///
  /// ```no_run
  /// let path = bookshelf::store::Database::default_path();
  /// println!("Collections will be stored at: {}", path.display());
  /// ```
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("bookshelf").join("bookshelf.db")
  }
}

impl Store for Database {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let mut stmt = self.conn.prepare_cached("SELECT value FROM collections WHERE key = ?1")?;
    let value = stmt.query_row(params![key], |row| row.get::<_, String>(0)).optional()?;
    trace!("Read `{key}` ({} bytes)", value.as_ref().map_or(0, String::len));
    Ok(value)
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    let mut stmt = self.conn.prepare_cached(
      "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value])?;
    trace!("Wrote `{key}` ({} bytes)", value.len());
    Ok(())
  }
}
