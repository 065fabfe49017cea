//! On-disk configuration.
//!
//! The configuration is a small TOML file, by default at
//! `<config dir>/bookshelf/config.toml`:
//!
//! ```toml
//! database_path = "/home/me/.local/share/bookshelf/bookshelf.db"
//! api_url = "https://www.googleapis.com/books/v1/volumes"
//! request_timeout_secs = 30
//! default_sort = "relevance"
//! ```
//!
//! Every key is optional. A missing file means the defaults are used.

use super::*;

/// User configuration for a bookshelf installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// SQLite file holding the library and wishlist
  pub database_path:        PathBuf,
  /// Search provider endpoint
  pub api_url:              String,
  /// Per-request timeout for the search provider, in seconds
  pub request_timeout_secs: u64,
  /// Sort order used when a search doesn't specify one
  pub default_sort:         SortOrder,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path:        store::Database::default_path(),
      api_url:              retriever::GOOGLE_BOOKS_API.to_string(),
      request_timeout_secs: 30,
      default_sort:         SortOrder::default(),
    }
  }
}

impl Config {
  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/bookshelf/config.toml`
  /// - On macOS: `~/Library/Application Support/bookshelf/config.toml`
  /// - On Windows: `%APPDATA%\bookshelf\config.toml`
  /// - Fallback: `./bookshelf/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("bookshelf").join("config.toml")
  }

  /// Loads a configuration file, falling back to [`Config::default`] if it does not exist.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No configuration at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    if config.request_timeout_secs == 0 {
      return Err(BookshelfError::Config("request_timeout_secs must be greater than zero".into()));
    }
    trace!("Loaded configuration from {}: {:?}", path.display(), config);
    Ok(config)
  }

  /// Writes this configuration to `path`, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Sets the database path.
  pub fn with_database_path(mut self, database_path: &Path) -> Self {
    self.database_path = database_path.to_path_buf();
    self
  }

  /// Sets the search provider endpoint.
  pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
    self.api_url = api_url.into();
    self
  }

  /// Sets the default sort order.
  pub fn with_default_sort(mut self, sort: SortOrder) -> Self {
    self.default_sort = sort;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load(dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config::default()
      .with_database_path(&dir.path().join("shelf.db"))
      .with_api_url("http://localhost:9999/volumes")
      .with_default_sort(SortOrder::Newest);

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
  }

  #[test]
  fn test_partial_file_uses_defaults_for_the_rest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_sort = \"newest\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.default_sort, SortOrder::Newest);
    assert_eq!(config.api_url, Config::default().api_url);
  }

  #[test]
  fn test_invalid_files_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();
    assert!(matches!(Config::load(&path), Err(BookshelfError::Config(_))));

    std::fs::write(&path, "default_sort = \"sideways\"\n").unwrap();
    assert!(matches!(Config::load(&path), Err(BookshelfError::TomlDe(_))));
  }
}
