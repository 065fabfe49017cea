//! Google Books volumes API client.
//!
//! Requests look like
//! `https://www.googleapis.com/books/v1/volumes?q=dune+subject:fiction&orderBy=newest&maxResults=20`.
//! Each `items[]` entry of the response is normalized into a [`Book`], with every field the API
//! leaves out replaced by its placeholder.

use std::time::Duration;

use url::Url;

use super::*;

/// Volumes endpoint of the public Google Books API.
pub const GOOGLE_BOOKS_API: &str = "https://www.googleapis.com/books/v1/volumes";

/// [`SearchClient`] backed by the Google Books volumes API.
#[derive(Debug, Clone)]
pub struct GoogleBooks {
  /// Shared HTTP client
  client:   reqwest::Client,
  /// Volumes endpoint requests are sent to, validated on construction
  base_url: String,
}

impl Default for GoogleBooks {
  fn default() -> Self {
    Self { client: reqwest::Client::new(), base_url: GOOGLE_BOOKS_API.to_string() }
  }
}

impl GoogleBooks {
  /// Creates a client for a custom endpoint with a per-request timeout.
  pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    Url::parse(base_url)?;
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self { client, base_url: base_url.to_string() })
  }

  /// Creates a client from the endpoint and timeout in a [`Config`].
  pub fn from_config(config: &Config) -> Result<Self> {
    Self::new(&config.api_url, Duration::from_secs(config.request_timeout_secs))
  }

  /// Builds the request URL for a search.
  ///
  /// A category other than `"all"` is appended to the query as a `subject:` filter.
  pub fn request_url(&self, request: &SearchRequest) -> Result<Url> {
    let q = match request.subject() {
      Some(subject) => format!("{} subject:{}", request.query, subject),
      None => request.query.clone(),
    };

    let mut url = Url::parse(&self.base_url)?;
    url
      .query_pairs_mut()
      .append_pair("q", &q)
      .append_pair("orderBy", &request.sort_by.to_string())
      .append_pair("maxResults", &request.max_results.to_string());
    Ok(url)
  }

  /// Parses a volumes response body into normalized books, in provider order.
  pub fn parse_response(data: &[u8]) -> Result<Vec<Book>> {
    let response: VolumesResponse = serde_json::from_slice(data)
      .map_err(|e| BookshelfError::ApiError(format!("Failed to parse JSON: {}", e)))?;
    Ok(response.items.into_iter().map(Book::from).collect())
  }
}

#[async_trait]
impl SearchClient for GoogleBooks {
  async fn search(&self, request: &SearchRequest) -> Result<Vec<Book>> {
    let url = self.request_url(request)?;
    debug!("Searching Google Books via: {}", url);

    let response = self.client.get(url).send().await?;
    let status = response.status();
    let data = response.bytes().await?;
    trace!("Google Books response ({status}): {}", String::from_utf8_lossy(&data));

    if !status.is_success() {
      return Err(BookshelfError::ApiError(format!(
        "Google Books returned {status}: {}",
        String::from_utf8_lossy(&data)
      )));
    }

    Self::parse_response(&data)
  }
}

/// Top level of a volumes response. `items` is absent when nothing matched.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
  /// Matching volumes
  #[serde(default)]
  items: Vec<Volume>,
}

/// One volume in a volumes response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
  /// Volume id
  id:          String,
  /// Bibliographic details
  #[serde(default)]
  volume_info: VolumeInfo,
}

/// The `volumeInfo` block of a volume; every field is optional in practice.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
  title:          Option<String>,
  #[serde(default)]
  authors:        Vec<String>,
  description:    Option<String>,
  #[serde(default)]
  categories:     Vec<String>,
  page_count:     Option<u32>,
  published_date: Option<String>,
  image_links:    Option<ImageLinks>,
  preview_link:   Option<String>,
}

/// Cover image links of a volume.
#[derive(Debug, Deserialize)]
struct ImageLinks {
  thumbnail: Option<String>,
}

impl From<Volume> for Book {
  fn from(volume: Volume) -> Self {
    let Volume { id, volume_info: info } = volume;

    let mut book = Book::new(id, info.title.unwrap_or_default())
      .with_authors(info.authors)
      .with_categories(info.categories);
    if let Some(description) = info.description {
      book.description = description;
    }
    if let Some(thumbnail) = info.image_links.and_then(|links| links.thumbnail) {
      book.thumbnail_url = thumbnail;
    }
    book.page_count = info.page_count;
    book.published_date = info.published_date;
    book.preview_url = info.preview_link;
    book
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const RESPONSE: &str = r#"{
    "kind": "books#volumes",
    "totalItems": 2,
    "items": [
      {
        "id": "abc123",
        "volumeInfo": {
          "title": "Dune",
          "authors": ["Frank Herbert"],
          "description": "A desert planet.",
          "categories": ["Fiction"],
          "pageCount": 412,
          "publishedDate": "1965",
          "imageLinks": { "thumbnail": "http://books.google.com/thumb/abc123" },
          "previewLink": "http://books.google.com/books?id=abc123"
        }
      },
      { "id": "bare1", "volumeInfo": {} }
    ]
  }"#;

  #[test]
  fn test_parse_full_volume() {
    let books = GoogleBooks::parse_response(RESPONSE.as_bytes()).unwrap();
    assert_eq!(books.len(), 2);

    let dune = &books[0];
    assert_eq!(dune.id, "abc123");
    assert_eq!(dune.title, "Dune");
    assert_eq!(dune.authors, vec!["Frank Herbert"]);
    assert_eq!(dune.description, "A desert planet.");
    assert_eq!(dune.page_count, Some(412));
    assert_eq!(dune.published_date.as_deref(), Some("1965"));
    assert_eq!(dune.thumbnail_url, "http://books.google.com/thumb/abc123");
    assert_eq!(dune.preview_url.as_deref(), Some("http://books.google.com/books?id=abc123"));
  }

  #[test]
  fn test_parse_applies_placeholders() {
    let books = GoogleBooks::parse_response(RESPONSE.as_bytes()).unwrap();
    assert_eq!(books[1], Book::new("bare1", ""));
  }

  #[test]
  fn test_missing_items_is_empty() {
    let books = GoogleBooks::parse_response(br#"{"kind":"books#volumes","totalItems":0}"#).unwrap();
    assert!(books.is_empty());
  }

  #[test]
  fn test_malformed_body_is_api_error() {
    assert!(matches!(
      GoogleBooks::parse_response(b"<html>oops</html>"),
      Err(BookshelfError::ApiError(_))
    ));
  }

  #[test]
  fn test_request_url() {
    let client = GoogleBooks::default();

    let request = SearchRequest::new("dune", "all", SortOrder::Relevance).unwrap();
    assert_eq!(
      client.request_url(&request).unwrap().as_str(),
      "https://www.googleapis.com/books/v1/volumes?q=dune&orderBy=relevance&maxResults=20"
    );

    let request = SearchRequest::new("frank herbert", "fiction", SortOrder::Newest).unwrap();
    let url = client.request_url(&request).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![
      ("q".to_string(), "frank herbert subject:fiction".to_string()),
      ("orderBy".to_string(), "newest".to_string()),
      ("maxResults".to_string(), "20".to_string()),
    ]);
  }

  #[test]
  fn test_custom_endpoint() {
    let client = GoogleBooks::new("http://localhost:8080/volumes", Duration::from_secs(5)).unwrap();
    let request = SearchRequest::new("dune", "all", SortOrder::Relevance).unwrap();
    let url = client.request_url(&request).unwrap();
    assert!(url.as_str().starts_with("http://localhost:8080/volumes?q="));

    assert!(GoogleBooks::new("not a url", Duration::from_secs(5)).is_err());
  }
}
