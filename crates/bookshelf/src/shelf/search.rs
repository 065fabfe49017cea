use super::*;

/// A search that has been numbered but not yet sent.
///
/// It owns everything it needs, so the engine stays free for other operations while
/// [`PendingSearch::run`] is awaited.
pub struct PendingSearch {
  /// Position of this search in the engine's search order
  sequence: u64,
  /// What to ask the provider
  request:  SearchRequest,
  /// Provider to ask
  client:   Arc<dyn SearchClient>,
}

impl std::fmt::Debug for PendingSearch {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PendingSearch")
      .field("sequence", &self.sequence)
      .field("request", &self.request)
      .finish_non_exhaustive()
  }
}

impl PendingSearch {
  /// Numbers a request for `client`.
  pub(super) fn new(sequence: u64, request: SearchRequest, client: Arc<dyn SearchClient>) -> Self {
    Self { sequence, request, client }
  }

  /// Sequence number assigned when the search began.
  pub fn sequence(&self) -> u64 { self.sequence }

  /// The request that will be sent.
  pub fn request(&self) -> &SearchRequest { &self.request }

  /// Calls the provider. Hand the outcome to [`Bookshelf::finish_search`].
  pub async fn run(self) -> SearchOutcome {
    let Self { sequence, request, client } = self;
    let result = client.search(&request).await;
    SearchOutcome { sequence, request, result }
  }
}

/// A provider answer waiting to be applied.
#[derive(Debug)]
pub struct SearchOutcome {
  /// Sequence number of the search that produced it
  pub(super) sequence: u64,
  /// The request that was sent
  pub(super) request:  SearchRequest,
  /// Provider answer
  pub(super) result:   Result<Vec<Book>>,
}

impl SearchOutcome {
  /// Sequence number of the search that produced this outcome.
  pub fn sequence(&self) -> u64 { self.sequence }

  /// Whether the provider call succeeded.
  pub fn is_ok(&self) -> bool { self.result.is_ok() }
}

/// What [`Bookshelf::finish_search`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
  /// The search results were replaced
  Applied {
    /// Number of books now in the search results
    results: usize,
  },
  /// A newer search had begun, so the outcome was dropped
  Superseded,
}
