//! Catalog search.

use super::*;

/// Arguments for [`Commands::Search`]
#[derive(Args, Clone)]
pub struct SearchArgs {
  /// Free-text query
  pub query: String,

  /// Restrict results to a subject, or `all`
  #[arg(long, short, default_value = ALL_CATEGORIES)]
  pub category: String,

  /// Result ordering (relevance, newest). Defaults to the configured order.
  #[arg(long, short)]
  pub sort: Option<SortOrder>,
}

/// Function for the [`Commands::Search`] in the CLI.
pub async fn search<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  config: &Config,
  args: SearchArgs,
) -> Result<()> {
  let SearchArgs { query, category, sort } = args;
  let status = shelf.search(&query, &category, sort.unwrap_or(config.default_sort)).await?;
  show_results(interaction, shelf, &query, status)
}

/// Lists the current search results, or says there were none.
pub(crate) fn show_results<I: UserInteraction>(
  interaction: &I,
  shelf: &Shelf,
  query: &str,
  status: SearchStatus,
) -> Result<()> {
  match status {
    SearchStatus::Applied { results: 0 } =>
      interaction.reply(ResponseContent::Info(&format!("No books found for \"{query}\""))),
    SearchStatus::Applied { .. } =>
      interaction.reply(ResponseContent::Cards("Search results", &shelf.search_view())),
    SearchStatus::Superseded => Ok(()),
  }
}
