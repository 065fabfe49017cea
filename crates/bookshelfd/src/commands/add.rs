//! Search-and-save in one step.

use super::*;

/// Arguments for [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// Free-text query
  pub query: String,

  /// Which search result to save, counting from 1
  #[arg(long, default_value_t = 1)]
  pub pick: usize,

  /// Restrict the search to a subject, or `all`
  #[arg(long, short, default_value = ALL_CATEGORIES)]
  pub category: String,

  /// Result ordering (relevance, newest). Defaults to the configured order.
  #[arg(long, short)]
  pub sort: Option<SortOrder>,

  /// Where to save the book (reading, completed, wishlist)
  #[arg(long, default_value_t = SaveTarget::Reading)]
  pub status: SaveTarget,

  /// Starting progress for library saves
  #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
  pub progress: u8,
}

/// Function for the [`Commands::Add`] in the CLI.
///
/// Runs the search, selects the picked result, and saves it.
pub async fn add<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  config: &Config,
  args: AddArgs,
) -> Result<()> {
  let AddArgs { query, pick, category, sort, status, progress } = args;

  shelf.search(&query, &category, sort.unwrap_or(config.default_sort)).await?;
  let cards = shelf.search_view();
  let card = pick.checked_sub(1).and_then(|i| cards.get(i)).ok_or_else(|| {
    BookshelfdError::Usage(format!(
      "Search for \"{query}\" returned {} results, cannot pick #{pick}",
      cards.len()
    ))
  })?;

  interaction.reply(ResponseContent::Cards("Selected", std::slice::from_ref(card)))?;
  shelf.select_for_detail(&card.id);
  save(interaction, shelf, status, progress)
}

/// Saves the selected book and reports where it went.
pub(crate) fn save<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  target: SaveTarget,
  progress: u8,
) -> Result<()> {
  let mutation = shelf.save_selected(target, progress)?;
  let title = shelf.state().selected().map(|b| b.title.clone()).unwrap_or_default();
  let collection = match target.status() {
    Some(_) => Collection::Library,
    None => Collection::Wishlist,
  };
  report(
    interaction,
    mutation,
    &format!("Saved \"{title}\" to your {collection} as {target}"),
    &format!("\"{title}\" is already in your {collection}"),
  )
}
