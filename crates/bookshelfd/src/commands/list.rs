//! Collection listings and counters.

use super::*;

/// Function for the [`Commands::List`] in the CLI.
pub fn list<I: UserInteraction>(
  interaction: &I,
  shelf: &Shelf,
  filter: LibraryFilter,
) -> Result<()> {
  let cards = shelf.library_view(filter);
  if cards.is_empty() {
    let message = match filter {
      LibraryFilter::All => "Your library is empty".to_string(),
      filter => format!("No {filter} books in your library"),
    };
    return interaction.reply(ResponseContent::Info(&message));
  }
  interaction.reply(ResponseContent::Cards("Library", &cards))
}

/// Function for the [`Commands::Wishlist`] in the CLI.
pub fn wishlist<I: UserInteraction>(interaction: &I, shelf: &Shelf) -> Result<()> {
  let cards = shelf.wishlist_view();
  if cards.is_empty() {
    return interaction.reply(ResponseContent::Info("Your wishlist is empty"));
  }
  interaction.reply(ResponseContent::Cards("Wishlist", &cards))
}

/// Function for the [`Commands::Stats`] in the CLI.
pub fn stats<I: UserInteraction>(interaction: &I, shelf: &Shelf) -> Result<()> {
  interaction.reply(ResponseContent::Stats(&shelf.stats()))
}
