//! Book details.

use super::*;

/// Function for the [`Commands::Show`] in the CLI.
///
/// Selects the book and prints its detail record. Only the library and wishlist are searched
/// here unless search results are still around, as they are inside the [`shell`](super::shell).
pub fn show<I: UserInteraction>(interaction: &I, shelf: &mut Shelf, id: &str) -> Result<()> {
  if !shelf.select_for_detail(id) {
    return Err(BookshelfdError::Usage(format!("No book with id `{id}`")));
  }
  match shelf.detail_view() {
    Some(detail) => interaction.reply(ResponseContent::Detail(&detail)),
    None => Ok(()),
  }
}
