//! Removing books from a collection.

use super::*;

/// Arguments for [`Commands::Remove`]
#[derive(Args, Clone)]
pub struct RemoveArgs {
  /// Book id
  pub id: String,

  /// Collection to remove from (library, wishlist)
  #[arg(long, default_value_t = Collection::Library)]
  pub from: Collection,
}

/// Function for the [`Commands::Remove`] in the CLI.
pub fn remove<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  args: RemoveArgs,
) -> Result<()> {
  let RemoveArgs { id, from } = args;

  if !interaction.confirm(&format!("Remove `{id}` from your {from}?"))? {
    return interaction.reply(ResponseContent::Info("Removal cancelled"));
  }

  let mutation = shelf.remove_item(&id, from);
  report(
    interaction,
    mutation,
    &format!("Removed `{id}` from your {from}"),
    &format!("`{id}` was not in your {from}"),
  )
}
