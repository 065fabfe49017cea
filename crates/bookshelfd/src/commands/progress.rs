//! Reading progress and status updates.

use super::*;

/// Function for the [`Commands::Progress`] in the CLI.
pub fn progress<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  id: &str,
  percent: u8,
) -> Result<()> {
  let mutation = shelf.set_progress(id, percent)?;
  report(
    interaction,
    mutation,
    &format!("Progress of `{id}` set to {percent}%"),
    &format!("`{id}` is already at {percent}%"),
  )
}

/// Function for the [`Commands::Status`] in the CLI.
pub fn status<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  id: &str,
  status: ReadingStatus,
) -> Result<()> {
  let mutation = shelf.set_status(id, status)?;
  report(
    interaction,
    mutation,
    &format!("Marked `{id}` as {status}"),
    &format!("`{id}` is already marked as {status}"),
  )
}
