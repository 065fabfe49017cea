//! Terminal rendering and prompting.
//!
//! Commands talk to the user only through [`UserInteraction`], so they can be driven by the
//! [`Cli`] or by anything else that implements it.

use console::style;
use dialoguer::{Confirm, Input};

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static ERROR_PREFIX: &str = "✗ ";
pub static WARNING_PREFIX: &str = "! ";
pub static PROMPT_PREFIX: &str = "❯ ";
pub static ITEM_PREFIX: &str = "├─";
pub static LAST_ITEM_PREFIX: &str = "└─";
pub static CONTINUE_PREFIX: &str = "│  ";
pub static LAST_CONTINUE_PREFIX: &str = "   ";

/// Width of the progress bar drawn on cards being read
const PROGRESS_BAR_WIDTH: usize = 10;

/// Something the CLI wants to show.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A titled list of book cards
  Cards(&'a str, &'a [Card]),
  /// The detail record of the selected book
  Detail(&'a Detail),
  /// Collection counters
  Stats(&'a Stats),
  /// A completed action
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// Something worked but deserves attention
  Warning(&'a str),
  /// A failed command
  Error(&'a BookshelfdError),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of text.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows a response.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .default(false)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str) -> Result<String> {
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Cards(heading, cards) => {
        println!(
          "{}{} ({})",
          style(INFO_PREFIX).cyan(),
          style(heading).cyan().bold(),
          cards.len()
        );
        for (i, card) in cards.iter().enumerate() {
          let (branch, cont) = if i + 1 == cards.len() {
            (LAST_ITEM_PREFIX, LAST_CONTINUE_PREFIX)
          } else {
            (ITEM_PREFIX, CONTINUE_PREFIX)
          };
          println!("{} {}", style(branch).dim(), card_line(card));
          println!("{} {}", style(cont).dim(), style(format!("id: {}", card.id)).dim());
        }
      },
      ResponseContent::Detail(detail) => print_detail(detail),
      ResponseContent::Stats(stats) => {
        println!("{}{}", style(INFO_PREFIX).cyan(), style("Collection").cyan().bold());
        println!("   {} {}", style("Library:").dim(), style(stats.total_library).yellow());
        println!("   {} {}", style("Reading:").dim(), style(stats.currently_reading).yellow());
        println!("   {} {}", style("Wishlist:").dim(), style(stats.wishlist_count).yellow());
      },
      ResponseContent::Success(message) =>
        println!("{}{}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Info(message) => println!("{}{}", style(INFO_PREFIX).cyan(), message),
      ResponseContent::Warning(message) =>
        println!("{}{}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(error) =>
        eprintln!("{}{}", style(ERROR_PREFIX).red(), style(error).red()),
    }
    Ok(())
  }
}

/// One-line summary of a card: title, authors, and the reading badge.
fn card_line(card: &Card) -> String {
  let mut line =
    format!("{} {}", style(&card.title).bold(), style(format!("by {}", card.authors)).dim());
  if let Some(status) = card.status {
    line.push_str(&format!(" {}", style(format!("[{status}]")).green()));
  }
  if let Some(progress) = card.progress {
    line.push_str(&format!(
      " {} {}",
      style(progress_bar(progress)).cyan(),
      style(format!("{progress}%")).cyan()
    ));
  }
  line
}

/// Fixed-width bar for a percentage.
fn progress_bar(progress: u8) -> String {
  let filled = usize::from(progress.min(100)) * PROGRESS_BAR_WIDTH / 100;
  format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
}

/// Prints every field of a detail record.
fn print_detail(detail: &Detail) {
  println!("{}{}", style(INFO_PREFIX).cyan(), style(&detail.title).white().bold());

  let mut fields = vec![
    ("Authors", detail.authors.clone()),
    ("Category", detail.category.clone()),
    ("Pages", detail.pages.clone()),
  ];
  if let Some(date) = &detail.published_date {
    fields.push(("Published", date.clone()));
  }
  fields.push(("Cover", detail.cover_url.clone()));
  if let Some(url) = &detail.preview_url {
    fields.push(("Preview", url.clone()));
  }
  fields.push(("ID", detail.id.clone()));

  for (i, (label, value)) in fields.iter().enumerate() {
    let branch = if i + 1 == fields.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
    println!("{} {} {}", style(branch).dim(), style(format!("{label}:")).dim(), value);
  }

  println!();
  println!("{}", detail.description);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_progress_bar() {
    assert_eq!(progress_bar(0), "░".repeat(10));
    assert_eq!(progress_bar(35), format!("{}{}", "█".repeat(3), "░".repeat(7)));
    assert_eq!(progress_bar(100), "█".repeat(10));
  }
}
