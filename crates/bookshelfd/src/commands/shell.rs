//! Interactive session.
//!
//! One-shot commands start from a freshly restored engine, so search results and the selection
//! never outlive them. The shell keeps one engine for the whole session, which allows the
//! search and the save to happen in separate steps.

use super::*;

/// Lines shown by `help`
const HELP: &[&str] = &[
  "search <query> [--category <subject>] [--sort relevance|newest]",
  "results                          show the latest search results",
  "show <id>                        select a book and show its details",
  "save [reading|completed|wishlist] [progress]",
  "remove <id> [library|wishlist]",
  "list [all|reading|completed]",
  "wishlist",
  "stats",
  "progress <id> <percent>",
  "status <id> reading|completed",
  "quit",
];

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
  /// Run a search
  Search {
    /// Free-text query
    query:    String,
    /// Subject filter
    category: String,
    /// Ordering, or the configured default
    sort:     Option<SortOrder>,
  },
  /// Show the latest results again
  Results,
  /// Select and show a book
  Show(String),
  /// Save the selected book
  Save {
    /// Destination
    target:   SaveTarget,
    /// Starting progress
    progress: u8,
  },
  /// Remove a book
  Remove {
    /// Book id
    id:   String,
    /// Collection to remove from
    from: Collection,
  },
  /// List the library
  List(LibraryFilter),
  /// List the wishlist
  Wishlist,
  /// Show counters
  Stats,
  /// Update reading progress
  Progress {
    /// Book id
    id:      String,
    /// New percentage
    percent: u8,
  },
  /// Update reading status
  Status {
    /// Book id
    id:     String,
    /// New status
    status: ReadingStatus,
  },
  /// Print the command list
  Help,
  /// Leave the shell
  Quit,
}

impl ShellCommand {
  /// Parses the words of one input line. Returns `None` for a blank line.
  fn parse(line: &str) -> Result<Option<Self>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
      return Ok(None);
    };

    let command = match (command.to_lowercase().as_str(), args) {
      ("search", args) => Self::parse_search(args)?,
      ("results", []) => Self::Results,
      ("show", [id]) => Self::Show(id.to_string()),
      ("save", []) => Self::Save { target: SaveTarget::Reading, progress: 0 },
      ("save", [target]) => Self::Save { target: target.parse()?, progress: 0 },
      ("save", [target, progress]) =>
        Self::Save { target: target.parse()?, progress: parse_percent(progress)? },
      ("remove", [id]) => Self::Remove { id: id.to_string(), from: Collection::Library },
      ("remove", [id, from]) => Self::Remove { id: id.to_string(), from: from.parse()? },
      ("list", []) => Self::List(LibraryFilter::All),
      ("list", [filter]) => Self::List(filter.parse()?),
      ("wishlist", []) => Self::Wishlist,
      ("stats", []) => Self::Stats,
      ("progress", [id, percent]) =>
        Self::Progress { id: id.to_string(), percent: parse_percent(percent)? },
      ("status", [id, status]) => Self::Status { id: id.to_string(), status: status.parse()? },
      ("help" | "?", _) => Self::Help,
      ("quit" | "exit", []) => Self::Quit,
      (other, _) => {
        return Err(BookshelfdError::Usage(format!(
          "Cannot understand `{other}` with these arguments, type `help` for the command list"
        )))
      },
    };
    Ok(Some(command))
  }

  /// Splits `search` arguments into the query and its options.
  fn parse_search(args: &[&str]) -> Result<Self> {
    let mut query = Vec::new();
    let mut category = ALL_CATEGORIES.to_string();
    let mut sort: Option<SortOrder> = None;

    let mut args = args.iter();
    while let Some(&word) = args.next() {
      match word {
        "--category" | "-c" => category = option_value(word, args.next())?.to_string(),
        "--sort" | "-s" => sort = Some(option_value(word, args.next())?.parse()?),
        word => query.push(word),
      }
    }

    Ok(Self::Search { query: query.join(" "), category, sort })
  }
}

/// The value following an option flag.
fn option_value<'a>(flag: &str, value: Option<&&'a str>) -> Result<&'a str> {
  value.copied().ok_or_else(|| BookshelfdError::Usage(format!("`{flag}` needs a value")))
}

/// Parses a percentage between 0 and 100.
fn parse_percent(value: &str) -> Result<u8> {
  value
    .parse::<u8>()
    .ok()
    .filter(|percent| *percent <= 100)
    .ok_or_else(|| {
      BookshelfdError::Usage(format!("`{value}` is not a percentage between 0 and 100"))
    })
}

/// Function for the [`Commands::Shell`] in the CLI.
///
/// Reads commands until `quit`. A failing command is reported and the session goes on.
pub async fn shell<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  config: &Config,
) -> Result<()> {
  interaction.reply(ResponseContent::Info("Type `help` for commands, `quit` to leave"))?;

  loop {
    let line = interaction.prompt("bookshelf")?;
    let outcome = match ShellCommand::parse(&line) {
      Ok(Some(ShellCommand::Quit)) => return Ok(()),
      Ok(Some(command)) => execute(interaction, shelf, config, command).await,
      Ok(None) => Ok(()),
      Err(e) => Err(e),
    };
    if let Err(e) = outcome {
      debug!("Shell command failed: {e:?}");
      interaction.reply(ResponseContent::Error(&e))?;
    }
  }
}

/// Runs one parsed shell command.
async fn execute<I: UserInteraction>(
  interaction: &I,
  shelf: &mut Shelf,
  config: &Config,
  command: ShellCommand,
) -> Result<()> {
  match command {
    ShellCommand::Search { query, category, sort } => {
      let status = shelf.search(&query, &category, sort.unwrap_or(config.default_sort)).await?;
      search::show_results(interaction, shelf, &query, status)
    },
    ShellCommand::Results => {
      let cards = shelf.search_view();
      if cards.is_empty() {
        return interaction.reply(ResponseContent::Info("No search results yet"));
      }
      interaction.reply(ResponseContent::Cards("Search results", &cards))
    },
    ShellCommand::Show(id) => show(interaction, shelf, &id),
    ShellCommand::Save { target, progress } => add::save(interaction, shelf, target, progress),
    ShellCommand::Remove { id, from } => remove(interaction, shelf, RemoveArgs { id, from }),
    ShellCommand::List(filter) => list(interaction, shelf, filter),
    ShellCommand::Wishlist => wishlist(interaction, shelf),
    ShellCommand::Stats => stats(interaction, shelf),
    ShellCommand::Progress { id, percent } => progress(interaction, shelf, &id, percent),
    ShellCommand::Status { id, status: new_status } => status(interaction, shelf, &id, new_status),
    ShellCommand::Help => {
      for line in HELP {
        interaction.reply(ResponseContent::Info(line))?;
      }
      Ok(())
    },
    ShellCommand::Quit => Ok(()),
  }
}
