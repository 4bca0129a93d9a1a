use stories_core::{Msg, SortKey};

pub const HELP: &str = "\
commands:
  search [term]    search for term (or the current input) from page 0
  type <text>      change the search input without searching
  more             load the next page of the current search
  remove <id>      drop an item from the list
  recent <n>       repeat recent search number n
  sort <key>       sort by title, author, comments, points or none
  help             show this help
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Vec<Msg>),
    Help,
    Quit,
}

/// Parses one input line. `recent` is the recent-search list currently shown.
pub fn parse_command(line: &str, recent: &[String]) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msgs = match verb.to_ascii_lowercase().as_str() {
        "" => Vec::new(),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "search" | "s" if rest.is_empty() => vec![Msg::SearchSubmitted],
        "search" | "s" => vec![Msg::InputChanged(rest.to_string()), Msg::SearchSubmitted],
        "type" | "t" => vec![Msg::InputChanged(rest.to_string())],
        "more" | "m" => vec![Msg::MoreClicked],
        "remove" | "rm" => {
            let id = rest
                .parse()
                .map_err(|_| format!("`{rest}` is not an item id"))?;
            vec![Msg::RemoveClicked(id)]
        }
        "recent" | "r" => {
            let term = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| recent.get(index))
                .ok_or_else(|| format!("no recent search `{rest}`"))?;
            vec![Msg::LastSearchSelected(term.clone())]
        }
        "sort" => vec![Msg::SortClicked(parse_sort_key(rest)?)],
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Command::Send(msgs))
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.to_ascii_lowercase().as_str() {
        "none" | "" => Ok(SortKey::None),
        "title" => Ok(SortKey::Title),
        "author" => Ok(SortKey::Author),
        "comments" | "comment" => Ok(SortKey::Comments),
        "points" | "point" => Ok(SortKey::Points),
        other => Err(format!("unknown sort key `{other}`")),
    }
}
