//! Line command parsing for the interactive host.

use libreta_core::{Letter, NoteColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectLetter(Letter),
    SelectColor(NoteColor),
    Draft(String),
    /// Optional text replaces the draft before submitting.
    Add(Option<String>),
    Delete(usize),
    ToggleTheme,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  letter <A-Z>        select a letter
  color <1-3|name>    select note color (yellow, green, blue)
  draft <text...>     replace the draft text
  add [text...]       submit the draft (or the given text)
  del <index>         delete a note of the selected letter
  theme               toggle dark/light mode
  show                print the current view
  help                print this help
  quit                exit";

/// Parses one input line. Blank lines parse as `Show`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "" | "show" | "ls" => Ok(Command::Show),
        "letter" | "l" => Letter::parse_input(rest)
            .map(Command::SelectLetter)
            .ok_or_else(|| format!("expected a letter A-Z, got `{rest}`")),
        "color" | "c" => NoteColor::parse_input(rest)
            .map(Command::SelectColor)
            .ok_or_else(|| format!("expected color 1-3 or yellow|green|blue, got `{rest}`")),
        "draft" | "d" => Ok(Command::Draft(rest.to_string())),
        "add" | "a" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
        "del" | "rm" => rest
            .parse::<usize>()
            .map(Command::Delete)
            .map_err(|_| format!("expected a note index, got `{rest}`")),
        "theme" | "t" => Ok(Command::ToggleTheme),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use libreta_core::{Letter, NoteColor};

    #[test]
    fn parses_selection_commands() {
        assert_eq!(
            parse_command("letter e"),
            Ok(Command::SelectLetter(Letter::new('E').unwrap()))
        );
        assert_eq!(
            parse_command("color 3"),
            Ok(Command::SelectColor(NoteColor::Blue))
        );
        assert!(parse_command("letter 7").is_err());
    }

    #[test]
    fn add_keeps_inner_whitespace() {
        assert_eq!(
            parse_command("add  Buy  milk "),
            Ok(Command::Add(Some("Buy  milk".to_string())))
        );
        assert_eq!(parse_command("add"), Ok(Command::Add(None)));
    }

    #[test]
    fn delete_requires_index() {
        assert_eq!(parse_command("del 2"), Ok(Command::Delete(2)));
        assert!(parse_command("del two").is_err());
        assert!(parse_command("del").is_err());
    }

    #[test]
    fn blank_line_shows_view() {
        assert_eq!(parse_command("   "), Ok(Command::Show));
        assert!(parse_command("frobnicate").is_err());
    }
}
