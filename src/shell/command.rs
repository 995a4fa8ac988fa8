//! Parsing of shell input lines

use crate::catalog::{SortMode, validate_page};

/// Available shell commands with their help text
pub const COMMANDS: &[(&str, &str)] = &[
    ("topics", "List the featured topics and sort modes"),
    ("topic <name>", "Choose the featured topic"),
    ("sort <mode>", "Choose All, latest, featured or trending"),
    ("page <n>", "Choose the listing page (All only, 1-50)"),
    ("articles", "Fetch article links for the current selection"),
    ("show", "Show the article links fetched so far"),
    ("files <url>", "Fetch file links found on a page"),
    ("config", "Print the active configuration"),
    ("help", "Show available commands"),
    ("quit", "Leave the shell"),
];

/// One line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Topics,
    Topic(String),
    Sort(SortMode),
    Page(u32),
    Articles,
    Show,
    Files(String),
    Config,
    Help,
    Quit,
    Empty,
}

/// Parse a line of input
///
/// `topic` and `files` accept a missing argument so the blank input reaches
/// the action layer and is reported there.
///
/// # Errors
///
/// Returns a message for unknown commands and malformed arguments.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Empty),
        "topics" => Ok(Command::Topics),
        "topic" => Ok(Command::Topic(arg.to_string())),
        "sort" => arg.parse().map(Command::Sort),
        "page" => {
            let page: u32 = arg
                .parse()
                .map_err(|_| format!("page expects a number, got '{arg}'"))?;
            validate_page(page).map(Command::Page)
        }
        "articles" | "a" => Ok(Command::Articles),
        "show" => Ok(Command::Show),
        "files" | "f" => Ok(Command::Files(arg.to_string())),
        "config" => Ok(Command::Config),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("topic hedge-funds"),
            Ok(Command::Topic("hedge-funds".to_string()))
        );
        assert_eq!(parse_command("sort Trending"), Ok(Command::Sort(SortMode::Trending)));
        assert_eq!(parse_command("page 4"), Ok(Command::Page(4)));
        assert_eq!(
            parse_command("  files   https://example.com/report  "),
            Ok(Command::Files("https://example.com/report".to_string()))
        );
    }

    #[test]
    fn blank_arguments_reach_the_action_layer() {
        assert_eq!(parse_command("files"), Ok(Command::Files(String::new())));
        assert_eq!(parse_command("topic"), Ok(Command::Topic(String::new())));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("page zero").is_err());
        assert!(parse_command("page 99").is_err());
        assert!(parse_command("sort oldest").is_err());
        assert!(parse_command("download").is_err());
    }

    #[test]
    fn empty_line_is_a_no_op() {
        assert_eq!(parse_command("   "), Ok(Command::Empty));
    }
}
