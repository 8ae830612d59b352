use std::fmt;

/// A line of player input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Guess a single character.
    Guess(char),
    /// Reprint the current round.
    State,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line.
    Empty,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Type a single letter to guess, or 'help'"),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Guess one character at a time or type 'help'",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Command list shown by `help`.
pub const COMMANDS_HELP: &str = "\
Commands:
  <letter>   Guess a single character (a lone space guesses a space)
  state      Show the current round
  help       Show this list
  quit       Give up and leave
";

/// Parse a line of input into a [`Command`].
///
/// # Examples
///
/// ```
/// use poe_cli::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("a"), Ok(Command::Guess('a')));
/// assert_eq!(parse_command(" quit "), Ok(Command::Quit));
/// assert!(parse_command("ab").is_err());
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    // A line holding exactly one character, even whitespace, is a guess.
    let line = input.trim_end_matches(['\n', '\r']);
    if let Some(c) = single_char(line) {
        return Ok(Command::Guess(c));
    }

    let trimmed = line.trim();

    match trimmed {
        "" => return Err(ParseError::Empty),
        "state" => return Ok(Command::State),
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    single_char(trimmed)
        .map(Command::Guess)
        .ok_or_else(|| ParseError::UnrecognizedCommand(trimmed.to_string()))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
