//! Line-oriented command notation for driving a game.
//!
//! ```text
//! move 4 1          # move the active pawn to (4, 1)
//! fence h 1 1       # horizontal fence on (1, 1)
//! board | moves | status | help | quit
//! ```

use super::{Coord, Orientation};
use std::str::FromStr;
use tracing::instrument;

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the active pawn.
    Move(Coord),
    /// Place a fence for the active player.
    Fence(Orientation, Coord),
    /// Show the board.
    Board,
    /// List the active pawn's legal moves.
    Moves,
    /// Show whose turn it is and the fences left.
    Status,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  move <x> <y>         move your pawn to column x, row y
  fence <h|v> <x> <y>  place a horizontal or vertical fence on a cell
  board                show the board
  moves                list your legal moves
  status               show whose turn it is
  help                 show this message
  quit                 leave the game";

/// Errors that may be encountered when parsing a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// The line holds no command.
    #[display("Empty command")]
    Empty,
    /// The first word is not a known command.
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),
    /// A required argument is absent.
    #[display("Missing argument: {}", _0)]
    MissingArgument(&'static str),
    /// A coordinate is not an integer.
    #[display("Not a number: {}", _0)]
    BadInt(String),
    /// The fence orientation is neither `h` nor `v`.
    #[display("Not a fence orientation: {} (expected h or v)", _0)]
    BadOrientation(String),
    /// Extra words follow a complete command.
    #[display("Unexpected input: {}", _0)]
    TrailingInput(String),
}

impl std::error::Error for ParseError {}

fn next_int<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i32, ParseError> {
    let word = words.next().ok_or(ParseError::MissingArgument(name))?;
    word.parse()
        .map_err(|_| ParseError::BadInt(word.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(ParseError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "move" | "m" => {
                let x = next_int(&mut words, "x")?;
                let y = next_int(&mut words, "y")?;
                Command::Move(Coord::new(x, y))
            }
            "fence" | "f" => {
                let word = words
                    .next()
                    .ok_or(ParseError::MissingArgument("orientation"))?;
                let orientation = Orientation::from_str(word)
                    .map_err(|_| ParseError::BadOrientation(word.to_string()))?;
                let x = next_int(&mut words, "x")?;
                let y = next_int(&mut words, "y")?;
                Command::Fence(orientation, Coord::new(x, y))
            }
            "board" | "b" => Command::Board,
            "moves" => Command::Moves,
            "status" | "s" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(ParseError::TrailingInput(rest.join(" ")))
        }
    }
}

/// Parses one line of a session script.
///
/// Blank lines and `#` comments yield `Ok(None)`. A trailing comment after a
/// command is ignored.
#[instrument]
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }
    content.parse().map(Some)
}
