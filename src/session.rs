//! Text session driver: feeds parsed commands to a game and reports back.

use crate::config::SessionConfig;
use crate::games::quoridor::notation::{self, Command, ParseError};
use crate::games::quoridor::render::{render_board, render_status};
use crate::games::quoridor::{Action, ActionError, Coord, GameStatus, QuoridorGame, Transition};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The action was accepted.
    Applied {
        /// The action taken.
        action: Action,
        /// Its effect on the game.
        transition: Transition,
    },
    /// The action was refused; the game is unchanged.
    Rejected(ActionError),
    /// Rendered board.
    Board(String),
    /// Legal destinations for the active pawn.
    Moves(Vec<Coord>),
    /// Turn and fence summary.
    Status(String),
    /// Command summary.
    Help,
    /// The session should end.
    Quit,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Applied {
                action,
                transition: Transition::Won(winner),
            } => write!(f, "{}. {} wins!", action, winner),
            Reply::Applied { action, .. } => write!(f, "{}.", action),
            Reply::Rejected(e) => write!(f, "Rejected: {}", e),
            Reply::Board(text) | Reply::Status(text) => write!(f, "{}", text),
            Reply::Moves(moves) if moves.is_empty() => write!(f, "No legal moves"),
            Reply::Moves(moves) => {
                let listed = moves
                    .iter()
                    .map(Coord::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "Legal moves: {}", listed)
            }
            Reply::Help => write!(f, "{}", notation::HELP),
            Reply::Quit => write!(f, "Goodbye."),
        }
    }
}

/// Errors that end a session early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
    /// A script line could not be parsed (strict mode only).
    #[display("Parse error: {}", _0)]
    Parse(ParseError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Parse(e) => Some(e),
        }
    }
}

/// A single game driven by text commands.
#[derive(Debug, Clone)]
pub struct Session {
    game: QuoridorGame,
    config: SessionConfig,
    prompt: bool,
    strict: bool,
}

impl Session {
    /// Creates a session around a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: QuoridorGame::new(),
            config,
            prompt: false,
            strict: false,
        }
    }

    /// Writes a prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Treats an unparseable line as fatal instead of reporting and moving on.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The game being played.
    pub fn game(&self) -> &QuoridorGame {
        &self.game
    }

    /// The session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Executes a command on behalf of the player whose turn it is.
    #[instrument(skip(self), fields(turn = %self.game.current_turn()))]
    pub fn execute(&mut self, command: &Command) -> Reply {
        let player = self.game.current_turn();
        let action = match *command {
            Command::Move(to) => Action::move_pawn(player, to),
            Command::Fence(orientation, at) => Action::place_fence(player, orientation, at),
            Command::Board => return Reply::Board(render_board(&self.game)),
            Command::Moves => return Reply::Moves(self.game.valid_moves()),
            Command::Status => return Reply::Status(render_status(&self.game)),
            Command::Help => return Reply::Help,
            Command::Quit => return Reply::Quit,
        };

        match self.game.apply(&action) {
            Ok(transition) => Reply::Applied { action, transition },
            Err(e) => Reply::Rejected(e),
        }
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let turn = self.game.current_turn();
        if *self.config.show_moves() {
            let moves = self
                .game
                .valid_moves()
                .iter()
                .map(Coord::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            write!(output, "{} [{}]> ", turn, moves)?;
        } else {
            write!(output, "{}> ", turn)?;
        }
        output.flush()
    }

    /// Reads commands until `quit`, end of input, or a winner.
    ///
    /// Returns the game's status when the session stops.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<GameStatus, SessionError> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                self.write_prompt(&mut output)?;
            }
            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line?;

            let command = match notation::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) if self.strict => return Err(e.into()),
                Err(e) => {
                    debug!(error = %e, %line, "Unparseable command");
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            };

            let reply = self.execute(&command);
            writeln!(output, "{}", reply)?;
            match reply {
                Reply::Applied { .. } if *self.config.show_board() => {
                    writeln!(output, "{}", render_board(&self.game))?;
                }
                Reply::Quit => break,
                _ => {}
            }

            if self.game.current_state().is_over() {
                break;
            }
        }

        let status = self.game.current_state();
        info!(%status, "Session finished");
        Ok(status)
    }
}
