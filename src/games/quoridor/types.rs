//! Core domain types for Quoridor.

use derive_more::Display;
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i32 = 9;

/// Fences each player receives at game start.
pub const FENCES_PER_PLAYER: usize = 10;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum Player {
    /// Player 1 (moves first, starts on row 0).
    #[display("Player 1")]
    One,
    /// Player 2 (starts on row 8).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks up a player by number (1 or 2).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Zero-based slot for per-player arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Row of this player's own baseline.
    pub fn baseline_row(self) -> i32 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }

    /// Row this player must reach to win (the opponent's baseline).
    pub fn goal_row(self) -> i32 {
        self.opponent().baseline_row()
    }

    /// Starting square of this player's pawn.
    pub fn start(self) -> Coord {
        Coord::new(BOARD_SIZE / 2, self.baseline_row())
    }
}

/// Board coordinates: `x` is the column, `y` the row.
///
/// Values are unconstrained so callers can express off-board positions;
/// use [`Coord::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("({}, {})", x, y)]
pub struct Coord {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at player 1's baseline.
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate pair.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if both axes lie within `0..BOARD_SIZE`.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// The neighbouring coordinate one step in `direction`, possibly off-board.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Direction from `self` to `other` when they are orthogonally adjacent.
    #[instrument]
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Orthogonal direction of travel across the board.
///
/// "Up" decreases the row, towards player 1's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    /// Decreasing row.
    #[display("up")]
    Up,
    /// Increasing row.
    #[display("down")]
    Down,
    /// Decreasing column.
    #[display("left")]
    Left,
    /// Increasing column.
    #[display("right")]
    Right,
}

impl Direction {
    /// Column and row offset of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True for up and down.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The two directions at right angles to this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        }
    }
}

/// Orientation of a fence.
///
/// A horizontal fence on a cell sits along its top edge; a vertical fence
/// sits along its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    /// Blocks movement between a cell and the row above it.
    #[display("horizontal")]
    #[strum(serialize = "h", serialize = "horizontal")]
    Horizontal,
    /// Blocks movement between a cell and the column left of it.
    #[display("vertical")]
    #[strum(serialize = "v", serialize = "vertical")]
    Vertical,
}

impl Orientation {
    /// True if a fence of this orientation may not be placed at `at`.
    ///
    /// Row 0 has no row above it and column 0 has no column to its left,
    /// so those cells cannot host a horizontal or vertical fence respectively.
    pub fn on_outer_edge(self, at: Coord) -> bool {
        match self {
            Orientation::Horizontal => at.y == 0,
            Orientation::Vertical => at.x == 0,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("unfinished")]
    InProgress,
    /// Game ended with a winner.
    #[display("{} won", _0)]
    Won(Player),
}

impl GameStatus {
    /// Numeric status code: 0 unfinished, otherwise the winner's number.
    pub fn code(self) -> u8 {
        match self {
            GameStatus::InProgress => 0,
            GameStatus::Won(player) => player.number(),
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }

    /// True once a player has won.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_numbers_round_trip() {
        for player in Player::iter() {
            assert_eq!(Player::from_number(player.number()), Some(player));
        }
        assert_eq!(Player::from_number(0), None);
        assert_eq!(Player::from_number(3), None);
    }

    #[test]
    fn test_goal_is_opponent_baseline() {
        assert_eq!(Player::One.goal_row(), 8);
        assert_eq!(Player::Two.goal_row(), 0);
        assert_eq!(Player::One.start(), Coord::new(4, 0));
        assert_eq!(Player::Two.start(), Coord::new(4, 8));
    }

    #[test]
    fn test_direction_to_adjacent_only() {
        let c = Coord::new(4, 4);
        assert_eq!(c.direction_to(Coord::new(4, 3)), Some(Direction::Up));
        assert_eq!(c.direction_to(Coord::new(4, 5)), Some(Direction::Down));
        assert_eq!(c.direction_to(Coord::new(3, 4)), Some(Direction::Left));
        assert_eq!(c.direction_to(Coord::new(5, 4)), Some(Direction::Right));
        assert_eq!(c.direction_to(Coord::new(5, 5)), None);
        assert_eq!(c.direction_to(Coord::new(4, 6)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn test_step_inverts_direction_to() {
        let c = Coord::new(2, 7);
        for direction in Direction::iter() {
            assert_eq!(c.direction_to(c.step(direction)), Some(direction));
        }
    }

    #[test]
    fn test_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(8, 8).in_bounds());
        assert!(!Coord::new(-1, 0).in_bounds());
        assert!(!Coord::new(4, 9).in_bounds());
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!(Orientation::from_str("h"), Ok(Orientation::Horizontal));
        assert_eq!(Orientation::from_str("V"), Ok(Orientation::Vertical));
        assert_eq!(Orientation::from_str("Horizontal"), Ok(Orientation::Horizontal));
        assert!(Orientation::from_str("x").is_err());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GameStatus::InProgress.code(), 0);
        assert_eq!(GameStatus::Won(Player::One).code(), 1);
        assert_eq!(GameStatus::Won(Player::Two).code(), 2);
        assert_eq!(GameStatus::Won(Player::Two).to_string(), "Player 2 won");
    }
}
