//! Baseline invariant: baseline ownership never moves.

use super::super::{BOARD_SIZE, Player, QuoridorGame};
use super::Invariant;

/// Invariant: Row 0 belongs to player 1, row 8 to player 2, nothing else is owned.
pub struct BaselineInvariant;

impl Invariant<QuoridorGame> for BaselineInvariant {
    fn holds(game: &QuoridorGame) -> bool {
        game.board().cells().all(|cell| {
            let expected = match cell.coord().y {
                0 => Some(Player::One),
                y if y == BOARD_SIZE - 1 => Some(Player::Two),
                _ => None,
            };
            cell.baseline() == expected
        })
    }

    fn description() -> &'static str {
        "Baselines are row 0 for player 1 and row 8 for player 2"
    }
}
