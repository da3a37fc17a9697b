//! Win detection for Quoridor.

use super::super::{Board, Coord, Player};
use tracing::instrument;

/// Checks whether moving `player`'s pawn to `destination` wins the game.
///
/// A player wins by reaching a cell of the opponent's baseline.
#[instrument(skip(board))]
pub fn reaches_goal(board: &Board, player: Player, destination: Coord) -> bool {
    board
        .get(destination)
        .and_then(|cell| cell.baseline())
        .is_some_and(|owner| owner == player.opponent())
}
