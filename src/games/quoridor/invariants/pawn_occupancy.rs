//! Pawn occupancy invariant: board markers agree with pawn positions.

use super::super::{Player, QuoridorGame};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: Each pawn appears on the board exactly once, where it stands.
///
/// The cell under a pawn carries that player's marker and no other cell does.
pub struct PawnOccupancyInvariant;

impl Invariant<QuoridorGame> for PawnOccupancyInvariant {
    fn holds(game: &QuoridorGame) -> bool {
        Player::iter().all(|player| {
            let position = game.pawn(player).position();
            let mut marked = game
                .board()
                .cells()
                .filter(|cell| cell.pawn() == Some(player));
            matches!(
                (marked.next(), marked.next()),
                (Some(cell), None) if cell.coord() == position
            )
        })
    }

    fn description() -> &'static str {
        "Each pawn is marked on exactly one cell, its own position"
    }
}
