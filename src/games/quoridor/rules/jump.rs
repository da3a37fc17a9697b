//! Pawn interaction: straight hops and diagonal side-steps.
//!
//! When the pawns stand face to face the mover may hop over the opponent.
//! If a fence stands behind the opponent, the hop turns into a side-step to
//! one of the cells beside the opponent instead. One routine handles all
//! four facings, driven by the [`Direction`] from mover to opponent.

use super::super::{Board, Coord, Direction};
use super::adjacency::edge_blocked;
use tracing::{debug, instrument};

/// Direction from the mover to an orthogonally adjacent opponent.
///
/// Fences are ignored: pawns separated by a fence still face each other.
#[instrument]
pub fn facing(mover: Coord, opponent: Coord) -> Option<Direction> {
    if !mover.in_bounds() || !opponent.in_bounds() {
        return None;
    }
    mover.direction_to(opponent)
}

/// Extra destinations gained by interacting with an adjacent opponent.
///
/// Empty unless the pawns face each other with no fence between them.
/// Never contains off-board cells or the opponent's cell.
#[instrument(skip(board))]
pub fn jump_destinations(board: &Board, mover: Coord, opponent: Coord) -> Vec<Coord> {
    let Some(direction) = facing(mover, opponent) else {
        return Vec::new();
    };

    if edge_blocked(board, mover, direction) {
        debug!(%direction, "Fence between pawns, no interaction");
        return Vec::new();
    }

    if !edge_blocked(board, opponent, direction) {
        let beyond = opponent.step(direction);
        debug!(%direction, %beyond, "Straight hop");
        return if beyond.in_bounds() {
            vec![beyond]
        } else {
            Vec::new()
        };
    }

    debug!(%direction, "Fence behind opponent, trying side-steps");
    direction
        .perpendicular()
        .into_iter()
        .filter(|side| !edge_blocked(board, opponent, *side))
        .map(|side| opponent.step(side))
        .filter(|coord| coord.in_bounds())
        .collect()
}
