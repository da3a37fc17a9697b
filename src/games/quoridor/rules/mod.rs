//! Movement rules for Quoridor.
//!
//! Pure functions over a [`Board`](super::Board) and pawn coordinates.
//! Rules are separated from the engine so each step of move generation
//! can be tested on its own.

pub mod adjacency;
pub mod jump;
pub mod win;

pub use adjacency::{edge_blocked, open_neighbors, orthogonal_neighbors};
pub use jump::{facing, jump_destinations};
pub use win::reaches_goal;

use super::{Board, Coord};
use tracing::{instrument, trace};

/// Every cell the pawn at `mover` may move to.
///
/// Combines the fence-filtered orthogonal moves with any hop or diagonal
/// side-step over the opponent. The opponent's own cell is never included.
/// The result is sorted and free of duplicates.
#[instrument(skip(board))]
pub fn legal_destinations(board: &Board, mover: Coord, opponent: Coord) -> Vec<Coord> {
    let mut destinations: Vec<Coord> = open_neighbors(board, mover)
        .into_iter()
        .chain(jump_destinations(board, mover, opponent))
        .filter(|c| *c != opponent)
        .collect();
    destinations.sort();
    destinations.dedup();
    trace!(count = destinations.len(), "Computed legal destinations");
    destinations
}
