//! Orthogonal adjacency and fence blocking.

use super::super::{Board, Coord, Direction};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether a fence blocks a step from `from` in `direction`.
///
/// Horizontal fences sit on a cell's top edge and vertical fences on its
/// left edge, so stepping down or right consults the neighbouring cell.
/// Lookups that fall off the board report no fence.
#[instrument(skip(board))]
pub fn edge_blocked(board: &Board, from: Coord, direction: Direction) -> bool {
    match direction {
        Direction::Up => board.horizontal_fence_at(from),
        Direction::Down => board.horizontal_fence_at(from.step(Direction::Down)),
        Direction::Left => board.vertical_fence_at(from),
        Direction::Right => board.vertical_fence_at(from.step(Direction::Right)),
    }
}

/// On-board orthogonal neighbours of `from`, paired with their direction.
///
/// Fences are not consulted.
pub fn orthogonal_neighbors(from: Coord) -> impl Iterator<Item = (Direction, Coord)> {
    Direction::iter()
        .map(move |direction| (direction, from.step(direction)))
        .filter(|(_, coord)| coord.in_bounds())
}

/// Orthogonal neighbours of `from` that are not cut off by a fence.
///
/// Pawn-to-pawn interaction is ignored here.
#[instrument(skip(board))]
pub fn open_neighbors(board: &Board, from: Coord) -> Vec<Coord> {
    orthogonal_neighbors(from)
        .filter(|(direction, _)| !edge_blocked(board, from, *direction))
        .map(|(_, coord)| coord)
        .collect()
}
