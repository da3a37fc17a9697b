//! The 9×9 board and its cells.
//!
//! The board is a plain data store: it answers lookups and accepts writes
//! from the engine but performs no rule validation of its own.

use super::types::{BOARD_SIZE, Coord, Orientation, Player};

/// A single square of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    pawn: Option<Player>,
    vertical_fence: bool,
    horizontal_fence: bool,
    baseline: Option<Player>,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        let baseline = if coord.y == Player::One.baseline_row() {
            Some(Player::One)
        } else if coord.y == Player::Two.baseline_row() {
            Some(Player::Two)
        } else {
            None
        };
        Self {
            coord,
            pawn: None,
            vertical_fence: false,
            horizontal_fence: false,
            baseline,
        }
    }

    /// Coordinates of this cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The pawn standing on this cell, if any.
    pub fn pawn(&self) -> Option<Player> {
        self.pawn
    }

    /// True if a vertical fence runs along the cell's left edge.
    pub fn has_vertical_fence(&self) -> bool {
        self.vertical_fence
    }

    /// True if a horizontal fence runs along the cell's top edge.
    pub fn has_horizontal_fence(&self) -> bool {
        self.horizontal_fence
    }

    /// True if a fence of the given orientation is on this cell.
    pub fn has_fence(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal_fence,
            Orientation::Vertical => self.vertical_fence,
        }
    }

    /// Which player's baseline this cell belongs to, if any.
    pub fn baseline(&self) -> Option<Player> {
        self.baseline
    }

    pub(crate) fn set_pawn(&mut self, pawn: Option<Player>) {
        self.pawn = pawn;
    }

    pub(crate) fn set_fence(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Horizontal => self.horizontal_fence = true,
            Orientation::Vertical => self.vertical_fence = true,
        }
    }
}

/// 9×9 Quoridor board, stored row-major as `cells[row][column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board with both baselines marked.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| Cell::new(Coord::new(col as i32, row as i32)))
            }),
        }
    }

    fn slot(coord: Coord) -> Option<(usize, usize)> {
        coord
            .in_bounds()
            .then(|| (coord.y as usize, coord.x as usize))
    }

    /// Gets the cell at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        Self::slot(coord).map(|(row, col)| &self.cells[row][col])
    }

    pub(crate) fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        Self::slot(coord).map(|(row, col)| &mut self.cells[row][col])
    }

    /// Horizontal fence flag at `coord`; off-board lookups report no fence.
    pub fn horizontal_fence_at(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::has_horizontal_fence)
    }

    /// Vertical fence flag at `coord`; off-board lookups report no fence.
    pub fn vertical_fence_at(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::has_vertical_fence)
    }

    /// Rows of the board, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of fences of the given orientation on the board.
    pub fn fence_count(&self, orientation: Orientation) -> usize {
        self.cells().filter(|cell| cell.has_fence(orientation)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
