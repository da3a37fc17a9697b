//! Text rendering of a Quoridor game.
//!
//! Reads the engine through its public queries only.
//!
//! Legend:
//! - `|` vertical fence (left edge of the cell)
//! - `‾‾` horizontal fence (top edge of the cell)
//! - `|‾‾` both fences
//! - `P1`, `| P1`, `‾P1‾`, `| ‾P1‾` a pawn, alone or with fences
//! - `(x,y)` an empty cell

use super::{Cell, Player, QuoridorGame};
use strum::IntoEnumIterator;
use tracing::instrument;

const CELL_WIDTH: usize = 8;

fn cell_token(cell: &Cell) -> String {
    let vertical = cell.has_vertical_fence();
    let horizontal = cell.has_horizontal_fence();
    match cell.pawn() {
        Some(player) => {
            let pawn = format!("P{}", player.number());
            match (vertical, horizontal) {
                (true, true) => format!("| ‾{}‾", pawn),
                (true, false) => format!("| {}", pawn),
                (false, true) => format!("‾{}‾", pawn),
                (false, false) => pawn,
            }
        }
        None => match (vertical, horizontal) {
            (true, true) => "|‾‾".to_string(),
            (true, false) => "|".to_string(),
            (false, true) => "‾‾".to_string(),
            (false, false) => format!("({},{})", cell.coord().x, cell.coord().y),
        },
    }
}

/// Formats the board as a grid, row 0 at the top.
#[instrument(skip(game))]
pub fn render_board(game: &QuoridorGame) -> String {
    game.board()
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:<width$}", cell_token(cell), width = CELL_WIDTH))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of whose turn it is and the fences left.
#[instrument(skip(game))]
pub fn render_status(game: &QuoridorGame) -> String {
    let fences = Player::iter()
        .map(|player| format!("P{} fences: {}", player.number(), game.fences_remaining(player)))
        .collect::<Vec<_>>()
        .join(", ");
    match game.current_state().winner() {
        Some(winner) => format!("{} has won. {}", winner, fences),
        None => format!("{} to move. {}", game.current_turn(), fences),
    }
}
