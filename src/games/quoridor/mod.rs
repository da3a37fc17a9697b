//! Quoridor: race a pawn across a 9×9 board while fencing in the opponent.

mod action;
mod board;
mod game;
mod pieces;
mod types;

pub mod contracts;
pub mod invariants;
pub mod notation;
pub mod render;
pub mod rules;

pub use action::{Action, ActionError, Transition};
pub use board::{Board, Cell};
pub use game::QuoridorGame;
pub use pieces::{Fence, FenceInventory, Pawn, Placement};
pub use types::{BOARD_SIZE, Coord, Direction, FENCES_PER_PLAYER, GameStatus, Orientation, Player};
