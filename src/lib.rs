//! Strictly Quoridor - a type-safe Quoridor rules engine
//!
//! Two pawns race across a 9×9 board; each player may instead spend a turn
//! placing one of ten fences to block the other's way.
//!
//! # Architecture
//!
//! - **Engine**: [`QuoridorGame`] owns all state and validates every action
//!   through contracts before mutating anything
//! - **Rules**: stateless adjacency, jump and goal functions in [`rules`]
//! - **Invariants**: whole-game consistency checks run after each action in
//!   debug builds
//! - **Session**: a line-oriented command driver over any reader and writer
//!
//! # Example
//!
//! ```
//! use strictly_quoridor::{Coord, Orientation, Player, QuoridorGame};
//!
//! let mut game = QuoridorGame::new();
//! assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
//! assert!(game.place_fence(Player::Two, Orientation::Horizontal, Coord::new(4, 2)));
//! assert!(!game.valid_moves().contains(&Coord::new(4, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Session driver
pub use session::{Reply, Session, SessionError};

// Crate-level exports - Game types
pub use games::quoridor::{
    Action, ActionError, BOARD_SIZE, Board, Cell, Coord, Direction, FENCES_PER_PLAYER, Fence,
    FenceInventory, GameStatus, Orientation, Pawn, Placement, Player, QuoridorGame, Transition,
};

// Crate-level exports - Rules, contracts, rendering and notation
pub use games::quoridor::{contracts, invariants, notation, render, rules};
