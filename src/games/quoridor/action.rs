//! First-class action types for Quoridor.
//!
//! Actions are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::types::{Coord, Orientation, Player};
use tracing::instrument;

/// A turn-taking action: move the pawn or place a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the player's pawn to `to`.
    MovePawn {
        /// The player moving.
        player: Player,
        /// Destination cell.
        to: Coord,
    },
    /// Place one of the player's fences.
    PlaceFence {
        /// The player placing the fence.
        player: Player,
        /// Fence orientation.
        orientation: Orientation,
        /// Cell receiving the fence.
        at: Coord,
    },
}

impl Action {
    /// Creates a pawn move.
    #[instrument]
    pub fn move_pawn(player: Player, to: Coord) -> Self {
        Action::MovePawn { player, to }
    }

    /// Creates a fence placement.
    #[instrument]
    pub fn place_fence(player: Player, orientation: Orientation, at: Coord) -> Self {
        Action::PlaceFence {
            player,
            orientation,
            at,
        }
    }

    /// Returns the player taking this action.
    pub fn player(&self) -> Player {
        match self {
            Action::MovePawn { player, .. } | Action::PlaceFence { player, .. } => *player,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::MovePawn { player, to } => write!(f, "{} moves to {}", player, to),
            Action::PlaceFence {
                player,
                orientation,
                at,
            } => write!(f, "{} places a {} fence at {}", player, orientation, at),
        }
    }
}

/// What an accepted action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Game continues; `next` is now to move.
    Continued {
        /// Player whose turn it now is.
        next: Player,
    },
    /// The action won the game.
    Won(Player),
}

/// Reason an action was rejected.
///
/// A rejected action never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The destination is not among the pawn's legal moves.
    #[display("{} is not a legal destination", _0)]
    IllegalDestination(Coord),

    /// The coordinates are off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Coord),

    /// The fence would sit on the board boundary.
    #[display("A {} fence cannot be placed on the board edge at {}", _0, _1)]
    OuterEdge(Orientation, Coord),

    /// A fence of this orientation is already at the cell.
    #[display("A {} fence is already at {}", _0, _1)]
    FenceAlreadyPlaced(Orientation, Coord),

    /// The player has used all their fences.
    #[display("{} has no fences left", _0)]
    NoFencesLeft(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}
