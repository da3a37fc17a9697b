//! Contract-based validation for Quoridor.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Action, ActionError};
use super::game::QuoridorGame;
use super::invariants::{InvariantSet, QuoridorInvariants};
use super::types::{Coord, Orientation, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Shared Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: Nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the game is decided.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame) -> Result<(), ActionError> {
        if game.current_state().is_over() {
            Err(ActionError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails if `player` is not to move.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame, player: Player) -> Result<(), ActionError> {
        if player != game.current_turn() {
            Err(ActionError::WrongPlayer(player))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Pawn Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The destination is one of the mover's legal moves.
pub struct DestinationReachable;

impl DestinationReachable {
    /// Fails if `to` is not in the mover's legal destination set.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame, player: Player, to: Coord) -> Result<(), ActionError> {
        if game.valid_moves_for(player).contains(&to) {
            Ok(())
        } else {
            Err(ActionError::IllegalDestination(to))
        }
    }
}

/// Composite precondition for moving a pawn.
pub struct LegalPawnMove;

impl LegalPawnMove {
    /// Validates all preconditions for a pawn move.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame, player: Player, to: Coord) -> Result<(), ActionError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(game, player)?;
        DestinationReachable::check(game, player, to)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Fence Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The player still has a fence to place.
pub struct FencesRemaining;

impl FencesRemaining {
    /// Fails when the player's inventory is empty.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame, player: Player) -> Result<(), ActionError> {
        if game.fences_remaining(player) == 0 {
            Err(ActionError::NoFencesLeft(player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The fence's cell is on the board.
pub struct FenceOnBoard;

impl FenceOnBoard {
    /// Fails if `at` is outside 0..=8 on either axis.
    #[instrument]
    pub fn check(at: Coord) -> Result<(), ActionError> {
        if at.in_bounds() {
            Ok(())
        } else {
            Err(ActionError::OutOfBounds(at))
        }
    }
}

/// Precondition: The fence does not sit on the board's outer boundary.
pub struct FenceOffOuterEdge;

impl FenceOffOuterEdge {
    /// Fails for horizontal fences on row 0 and vertical fences on column 0.
    #[instrument]
    pub fn check(orientation: Orientation, at: Coord) -> Result<(), ActionError> {
        if orientation.on_outer_edge(at) {
            Err(ActionError::OuterEdge(orientation, at))
        } else {
            Ok(())
        }
    }
}

/// Precondition: No fence of the same orientation occupies the cell.
pub struct FenceSlotFree;

impl FenceSlotFree {
    /// Fails if the cell already has a fence of this orientation.
    #[instrument(skip(game))]
    pub fn check(game: &QuoridorGame, orientation: Orientation, at: Coord) -> Result<(), ActionError> {
        if game.cell(at).is_some_and(|cell| cell.has_fence(orientation)) {
            Err(ActionError::FenceAlreadyPlaced(orientation, at))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for placing a fence.
pub struct LegalFencePlacement;

impl LegalFencePlacement {
    /// Validates all preconditions for a fence placement.
    #[instrument(skip(game))]
    pub fn check(
        game: &QuoridorGame,
        player: Player,
        orientation: Orientation,
        at: Coord,
    ) -> Result<(), ActionError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(game, player)?;
        FencesRemaining::check(game, player)?;
        FenceOnBoard::check(at)?;
        FenceOffOuterEdge::check(orientation, at)?;
        FenceSlotFree::check(game, orientation, at)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for all turn actions.
///
/// Postconditions:
/// - All game invariants hold
/// - The turn passed to the opponent, unless the action won the game
pub struct ActionContract;

impl Contract<QuoridorGame, Action> for ActionContract {
    fn pre(game: &QuoridorGame, action: &Action) -> Result<(), ActionError> {
        match *action {
            Action::MovePawn { player, to } => LegalPawnMove::check(game, player, to),
            Action::PlaceFence {
                player,
                orientation,
                at,
            } => LegalFencePlacement::check(game, player, orientation, at),
        }
    }

    fn post(before: &QuoridorGame, after: &QuoridorGame) -> Result<(), ActionError> {
        QuoridorInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected_turn = if after.current_state().is_over() {
            before.current_turn()
        } else {
            before.current_turn().opponent()
        };
        if after.current_turn() != expected_turn {
            warn!(%expected_turn, actual = %after.current_turn(), "Turn did not alternate");
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: turn did not alternate".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_legal_move() {
        let game = QuoridorGame::new();
        let action = Action::move_pawn(Player::One, Coord::new(4, 1));
        assert!(ActionContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = QuoridorGame::new();
        let action = Action::move_pawn(Player::Two, Coord::new(4, 7));
        assert_eq!(
            ActionContract::pre(&game, &action),
            Err(ActionError::WrongPlayer(Player::Two))
        );
    }

    #[test]
    fn test_precondition_illegal_destination() {
        let game = QuoridorGame::new();
        let action = Action::move_pawn(Player::One, Coord::new(5, 1));
        assert_eq!(
            ActionContract::pre(&game, &action),
            Err(ActionError::IllegalDestination(Coord::new(5, 1)))
        );
    }

    #[test]
    fn test_fence_checks_run_in_order() {
        let game = QuoridorGame::new();
        // Off the board and on the edge at once: bounds are reported first.
        assert_eq!(
            LegalFencePlacement::check(&game, Player::One, Orientation::Horizontal, Coord::new(9, 0)),
            Err(ActionError::OutOfBounds(Coord::new(9, 0)))
        );
        // Wrong turn beats everything about the fence itself.
        assert_eq!(
            LegalFencePlacement::check(&game, Player::Two, Orientation::Vertical, Coord::new(0, 3)),
            Err(ActionError::WrongPlayer(Player::Two))
        );
    }

    #[test]
    fn test_outer_edge() {
        assert!(FenceOffOuterEdge::check(Orientation::Horizontal, Coord::new(5, 0)).is_err());
        assert!(FenceOffOuterEdge::check(Orientation::Vertical, Coord::new(0, 5)).is_err());
        assert!(FenceOffOuterEdge::check(Orientation::Horizontal, Coord::new(0, 5)).is_ok());
        assert!(FenceOffOuterEdge::check(Orientation::Vertical, Coord::new(5, 0)).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = QuoridorGame::new();
        let mut after = before.clone();
        assert!(after.move_pawn(Player::One, Coord::new(3, 0)));
        assert!(ActionContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_turn_change() {
        let before = QuoridorGame::new();
        let mut after = before.clone();
        assert!(after.place_fence(Player::One, Orientation::Vertical, Coord::new(2, 2)));
        after.turn = Player::One;
        assert!(ActionContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = QuoridorGame::new();
        let mut after = before.clone();
        assert!(after.move_pawn(Player::One, Coord::new(4, 1)));
        // A stray pawn marker left behind.
        if let Some(cell) = after.board.get_mut(Coord::new(4, 0)) {
            cell.set_pawn(Some(Player::One));
        }
        assert!(matches!(
            ActionContract::post(&before, &after),
            Err(ActionError::InvariantViolation(_))
        ));
    }
}
