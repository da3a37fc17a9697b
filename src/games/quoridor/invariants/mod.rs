//! First-class invariants for Quoridor.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod baseline;
pub mod fence_accounting;
pub mod pawn_occupancy;

pub use baseline::BaselineInvariant;
pub use fence_accounting::FenceAccountingInvariant;
pub use pawn_occupancy::PawnOccupancyInvariant;

/// All Quoridor invariants as a composable set.
pub type QuoridorInvariants = (
    PawnOccupancyInvariant,
    FenceAccountingInvariant,
    BaselineInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quoridor::{Coord, Orientation, Player, QuoridorGame};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = QuoridorGame::new();
        assert!(QuoridorInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_actions() {
        let mut game = QuoridorGame::new();
        assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
        assert!(game.place_fence(Player::Two, Orientation::Horizontal, Coord::new(4, 2)));
        assert!(game.move_pawn(Player::One, Coord::new(3, 1)));
        assert!(QuoridorInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = QuoridorGame::new();
        // Stray pawn marker and an unaccounted-for fence.
        if let Some(cell) = game.board.get_mut(Coord::new(0, 4)) {
            cell.set_pawn(Some(Player::Two));
            cell.set_fence(Orientation::Vertical);
        }
        let violations = QuoridorInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = QuoridorGame::new();
        type TwoInvariants = (PawnOccupancyInvariant, BaselineInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
