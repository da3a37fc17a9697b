//! Fence accounting invariant: every fence is either in hand or on the board.

use super::super::{FENCES_PER_PLAYER, Orientation, Player, QuoridorGame};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: Fences are conserved.
///
/// For each player, remaining plus placed fences equals the starting supply,
/// every placed fence is flagged on the board, and the board holds no fence
/// that neither player placed.
pub struct FenceAccountingInvariant;

impl Invariant<QuoridorGame> for FenceAccountingInvariant {
    fn holds(game: &QuoridorGame) -> bool {
        let conserved = Player::iter().all(|player| {
            let inventory = game.inventory(player);
            inventory.remaining() + inventory.placed().len() == FENCES_PER_PLAYER
        });

        let flagged = Player::iter()
            .flat_map(|player| game.placed_fences(player))
            .all(|fence| {
                fence.placement().is_some_and(|p| {
                    game.cell(p.at).is_some_and(|cell| cell.has_fence(p.orientation))
                })
            });

        let placed_total: usize = Player::iter()
            .map(|player| game.placed_fences(player).len())
            .sum();
        let on_board: usize = Orientation::iter()
            .map(|orientation| game.board().fence_count(orientation))
            .sum();

        conserved && flagged && placed_total == on_board
    }

    fn description() -> &'static str {
        "Every fence is either in its owner's hand or flagged on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quoridor::Coord;

    #[test]
    fn test_new_game_holds() {
        assert!(FenceAccountingInvariant::holds(&QuoridorGame::new()));
    }

    #[test]
    fn test_holds_after_both_orientations_on_one_cell() {
        let mut game = QuoridorGame::new();
        assert!(game.place_fence(Player::One, Orientation::Horizontal, Coord::new(1, 1)));
        assert!(game.place_fence(Player::Two, Orientation::Vertical, Coord::new(1, 1)));
        assert!(FenceAccountingInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_fence_violates() {
        let mut game = QuoridorGame::new();
        if let Some(cell) = game.board.get_mut(Coord::new(5, 5)) {
            cell.set_fence(Orientation::Horizontal);
        }
        assert!(!FenceAccountingInvariant::holds(&game));
    }

    #[test]
    fn test_dispensed_fence_without_flag_violates() {
        let mut game = QuoridorGame::new();
        game.fences[1].dispense(Orientation::Vertical, Coord::new(3, 3));
        assert!(!FenceAccountingInvariant::holds(&game));
    }
}
