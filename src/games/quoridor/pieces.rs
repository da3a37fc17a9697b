//! Pawns and fences.

use super::types::{Coord, FENCES_PER_PLAYER, Orientation, Player};
use std::collections::VecDeque;

/// A player's pawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pawn {
    player: Player,
    position: Coord,
}

impl Pawn {
    /// Creates a pawn on the owner's starting square.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            position: player.start(),
        }
    }

    /// Owner of the pawn.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Current position.
    pub fn position(&self) -> Coord {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }
}

/// Where and how a fence was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Orientation of the placed fence.
    pub orientation: Orientation,
    /// Cell the fence was placed on.
    pub at: Coord,
}

/// A single fence, unplaced until dispensed from an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    owner: Player,
    placement: Option<Placement>,
}

impl Fence {
    fn new(owner: Player) -> Self {
        Self {
            owner,
            placement: None,
        }
    }

    /// Player the fence belongs to.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Placement, or `None` while the fence is still in the inventory.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Coordinates of the fence once placed.
    pub fn coordinates(&self) -> Option<Coord> {
        self.placement.map(|p| p.at)
    }

    /// True once the fence is on the board.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}

/// A player's supply of fences.
///
/// Fences leave the front of the unplaced queue in order and are never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceInventory {
    owner: Player,
    unplaced: VecDeque<Fence>,
    placed: Vec<Fence>,
}

impl FenceInventory {
    /// Creates a full inventory of [`FENCES_PER_PLAYER`] fences.
    pub fn new(owner: Player) -> Self {
        Self {
            owner,
            unplaced: (0..FENCES_PER_PLAYER).map(|_| Fence::new(owner)).collect(),
            placed: Vec::with_capacity(FENCES_PER_PLAYER),
        }
    }

    /// Player the inventory belongs to.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Number of fences still available.
    pub fn remaining(&self) -> usize {
        self.unplaced.len()
    }

    /// True when no fences are left to place.
    pub fn is_empty(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Fences already on the board, in placement order.
    pub fn placed(&self) -> &[Fence] {
        &self.placed
    }

    /// Takes the next fence and records its placement.
    ///
    /// Returns `None` if the inventory is exhausted.
    pub(crate) fn dispense(&mut self, orientation: Orientation, at: Coord) -> Option<&Fence> {
        let mut fence = self.unplaced.pop_front()?;
        fence.placement = Some(Placement { orientation, at });
        self.placed.push(fence);
        self.placed.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_starts_on_baseline() {
        assert_eq!(Pawn::new(Player::One).position(), Coord::new(4, 0));
        assert_eq!(Pawn::new(Player::Two).position(), Coord::new(4, 8));
    }

    #[test]
    fn test_inventory_starts_full_and_unplaced() {
        let inventory = FenceInventory::new(Player::Two);
        assert_eq!(inventory.remaining(), FENCES_PER_PLAYER);
        assert!(inventory.placed().is_empty());
        assert!(inventory.unplaced.iter().all(|f| !f.is_placed() && f.owner() == Player::Two));
    }

    #[test]
    fn test_dispense_records_placement() {
        let mut inventory = FenceInventory::new(Player::One);
        let fence = inventory
            .dispense(Orientation::Vertical, Coord::new(3, 2))
            .expect("fence available");

        assert_eq!(fence.coordinates(), Some(Coord::new(3, 2)));
        assert_eq!(
            fence.placement().map(|p| p.orientation),
            Some(Orientation::Vertical)
        );
        assert_eq!(inventory.remaining(), FENCES_PER_PLAYER - 1);
        assert_eq!(inventory.placed().len(), 1);
    }

    #[test]
    fn test_dispense_exhausts() {
        let mut inventory = FenceInventory::new(Player::One);
        for i in 0..FENCES_PER_PLAYER {
            assert!(inventory.dispense(Orientation::Horizontal, Coord::new(i as i32 % 9, 1)).is_some());
        }
        assert!(inventory.is_empty());
        assert!(inventory.dispense(Orientation::Horizontal, Coord::new(0, 1)).is_none());
        assert_eq!(inventory.placed().len(), FENCES_PER_PLAYER);
    }
}
