//! The Quoridor rule engine.
//!
//! [`QuoridorGame`] owns the board, both pawns and both fence inventories.
//! Every mutation goes through [`QuoridorGame::apply`], which checks the
//! action's preconditions first, so a rejected action leaves the game
//! untouched.

use super::action::{Action, ActionError, Transition};
use super::board::{Board, Cell};
use super::contracts::{ActionContract, Contract};
use super::pieces::{Fence, FenceInventory, Pawn};
use super::rules;
use super::types::{Coord, GameStatus, Orientation, Player};
use tracing::{debug, info, instrument};

/// Quoridor game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoridorGame {
    pub(super) board: Board,
    pub(super) pawns: [Pawn; 2],
    pub(super) fences: [FenceInventory; 2],
    pub(super) turn: Player,
    pub(super) status: GameStatus,
}

impl QuoridorGame {
    /// Creates a new game with both pawns on their starting squares.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Board::new();
        let pawns = [Pawn::new(Player::One), Pawn::new(Player::Two)];
        for pawn in &pawns {
            if let Some(cell) = board.get_mut(pawn.position()) {
                cell.set_pawn(Some(pawn.player()));
            }
        }
        Self {
            board,
            pawns,
            fences: [
                FenceInventory::new(Player::One),
                FenceInventory::new(Player::Two),
            ],
            turn: Player::One,
            status: GameStatus::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.board.get(coord)
    }

    /// Returns the player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn current_state(&self) -> GameStatus {
        self.status
    }

    /// True if `player` has won.
    pub fn is_winner(&self, player: Player) -> bool {
        self.status.winner() == Some(player)
    }

    /// Returns a player's pawn.
    pub fn pawn(&self, player: Player) -> &Pawn {
        &self.pawns[player.index()]
    }

    /// Returns a player's fence inventory.
    pub fn inventory(&self, player: Player) -> &FenceInventory {
        &self.fences[player.index()]
    }

    /// Number of fences a player can still place.
    pub fn fences_remaining(&self, player: Player) -> usize {
        self.inventory(player).remaining()
    }

    /// Fences a player has placed, in order.
    pub fn placed_fences(&self, player: Player) -> &[Fence] {
        self.inventory(player).placed()
    }

    /// Legal destinations for the pawn whose turn it is.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.valid_moves_for(self.turn)
    }

    /// Legal destinations for `player`'s pawn, as if it were their turn.
    #[instrument(skip(self))]
    pub fn valid_moves_for(&self, player: Player) -> Vec<Coord> {
        rules::legal_destinations(
            &self.board,
            self.pawn(player).position(),
            self.pawn(player.opponent()).position(),
        )
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Moves `player`'s pawn to `to`.
    ///
    /// Returns `false`, leaving the game unchanged, if the move is rejected.
    /// Use [`QuoridorGame::try_move_pawn`] to learn why.
    pub fn move_pawn(&mut self, player: Player, to: Coord) -> bool {
        self.try_move_pawn(player, to).is_ok()
    }

    /// Places a fence for `player`.
    ///
    /// Returns `false`, leaving the game unchanged, if the placement is
    /// rejected. Use [`QuoridorGame::try_place_fence`] to learn why.
    pub fn place_fence(&mut self, player: Player, orientation: Orientation, at: Coord) -> bool {
        self.try_place_fence(player, orientation, at).is_ok()
    }

    /// Moves `player`'s pawn to `to`, reporting the reason for a rejection.
    pub fn try_move_pawn(&mut self, player: Player, to: Coord) -> Result<Transition, ActionError> {
        self.apply(&Action::move_pawn(player, to))
    }

    /// Places a fence for `player`, reporting the reason for a rejection.
    pub fn try_place_fence(
        &mut self,
        player: Player,
        orientation: Orientation,
        at: Coord,
    ) -> Result<Transition, ActionError> {
        self.apply(&Action::place_fence(player, orientation, at))
    }

    /// Applies an action.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply(&mut self, action: &Action) -> Result<Transition, ActionError> {
        if let Err(e) = ActionContract::pre(self, action) {
            debug!(error = %e, "Action rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let transition = match *action {
            Action::MovePawn { player, to } => self.relocate_pawn(player, to),
            Action::PlaceFence {
                player,
                orientation,
                at,
            } => self.install_fence(player, orientation, at),
        };

        #[cfg(debug_assertions)]
        ActionContract::post(&before, self)?;

        info!(%action, ?transition, "Action applied");
        Ok(transition)
    }

    // ─────────────────────────────────────────────────────────
    //  Unchecked mutation (preconditions already hold)
    // ─────────────────────────────────────────────────────────

    fn relocate_pawn(&mut self, player: Player, to: Coord) -> Transition {
        // A winning move ends the game where it stands: the pawn is not
        // relocated and the turn does not pass.
        if rules::reaches_goal(&self.board, player, to) {
            self.status = GameStatus::Won(player);
            info!(%player, %to, "Pawn reached the opponent's baseline");
            return Transition::Won(player);
        }

        let from = self.pawn(player).position();
        if let Some(cell) = self.board.get_mut(from) {
            cell.set_pawn(None);
        }
        self.pawns[player.index()].set_position(to);
        if let Some(cell) = self.board.get_mut(to) {
            cell.set_pawn(Some(player));
        }
        self.advance_turn()
    }

    fn install_fence(&mut self, player: Player, orientation: Orientation, at: Coord) -> Transition {
        if let Some(cell) = self.board.get_mut(at) {
            cell.set_fence(orientation);
        }
        self.fences[player.index()].dispense(orientation, at);
        self.advance_turn()
    }

    fn advance_turn(&mut self) -> Transition {
        self.turn = self.turn.opponent();
        Transition::Continued { next: self.turn }
    }
}

impl Default for QuoridorGame {
    fn default() -> Self {
        Self::new()
    }
}
