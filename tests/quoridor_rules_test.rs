//! Tests for pawn movement, fence blocking and winning.

use strictly_quoridor::rules::legal_destinations;
use strictly_quoridor::{ActionError, Board, Coord, GameStatus, Orientation, Player, QuoridorGame, Transition};

fn coords(list: &[(i32, i32)]) -> Vec<Coord> {
    list.iter().copied().map(Coord::from).collect()
}

#[test]
fn test_fresh_game_moves() {
    let game = QuoridorGame::new();
    assert_eq!(game.valid_moves(), coords(&[(3, 0), (4, 1), (5, 0)]));
    assert_eq!(game.valid_moves_for(Player::Two), coords(&[(3, 8), (4, 7), (5, 8)]));
}

#[test]
fn test_open_interior_has_four_neighbors() {
    let board = Board::new();
    let far_away = Coord::new(8, 8);
    for x in 1..8 {
        for y in 1..8 {
            let at = Coord::new(x, y);
            assert_eq!(
                legal_destinations(&board, at, far_away),
                coords(&[(x - 1, y), (x, y - 1), (x, y + 1), (x + 1, y)]),
                "open moves from {}",
                at
            );
        }
    }
}

#[test]
fn test_corner_has_two_neighbors() {
    let board = Board::new();
    assert_eq!(
        legal_destinations(&board, Coord::new(0, 0), Coord::new(8, 8)),
        coords(&[(0, 1), (1, 0)])
    );
    assert_eq!(
        legal_destinations(&board, Coord::new(8, 8), Coord::new(0, 0)),
        coords(&[(7, 8), (8, 7)])
    );
}

#[test]
fn test_horizontal_fence_blocks_both_ways() {
    let mut game = QuoridorGame::new();
    assert!(game.place_fence(Player::One, Orientation::Horizontal, Coord::new(4, 1)));
    assert!(game.move_pawn(Player::Two, Coord::new(4, 7)));

    // From above: (4,0) cannot cross down into (4,1).
    assert_eq!(game.valid_moves(), coords(&[(3, 0), (5, 0)]));
    assert_eq!(
        game.try_move_pawn(Player::One, Coord::new(4, 1)),
        Err(ActionError::IllegalDestination(Coord::new(4, 1)))
    );

    // Walk around and approach from below.
    assert!(game.move_pawn(Player::One, Coord::new(3, 0)));
    assert!(game.move_pawn(Player::Two, Coord::new(4, 6)));
    assert!(game.move_pawn(Player::One, Coord::new(3, 1)));
    assert!(game.move_pawn(Player::Two, Coord::new(4, 5)));
    assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
    assert!(game.move_pawn(Player::Two, Coord::new(4, 4)));

    assert_eq!(game.valid_moves(), coords(&[(3, 1), (4, 2), (5, 1)]));
    assert!(!game.move_pawn(Player::One, Coord::new(4, 0)));
}

#[test]
fn test_vertical_fence_blocks_sideways() {
    let mut game = QuoridorGame::new();
    assert!(game.place_fence(Player::One, Orientation::Vertical, Coord::new(5, 0)));
    assert!(game.move_pawn(Player::Two, Coord::new(4, 7)));
    assert_eq!(game.valid_moves(), coords(&[(3, 0), (4, 1)]));
}

#[test]
fn test_cannot_move_to_far_cell() {
    let mut game = QuoridorGame::new();
    for target in [(4, 2), (5, 1), (4, 0), (-1, 0), (4, 9)] {
        assert!(!game.move_pawn(Player::One, Coord::from(target)));
    }
    assert_eq!(game.current_turn(), Player::One);
}

#[test]
fn test_player_two_wins_on_player_one_baseline() {
    let mut game = QuoridorGame::new();
    for i in 0..7 {
        let shuffle = if i % 2 == 0 { 3 } else { 2 };
        assert!(game.move_pawn(Player::One, Coord::new(shuffle, 0)));
        assert!(game.move_pawn(Player::Two, Coord::new(4, 7 - i)));
    }
    assert!(game.move_pawn(Player::One, Coord::new(2, 0)));
    assert_eq!(game.pawn(Player::Two).position(), Coord::new(4, 1));
    assert_eq!(game.current_state().code(), 0);

    assert_eq!(
        game.try_move_pawn(Player::Two, Coord::new(4, 0)),
        Ok(Transition::Won(Player::Two))
    );
    assert_eq!(game.current_state(), GameStatus::Won(Player::Two));
    assert_eq!(game.current_state().code(), 2);
    assert!(game.is_winner(Player::Two));
    assert_eq!(game.current_turn(), Player::Two);

    // Nothing moves once the game is decided.
    assert_eq!(
        game.try_move_pawn(Player::Two, Coord::new(3, 1)),
        Err(ActionError::GameOver)
    );
    assert_eq!(
        game.try_move_pawn(Player::One, Coord::new(1, 0)),
        Err(ActionError::GameOver)
    );
}

#[test]
fn test_turns_alternate() {
    let mut game = QuoridorGame::new();
    assert_eq!(game.current_turn(), Player::One);
    assert_eq!(game.current_turn().number(), 1);
    assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
    assert_eq!(game.current_turn(), Player::Two);
    assert!(!game.move_pawn(Player::One, Coord::new(4, 2)));
    assert!(game.place_fence(Player::Two, Orientation::Vertical, Coord::new(7, 7)));
    assert_eq!(game.current_turn(), Player::One);
}

#[test]
fn test_cell_queries() {
    let game = QuoridorGame::new();
    let start = game.cell(Coord::new(4, 0)).unwrap();
    assert_eq!(start.pawn(), Some(Player::One));
    assert_eq!(start.baseline(), Some(Player::One));
    assert_eq!(game.cell(Coord::new(0, 8)).unwrap().baseline(), Some(Player::Two));
    assert_eq!(game.cell(Coord::new(0, 4)).unwrap().baseline(), None);
    assert!(game.cell(Coord::new(9, 0)).is_none());
}
