//! Tests for tic-tac-toe positions and board snapshots.

use tictactoe_timetravel::{Board, Location, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_location_matches_index_arithmetic() {
    for i in 0..9 {
        let pos = Position::from_index(i).unwrap();
        assert_eq!(pos.location(), Location::new(i / 3, i % 3));
    }
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    assert_eq!(board.empty_positions().len(), 9);

    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = board.empty_positions();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
