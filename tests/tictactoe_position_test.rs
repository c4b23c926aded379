//! Tests for tic-tac-toe positions and move sets.

use strictly_tictactoe::{MoveSet, Position, WINNING_COMBINATIONS};

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
fn test_valid_moves_empty_board() {
    let valid = Position::valid_moves(&MoveSet::new());
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let occupied = MoveSet::from_positions(&[Position::TopLeft, Position::Center]);

    let valid = Position::valid_moves(&occupied);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_winning_combinations_table() {
    let as_indices: Vec<[usize; 3]> = WINNING_COMBINATIONS
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        as_indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}
