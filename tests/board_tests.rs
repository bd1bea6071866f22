//! Board tests - grid bounds, full rows, row removal

use photon_blocks::core::{Board, TOP_ROW};
use photon_blocks::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in TOP_ROW..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
    assert!(!board.has_overhang());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert_eq!(board.get(0, TOP_ROW - 1), None);

    // The overhang is addressable.
    assert_eq!(board.get(0, -1), Some(None));
    assert_eq!(board.get(0, TOP_ROW), Some(None));
}

#[test]
fn test_board_set_rejects_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 5, Some(PieceKind::T)));
    assert!(!board.set(0, 20, Some(PieceKind::T)));
    assert!(board.set(9, 19, Some(PieceKind::T)));
    assert!(board.is_occupied(9, 19));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_full_row_detection() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::O);
    for x in 0..9 {
        board.set(x, 18, Some(PieceKind::Z));
    }

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert_eq!(board.find_full_rows().as_slice(), &[17, 19]);
}

#[test]
fn test_clear_single_row_shifts_above_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::T));
    board.set(7, 10, Some(PieceKind::S));

    board.clear_rows(&[19]);

    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 11), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 10), Some(None));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::J));
    fill_row(&mut board, 17, PieceKind::I);
    board.set(4, 16, Some(PieceKind::L));

    // Order and duplicates do not matter.
    board.clear_rows(&[19, 17, 19]);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(4, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
    assert!(board.find_full_rows().is_empty());
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(3, 15, Some(PieceKind::O));

    board.clear_rows(&[16, 17, 18, 19]);

    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_clear_shifts_overhang_into_view() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(5, -1, Some(PieceKind::T));
    assert!(board.has_overhang());

    board.clear_rows(&[19]);

    assert!(!board.has_overhang());
    assert_eq!(board.get(5, 0), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_ignores_rows_outside_field() {
    let mut board = Board::new();
    board.set(1, 19, Some(PieceKind::I));
    board.clear_rows(&[-3, 20, 42]);
    assert_eq!(board.get(1, 19), Some(Some(PieceKind::I)));
}

#[test]
fn test_visible_grid_copy() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::L));
    board.set(9, 19, Some(PieceKind::Z));
    board.set(4, -2, Some(PieceKind::I));

    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.visible_into(&mut grid);

    assert_eq!(grid[0][0], Some(PieceKind::L));
    assert_eq!(grid[19][9], Some(PieceKind::Z));
    assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 2);
    assert_eq!(board.row(19).map(|r| r[9]), Some(Some(PieceKind::Z)));
    assert!(board.row(-1).is_none());
}
