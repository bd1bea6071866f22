//! Collision and locking rules.
//!
//! A placement is valid when every filled cell is inside the side walls, above
//! the floor, and (for visible rows) not overlapping a locked cell. Cells in
//! the overhang are exempt from the occupancy test only.

use crate::board::{Board, FullRows};
use crate::pieces::{Shape, Tetromino};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece`, translated by (dx, dy) and optionally using a
/// substitute shape, fits on the board.
pub fn is_valid(piece: &Tetromino, board: &Board, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
    piece.cells(dx, dy, shape).iter().all(|&(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// Write the piece's kind into every cell it covers, overhang included.
pub fn lock(piece: &Tetromino, board: &mut Board) {
    board.lock_cells(&piece.cells(0, 0, None), piece.kind);
}

/// Row the piece would come to rest on if dropped straight down.
pub fn ghost_y(piece: &Tetromino, board: &Board) -> i8 {
    let mut dy = 0;
    while is_valid(piece, board, 0, dy + 1, None) {
        dy += 1;
    }
    piece.y + dy
}

pub fn find_full_rows(board: &Board) -> FullRows {
    board.find_full_rows()
}

pub fn clear_rows(board: &mut Board, rows: &[i8]) {
    board.clear_rows(rows);
}
