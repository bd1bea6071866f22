//! Rotation with horizontal kicks.
//!
//! Every kind rotates clockwise around its bounding box. When the rotated
//! shape collides, the piece is nudged sideways by each offset in
//! [`KICK_OFFSETS`] in turn; the first fit wins. The row never changes.

use crate::board::Board;
use crate::collision::is_valid;
use crate::pieces::{Shape, Tetromino};

/// Horizontal offsets tried in order
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Shape after one clockwise turn. Pure.
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated_cw()
}

/// Rotate `piece` clockwise in place if any kick offset fits.
///
/// Returns false and leaves the piece untouched when none does.
pub fn try_rotate(piece: &mut Tetromino, board: &Board) -> bool {
    let rotated = rotate(&piece.shape);
    for &dx in KICK_OFFSETS.iter() {
        if is_valid(piece, board, dx, 0, Some(&rotated)) {
            piece.shape = rotated;
            piece.x += dx;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn open_field_uses_zero_offset() {
        let board = Board::new();
        let mut t = Tetromino::spawn(PieceKind::T);
        t.y = 5;
        assert!(try_rotate(&mut t, &board));
        assert_eq!(t.x, 3);
        assert_eq!(t.y, 5);
        assert_eq!(t.shape, Shape::for_kind(PieceKind::T).rotated_cw());
    }

    #[test]
    fn right_wall_kicks_left() {
        let board = Board::new();
        // Vertical I against the right wall.
        let mut i = Tetromino::spawn(PieceKind::I);
        i.shape = i.shape.rotated_cw();
        i.x = 8;
        i.y = 5;
        assert!(try_rotate(&mut i, &board));
        assert_eq!(i.x, 6);
        assert_eq!(i.shape.rows(), 1);
    }

    #[test]
    fn boxed_in_piece_does_not_rotate() {
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                if !(3..=5).contains(&x) || y < 5 || y > 6 {
                    board.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        let mut t = Tetromino::spawn(PieceKind::T);
        t.y = 5;
        let before = t;
        assert!(!try_rotate(&mut t, &board));
        assert_eq!(t, before);
    }
}
