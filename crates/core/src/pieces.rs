//! Pieces module - tetromino shapes and the falling piece entity
//!
//! Shapes are small boolean matrices (at most 4x4) rather than fixed mino
//! offset tables, so rotation is a plain matrix transform and every kind goes
//! through the same code path.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb, BOARD_WIDTH, SPAWN_Y};

/// Largest shape dimension
pub const MAX_SHAPE_DIM: usize = 4;

/// Board coordinates of a piece's filled cells, row-major over the shape
pub type PieceCells = ArrayVec<(i8, i8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Spawn-orientation rows for each kind (top to bottom)
const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

/// Rectangular boolean shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Spawn shape for a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        let rows = match kind {
            PieceKind::I => I_ROWS,
            PieceKind::O => O_ROWS,
            PieceKind::T => T_ROWS,
            PieceKind::S => S_ROWS,
            PieceKind::Z => Z_ROWS,
            PieceKind::J => J_ROWS,
            PieceKind::L => L_ROWS,
        };
        Self::from_rows(rows)
    }

    /// Build a shape from 0/1 rows.
    ///
    /// Anything beyond 4x4 is ignored; the column count is taken from the
    /// widest row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let n_rows = rows.len().min(MAX_SHAPE_DIM);
        let mut n_cols = 0;
        for (r, row) in rows.iter().take(n_rows).enumerate() {
            n_cols = n_cols.max(row.len().min(MAX_SHAPE_DIM));
            for (c, &v) in row.iter().take(MAX_SHAPE_DIM).enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: n_rows as u8,
            cols: n_cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether matrix cell (row, col) is filled; false outside the matrix
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// 90 degrees clockwise. An R x C matrix becomes C x R with
    /// `out[j][R - 1 - i] = self[i][j]`.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..r {
            for j in 0..c {
                cells[j][r - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Filled cells as (col, row) offsets, row-major
    pub fn offsets(&self) -> PieceCells {
        let mut out = PieceCells::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v).count()
    }
}

/// Active falling piece
///
/// `(x, y)` is the top-left corner of the shape's bounding box in board
/// coordinates. `y` may be negative while the piece is in the overhang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece at its spawn position: horizontally centered
    /// (rounded toward the left), two rows above the visible field.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::for_kind(kind);
        let x = ((BOARD_WIDTH - shape.cols()) / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Board coordinates of the filled cells after translating by (dx, dy),
    /// optionally with a substitute shape.
    pub fn cells(&self, dx: i8, dy: i8, shape: Option<&Shape>) -> PieceCells {
        let shape = shape.unwrap_or(&self.shape);
        shape
            .offsets()
            .into_iter()
            .map(|(c, r)| (self.x + dx + c, self.y + dy + r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = Shape::for_kind(kind);
            assert_eq!(shape.filled_count(), 4, "{:?}", kind);
            assert_eq!(shape.rotated_cw().filled_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let j = Shape::for_kind(PieceKind::J);
        assert_eq!((j.rows(), j.cols()), (2, 3));
        let r = j.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (3, 2));
        assert_eq!(r, Shape::from_rows(&[&[1, 1], &[1, 0], &[1, 0]]));
    }

    #[test]
    fn four_rotations_return_to_start() {
        for kind in PieceKind::ALL {
            let s = Shape::for_kind(kind);
            let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(s, back, "{:?}", kind);
        }
    }

    #[test]
    fn spawn_positions() {
        assert_eq!(Tetromino::spawn(PieceKind::I).x, 3);
        assert_eq!(Tetromino::spawn(PieceKind::O).x, 4);
        assert_eq!(Tetromino::spawn(PieceKind::T).x, 3);
        for kind in PieceKind::ALL {
            assert_eq!(Tetromino::spawn(kind).y, -2);
        }
    }

    #[test]
    fn cells_are_row_major() {
        let t = Tetromino::spawn(PieceKind::T);
        assert_eq!(
            t.cells(0, 0, None).as_slice(),
            &[(4, -2), (3, -1), (4, -1), (5, -1)]
        );
        assert_eq!(
            t.cells(1, 2, None).as_slice(),
            &[(5, 0), (4, 1), (5, 1), (6, 1)]
        );
    }
}
