//! Board module - the locked-cell grid
//!
//! The board is 10 columns wide with 20 visible rows (y = 0..19, top to bottom)
//! and 30 hidden overhang rows above them (y = -30..-1). Everything lives in one
//! flat row-major array so lookups and row shifts never allocate.
//!
//! Visible cells are only written by locking a piece and only emptied by row
//! removal. Overhang cells can be written by a lock too; any occupied overhang
//! cell ends the game.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, OVERHANG_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Total rows stored, overhang included
const TOTAL_ROWS: usize = (OVERHANG_ROWS as usize) + (BOARD_HEIGHT as usize);

/// Total number of stored cells
const BOARD_SIZE: usize = TOTAL_ROWS * WIDTH;

/// Lowest valid row index (top of the overhang)
pub const TOP_ROW: i8 = -(OVERHANG_ROWS as i8);

/// Ascending list of full visible rows
pub type FullRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x (30 + 20) rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major, row 0 of storage is y = TOP_ROW
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < TOP_ROW || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some(((y - TOP_ROW) as usize) * WIDTH + (x as usize))
    }

    #[inline(always)]
    fn row_start(y: i8) -> usize {
        ((y - TOP_ROW) as usize) * WIDTH
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Visible height (overhang excluded)
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if outside the extended bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and writes nothing) if outside the extended bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the extended bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < TOP_ROW || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        let start = Self::row_start(y);
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Visible rows that are completely filled, ascending
    pub fn find_full_rows(&self) -> FullRows {
        let mut rows = FullRows::new();
        for y in 0..BOARD_HEIGHT as i8 {
            if self.is_row_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove the given visible rows and shift everything above them down.
    ///
    /// Rows are processed in ascending order, so removing a row never moves
    /// a row that is still waiting to be removed. The overhang shifts with the
    /// rest of the board and its topmost row comes in empty. Duplicates and
    /// indices outside the visible field are ignored.
    pub fn clear_rows(&mut self, rows: &[i8]) {
        let mut sorted: FullRows = rows
            .iter()
            .copied()
            .filter(|&y| (0..BOARD_HEIGHT as i8).contains(&y))
            .take(BOARD_HEIGHT as usize)
            .collect();
        sorted.sort_unstable();

        let mut last = None;
        for &y in sorted.iter() {
            if last == Some(y) {
                continue;
            }
            last = Some(y);

            // Everything from the top of storage up to (not including) row y
            // moves down by one row; copy_within handles the overlap.
            let end = Self::row_start(y);
            self.cells.copy_within(0..end, WIDTH);
            self.cells[..WIDTH].fill(None);
        }
    }

    /// Write `kind` into every listed cell.
    ///
    /// Cells outside the extended bounds are dropped silently.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// True if any overhang cell (y < 0) is occupied
    pub fn has_overhang(&self) -> bool {
        let overhang = Self::row_start(0);
        self.cells[..overhang].iter().any(|cell| cell.is_some())
    }

    /// One visible row, or None when `y` is outside 0..BOARD_HEIGHT
    pub fn row(&self, y: i8) -> Option<&[Cell]> {
        if !(0..BOARD_HEIGHT as i8).contains(&y) {
            return None;
        }
        let start = Self::row_start(y);
        Some(&self.cells[start..start + WIDTH])
    }

    /// Copy the visible field into a fixed-size grid.
    pub fn visible_into(&self, out: &mut [[Cell; WIDTH]; BOARD_HEIGHT as usize]) {
        let base = Self::row_start(0);
        for (y, row) in out.iter_mut().enumerate() {
            let start = base + y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Number of occupied visible cells
    pub fn filled_count(&self) -> usize {
        self.cells[Self::row_start(0)..]
            .iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Clear the entire board, overhang included
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a visible row, leaving the listed columns empty.
    #[cfg(test)]
    pub fn fill_row_except(&mut self, y: i8, holes: &[i8], kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
