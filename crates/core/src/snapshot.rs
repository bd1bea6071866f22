use std::time::Duration;

use crate::pieces::{PieceCells, Shape, Tetromino};
use crate::types::{Cell, GameOverReason, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Visible board grid, indexed `[y][x]`
pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl ActiveSnapshot {
    /// Board cells covered by the piece, shifted down by `dy`
    pub fn cells(&self, dy: i8) -> PieceCells {
        Tetromino::from(*self).cells(0, dy, None)
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color(),
        }
    }
}

impl From<ActiveSnapshot> for Tetromino {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of one tick's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    /// Falling piece; `None` once the game is over
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the falling piece
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub elapsed: Duration,
    pub fall_interval: Duration,
    /// Rows waiting to be removed, indexed by y
    pub clearing: [bool; BOARD_HEIGHT as usize],
    /// Clear animation progress in 0.0..=1.0 (0.0 when nothing is pending)
    pub clear_progress: f32,
    /// Advisory screen-shake intensity in 0.0..=0.5
    pub shake: f32,
    pub game_over: Option<GameOverReason>,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = PieceKind::I;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.elapsed = Duration::ZERO;
        self.fall_interval = Duration::ZERO;
        self.clearing = [false; BOARD_HEIGHT as usize];
        self.clear_progress = 0.0;
        self.shake = 0.0;
        self.game_over = None;
        self.seed = 0;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn has_pending_clear(&self) -> bool {
        self.clearing.iter().any(|&c| c)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            elapsed: Duration::ZERO,
            fall_interval: Duration::ZERO,
            clearing: [false; BOARD_HEIGHT as usize],
            clear_progress: 0.0,
            shake: 0.0,
            game_over: None,
            seed: 0,
        }
    }
}
