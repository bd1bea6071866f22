//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data: board dimensions, timing defaults, piece kinds
//! and the per-tick intent set. Both the core rules and the frontends depend on
//! this crate, so it carries no game logic.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 visible rows (indexed 0-19, top to bottom)
//! - **Overhang**: 30 hidden rows above the top (indexed -30..-1)
//!
//! Pieces spawn at row -2, so they enter the visible field from above.
//!
//! # Timing Defaults
//!
//! All values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 520 | Gravity interval at level 1 |
//! | `LEVEL_STEP_MS` | 40 | Interval reduction per level |
//! | `MIN_FALL_MS` | 90 | Gravity interval floor |
//! | `MOVE_COOLDOWN_MS` | 110 | Horizontal auto-repeat interval |
//! | `ROTATE_COOLDOWN_MS` | 230 | Rotation auto-repeat interval |
//! | `CLEAR_DURATION_MS` | 280 | Line-clear animation length |
//! | `MAX_FRAME_DT_MS` | 100 | Upper clamp for one tick's elapsed time |
//!
//! # Examples
//!
//! ```
//! use photon_blocks_types::{Intent, Intents, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let intents: Intents = [Intent::MoveLeft, Intent::SoftDrop].into_iter().collect();
//! assert!(intents.contains(Intent::SoftDrop));
//! assert!(!intents.contains(Intent::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Hidden rows above the visible field.
pub const OVERHANG_ROWS: u8 = 30;

/// Row at which every new piece spawns.
pub const SPAWN_Y: i8 = -2;

/// Display frame interval used by the terminal loop (~60 FPS)
pub const FRAME_MS: u64 = 16;

pub const BASE_FALL_MS: u64 = 520;
pub const LEVEL_STEP_MS: u64 = 40;
pub const MIN_FALL_MS: u64 = 90;
pub const MOVE_COOLDOWN_MS: u64 = 110;
pub const ROTATE_COOLDOWN_MS: u64 = 230;

/// Soft-drop cell intervals for the slow, normal and fast modes.
pub const SOFT_DROP_SLOW_MS: u64 = 100;
pub const SOFT_DROP_NORMAL_MS: u64 = 60;
pub const SOFT_DROP_FAST_MS: u64 = 40;

pub const CLEAR_DURATION_MS: u64 = 280;
pub const MAX_FRAME_DT_MS: u64 = 100;

/// Lines needed per level increment.
pub const LINES_PER_LEVEL: u32 = 10;

/// Play time needed per level increment, in seconds.
pub const SECONDS_PER_LEVEL: u64 = 60;

/// Line clear score: `n * LINE_SCORE_BASE + (n - 1) * LINE_SCORE_BONUS`.
pub const LINE_SCORE_BASE: u32 = 120;
pub const LINE_SCORE_BONUS: u32 = 80;

/// Rows cleared at once that earn the screen-shake hint.
pub const SHAKE_MIN_ROWS: usize = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `factor` (clamped to 0.0..=1.0).
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a fixed spawn shape and a fixed display color:
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **T**: violet T
/// - **S**: green S
/// - **Z**: pink Z
/// - **J**: blue J
/// - **L**: orange L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order (the order a fresh bag is filled in).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use photon_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Display color tag for this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 220, 255),
            PieceKind::O => Rgb::new(255, 220, 0),
            PieceKind::T => Rgb::new(200, 90, 255),
            PieceKind::S => Rgb::new(0, 235, 150),
            PieceKind::Z => Rgb::new(255, 80, 120),
            PieceKind::J => Rgb::new(80, 140, 255),
            PieceKind::L => Rgb::new(255, 160, 60),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell; its color comes from the kind
pub type Cell = Option<PieceKind>;

/// Player intents for one tick.
///
/// Movement and soft drop are level-triggered (held). Rotation and hard drop
/// fire once per press, on the rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Restart,
    Quit,
}

impl Intent {
    pub const ALL: [Intent; 7] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::SoftDrop,
        Intent::Rotate,
        Intent::HardDrop,
        Intent::Restart,
        Intent::Quit,
    ];

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::HardDrop => "hardDrop",
            Intent::Restart => "restart",
            Intent::Quit => "quit",
        }
    }
}

/// Set of active intents, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Intents(u8);

impl Intents {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builder-style insert.
    pub fn with(mut self, intent: Intent) -> Self {
        self.insert(intent);
        self
    }

    pub fn insert(&mut self, intent: Intent) {
        self.0 |= intent.bit();
    }

    pub fn remove(&mut self, intent: Intent) {
        self.0 &= !intent.bit();
    }

    pub fn contains(&self, intent: Intent) -> bool {
        self.0 & intent.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Intent> + '_ {
        Intent::ALL.into_iter().filter(|i| self.contains(*i))
    }
}

impl From<Intent> for Intents {
    fn from(intent: Intent) -> Self {
        Self::empty().with(intent)
    }
}

impl FromIterator<Intent> for Intents {
    fn from_iter<T: IntoIterator<Item = Intent>>(iter: T) -> Self {
        let mut set = Self::empty();
        for intent in iter {
            set.insert(intent);
        }
        set
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    /// A piece locked with at least one cell above the visible field.
    LockOut,
    /// The freshly spawned piece overlaps locked cells.
    BlockOut,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::LockOut => "lockOut",
            GameOverReason::BlockOut => "blockOut",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_FALL_MS, 520);
        assert_eq!(LEVEL_STEP_MS, 40);
        assert_eq!(MIN_FALL_MS, 90);
        assert_eq!(MOVE_COOLDOWN_MS, 110);
        assert_eq!(ROTATE_COOLDOWN_MS, 230);
        assert_eq!(CLEAR_DURATION_MS, 280);
        assert_eq!(MAX_FRAME_DT_MS, 100);
    }

    #[test]
    fn intents_insert_remove() {
        let mut set = Intents::empty();
        assert!(set.is_empty());
        set.insert(Intent::HardDrop);
        set.insert(Intent::Rotate);
        assert!(set.contains(Intent::HardDrop));
        assert!(set.contains(Intent::Rotate));
        assert!(!set.contains(Intent::MoveLeft));
        set.remove(Intent::HardDrop);
        assert!(!set.contains(Intent::HardDrop));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Intent::Rotate]);
    }

    #[test]
    fn piece_kind_round_trips_through_str() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
