//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every gameplay rule and no I/O. Time is passed in as a
//! [`Duration`](std::time::Duration) per frame and the piece supply is seeded,
//! so the same seed and the same (dt, intents) sequence always produce the
//! same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 field plus a 30-row overhang, full-row detection and removal
//! - [`pieces`]: shape matrices and the falling piece
//! - [`rotation`]: clockwise rotation with horizontal kicks
//! - [`collision`]: placement validity, locking, ghost projection
//! - [`rng`]: seeded 7-bag piece supply
//! - [`scoring`]: line-clear score, level target, fall curve
//! - [`config`]: tunables with serde support
//! - [`events`]: per-tick event records
//! - [`game_engine`]: the per-tick update
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every aligned run of seven pieces holds each kind once
//! - **Kick Rotation**: clockwise only, offsets `[0, -1, +1, -2, +2]`
//! - **No Lock Delay**: a piece locks on the first gravity step that cannot descend
//! - **Animated Clears**: full rows stay solid for the clear duration, then vanish
//! - **Scoring**: `n * 120 + (n - 1) * 80` per clear of `n` rows
//! - **Levels**: one per 10 lines and one per minute of play
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use photon_blocks_core::GameEngine;
//! use photon_blocks_core::types::{Intent, Intents};
//!
//! let mut game = GameEngine::with_seed(12345);
//! let snap = game.update(Duration::from_millis(16), Intents::from(Intent::HardDrop));
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(!snap.is_game_over());
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod events;
pub mod game_engine;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
mod serde_millis;
pub mod snapshot;

pub use photon_blocks_types as types;

pub use board::{Board, FullRows, TOP_ROW};
pub use collision::{clear_rows, find_full_rows, ghost_y, is_valid, lock};
pub use config::{ConfigError, EngineConfig, SoftDropMode};
pub use events::EngineEvent;
pub use game_engine::{EngineEvents, GameEngine};
pub use pieces::{PieceCells, Shape, Tetromino};
pub use rng::PieceSupply;
pub use rotation::{rotate, try_rotate, KICK_OFFSETS};
pub use scoring::{fall_interval, line_clear_score, target_level};
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
