//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s and tracks which
//! keys are held so each frame can hand the engine a level-triggered
//! [`crate::types::Intents`] set, including on terminals without key-release
//! events.

pub mod map;
pub mod tracker;

pub use photon_blocks_types as types;

pub use map::{intent_for_key, should_quit};
pub use tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT};
