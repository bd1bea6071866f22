//! Terminal frontend.
//!
//! Renders snapshots into a framebuffer of styled cells and flushes it to a
//! real terminal with crossterm. No widget toolkit: the view computes its own
//! layout so each board cell can be two columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use photon_blocks_core as core;
pub use photon_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{
    encode_diff_into, encode_enter_into, encode_exit_into, encode_full_into, TerminalRenderer,
};
