//! Photon Blocks (workspace facade crate).
//!
//! Re-exports the member crates as `photon_blocks::{core,engine,input,term,types}`
//! so the binary, benches and integration tests share one import path.

pub use photon_blocks_core as core;
pub use photon_blocks_engine as engine;
pub use photon_blocks_input as input;
pub use photon_blocks_term as term;
pub use photon_blocks_types as types;
