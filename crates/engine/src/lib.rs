//! Game runtime.
//!
//! Glue between the pure core and a frontend: frame pacing, configuration
//! loading, the JSON-lines event log, and [`Session`], which runs one game
//! per frame and forwards its events to the log.

pub mod clock;
pub mod event_log;
pub mod session;
pub mod settings;

pub use photon_blocks_core as core;
pub use photon_blocks_types as types;

pub use clock::FrameClock;
pub use event_log::EventLog;
pub use session::{FrameOutcome, Session, SessionSummary};
pub use settings::{parse_config, parse_soft_drop, read_config_file, RuntimeConfig};
