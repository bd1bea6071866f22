//! Engine events.
//!
//! Each update records what happened during the tick. Frontends drain them
//! for effects and logging; they never feed back into the rules.

use serde::{Deserialize, Serialize};

use crate::board::FullRows;
use crate::pieces::PieceCells;
use crate::types::{GameOverReason, PieceKind};

/// Capacity of the per-engine event buffer
pub const MAX_PENDING_EVENTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineEvent {
    /// A piece was written into the board.
    #[serde(rename_all = "camelCase")]
    PieceLocked {
        kind: PieceKind,
        cells: PieceCells,
        hard_drop: bool,
    },
    /// Full rows detected; they stay on the board until the clear resolves.
    RowsScheduled { rows: FullRows },
    #[serde(rename_all = "camelCase")]
    RowsCleared { count: u32, score_delta: u32 },
    LevelUp { level: u32 },
    GameOver { reason: GameOverReason },
    Restarted { seed: u64 },
}

impl EngineEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::PieceLocked { .. } => "pieceLocked",
            EngineEvent::RowsScheduled { .. } => "rowsScheduled",
            EngineEvent::RowsCleared { .. } => "rowsCleared",
            EngineEvent::LevelUp { .. } => "levelUp",
            EngineEvent::GameOver { .. } => "gameOver",
            EngineEvent::Restarted { .. } => "restarted",
        }
    }
}
