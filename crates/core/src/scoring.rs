//! Scoring and level progression.

use std::time::Duration;

use crate::config::EngineConfig;
use crate::types::{LINES_PER_LEVEL, LINE_SCORE_BASE, LINE_SCORE_BONUS, SECONDS_PER_LEVEL};

/// Points for removing `rows` rows at once: 120, 320, 520, 720, ...
pub fn line_clear_score(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    let n = rows as u32;
    n * LINE_SCORE_BASE + (n - 1) * LINE_SCORE_BONUS
}

/// Level implied by cleared lines and play time (starts at 1).
pub fn target_level(lines: u32, elapsed: Duration) -> u32 {
    1 + lines / LINES_PER_LEVEL + (elapsed.as_secs() / SECONDS_PER_LEVEL) as u32
}

/// Gravity interval for a level, floored at `min_fall`.
pub fn fall_interval(level: u32, config: &EngineConfig) -> Duration {
    let reduction = config.level_step.saturating_mul(level.saturating_sub(1));
    config
        .base_fall
        .saturating_sub(reduction)
        .max(config.min_fall)
}
