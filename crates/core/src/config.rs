//! Engine tunables.
//!
//! Every duration is stored as a [`Duration`] and (de)serialized as whole
//! milliseconds. Missing fields fall back to the defaults, so a config file
//! only needs the values it changes:
//!
//! ```
//! use photon_blocks_core::{EngineConfig, SoftDropMode};
//!
//! let cfg: EngineConfig = serde_json::from_str(r#"{ "soft_drop": "fast", "seed": 7 }"#).unwrap();
//! assert_eq!(cfg.soft_drop, SoftDropMode::Fast);
//! assert_eq!(cfg.seed, Some(7));
//! assert_eq!(cfg.base_fall.as_millis(), 520);
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::serde_millis;
use crate::types::{
    BASE_FALL_MS, CLEAR_DURATION_MS, LEVEL_STEP_MS, MAX_FRAME_DT_MS, MIN_FALL_MS,
    MOVE_COOLDOWN_MS, ROTATE_COOLDOWN_MS, SOFT_DROP_FAST_MS, SOFT_DROP_NORMAL_MS,
    SOFT_DROP_SLOW_MS,
};

/// Soft-drop speed setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoftDropMode {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SoftDropMode {
    /// Time between soft-drop steps while the key is held
    pub fn interval(&self) -> Duration {
        Duration::from_millis(match self {
            SoftDropMode::Slow => SOFT_DROP_SLOW_MS,
            SoftDropMode::Normal => SOFT_DROP_NORMAL_MS,
            SoftDropMode::Fast => SOFT_DROP_FAST_MS,
        })
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Some(SoftDropMode::Slow),
            "normal" => Some(SoftDropMode::Normal),
            "fast" => Some(SoftDropMode::Fast),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoftDropMode::Slow => "slow",
            SoftDropMode::Normal => "normal",
            SoftDropMode::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gravity interval at level 1
    #[serde(with = "serde_millis")]
    pub base_fall: Duration,
    /// Interval removed per level above 1
    #[serde(with = "serde_millis")]
    pub level_step: Duration,
    /// Gravity interval floor
    #[serde(with = "serde_millis")]
    pub min_fall: Duration,
    #[serde(with = "serde_millis")]
    pub move_cooldown: Duration,
    #[serde(with = "serde_millis")]
    pub rotate_cooldown: Duration,
    pub soft_drop: SoftDropMode,
    /// How long full rows stay on the board before they are removed
    #[serde(with = "serde_millis")]
    pub clear_duration: Duration,
    /// Upper bound for one tick's elapsed time
    #[serde(with = "serde_millis")]
    pub max_frame_dt: Duration,
    /// Piece supply seed; `None` draws one at startup
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_fall: Duration::from_millis(BASE_FALL_MS),
            level_step: Duration::from_millis(LEVEL_STEP_MS),
            min_fall: Duration::from_millis(MIN_FALL_MS),
            move_cooldown: Duration::from_millis(MOVE_COOLDOWN_MS),
            rotate_cooldown: Duration::from_millis(ROTATE_COOLDOWN_MS),
            soft_drop: SoftDropMode::default(),
            clear_duration: Duration::from_millis(CLEAR_DURATION_MS),
            max_frame_dt: Duration::from_millis(MAX_FRAME_DT_MS),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the engine cannot run with.
    ///
    /// The clear duration may be zero (rows vanish on the next tick).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nonzero = [
            ("base_fall", self.base_fall),
            ("min_fall", self.min_fall),
            ("move_cooldown", self.move_cooldown),
            ("rotate_cooldown", self.rotate_cooldown),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in nonzero {
            if value.is_zero() {
                return Err(ConfigError::ZeroInterval(field));
            }
        }
        if self.min_fall > self.base_fall {
            return Err(ConfigError::FallCurve {
                base_fall: self.base_fall,
                min_fall: self.min_fall,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The named interval is zero
    ZeroInterval(&'static str),
    /// The floor sits above the level-1 interval
    FallCurve { base_fall: Duration, min_fall: Duration },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroInterval(_) => "zero_interval",
            ConfigError::FallCurve { .. } => "invalid_fall_curve",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInterval(field) => write!(f, "{field} must be greater than zero"),
            ConfigError::FallCurve {
                base_fall,
                min_fall,
            } => write!(
                f,
                "min_fall ({}ms) exceeds base_fall ({}ms)",
                min_fall.as_millis(),
                base_fall.as_millis()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = EngineConfig {
            move_cooldown: Duration::ZERO,
            ..EngineConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err, ConfigError::ZeroInterval("move_cooldown"));
        assert_eq!(err.code(), "zero_interval");
        assert_eq!(err.to_string(), "move_cooldown must be greater than zero");
    }

    #[test]
    fn inverted_fall_curve_rejected() {
        let cfg = EngineConfig {
            min_fall: Duration::from_millis(600),
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate().unwrap_err().code(), "invalid_fall_curve");
    }

    #[test]
    fn durations_serialize_as_millis() {
        let json = serde_json::to_value(EngineConfig::default()).unwrap();
        assert_eq!(json["base_fall"], 520);
        assert_eq!(json["clear_duration"], 280);
        assert_eq!(json["soft_drop"], "normal");
        assert!(json["seed"].is_null());
    }

    #[test]
    fn soft_drop_intervals() {
        assert_eq!(SoftDropMode::Slow.interval(), Duration::from_millis(100));
        assert_eq!(SoftDropMode::Normal.interval(), Duration::from_millis(60));
        assert_eq!(SoftDropMode::Fast.interval(), Duration::from_millis(40));
        assert_eq!(SoftDropMode::from_str(" Fast "), Some(SoftDropMode::Fast));
        assert_eq!(SoftDropMode::from_str("turbo"), None);
    }
}
