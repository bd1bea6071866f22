//! Runtime configuration loading.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file, then
//! environment variables. Command-line flags are applied by the binary on
//! top of the result.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `PHOTON_BLOCKS_SEED` | Fixed piece-supply seed |
//! | `PHOTON_BLOCKS_SOFT_DROP` | `slow`, `normal` or `fast` |
//! | `PHOTON_BLOCKS_LOG_PATH` | Append engine events to this file as JSON lines |

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::{EngineConfig, SoftDropMode};

pub const ENV_SEED: &str = "PHOTON_BLOCKS_SEED";
pub const ENV_SOFT_DROP: &str = "PHOTON_BLOCKS_SOFT_DROP";
pub const ENV_LOG_PATH: &str = "PHOTON_BLOCKS_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Event log destination; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Defaults, optionally overlaid with a config file, then the process
    /// environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let engine = match config_path {
            Some(path) => read_config_file(path)?,
            None => EngineConfig::default(),
        };
        let mut cfg = Self {
            engine,
            log_path: None,
        };
        cfg.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw
                .parse::<u64>()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a valid seed"))?;
            self.engine.seed = Some(seed);
        }
        if let Some(raw) = get(ENV_SOFT_DROP) {
            self.engine.soft_drop = parse_soft_drop(&raw)?;
        }
        if let Some(raw) = get(ENV_LOG_PATH) {
            self.log_path = Some(PathBuf::from(raw));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        Ok(())
    }
}

pub fn parse_soft_drop(raw: &str) -> Result<SoftDropMode> {
    SoftDropMode::from_str(raw)
        .ok_or_else(|| anyhow!("unknown soft drop mode {raw:?} (expected slow, normal or fast)"))
}

/// Parse an [`EngineConfig`] from a JSON file. Missing fields keep defaults.
pub fn read_config_file(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<EngineConfig> {
    let cfg: EngineConfig = serde_json::from_str(text)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_env_with(lookup(&[
            (ENV_SEED, "42"),
            (ENV_SOFT_DROP, "slow"),
            (ENV_LOG_PATH, " /tmp/events.jsonl "),
        ]))
        .unwrap();
        assert_eq!(cfg.engine.seed, Some(42));
        assert_eq!(cfg.engine.soft_drop, SoftDropMode::Slow);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/events.jsonl")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_env_with(lookup(&[(ENV_SEED, "  "), (ENV_LOG_PATH, "")]))
            .unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn bad_env_values_are_errors() {
        let mut cfg = RuntimeConfig::default();
        let err = cfg
            .apply_env_with(lookup(&[(ENV_SEED, "abc")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));

        let err = cfg
            .apply_env_with(lookup(&[(ENV_SOFT_DROP, "turbo")]))
            .unwrap_err();
        assert!(err.to_string().contains("turbo"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse_config(r#"{ "base_fall": 300, "clear_duration": 0 }"#).unwrap();
        assert_eq!(cfg.base_fall, Duration::from_millis(300));
        assert_eq!(cfg.clear_duration, Duration::ZERO);
        assert_eq!(cfg.move_cooldown, Duration::from_millis(110));
    }

    #[test]
    fn malformed_config_is_error() {
        assert!(parse_config("{ not json").is_err());
        assert!(parse_config(r#"{ "soft_drop": "turbo" }"#).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_config_file(Path::new("/nonexistent/photon.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/photon.json"));
    }
}
