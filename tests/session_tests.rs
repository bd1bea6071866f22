//! Session and settings tests - frame loop, JSON-lines log, config files

use std::time::Duration;

use photon_blocks::core::{EngineConfig, SoftDropMode};
use photon_blocks::engine::{read_config_file, EventLog, FrameOutcome, Session};
use photon_blocks::types::{Intent, Intents};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn log_lines(bytes: &[u8]) -> Vec<serde_json::Value> {
    std::str::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_session_logs_start_and_events() {
    let cfg = EngineConfig::default().with_seed(9);
    let mut session = Session::with_log(cfg, EventLog::new(Vec::new())).unwrap();

    let outcome = session
        .frame(ms(16), Intents::from(Intent::HardDrop))
        .unwrap();
    let FrameOutcome::Continue(snap) = outcome else {
        panic!("expected the game to continue");
    };
    assert_eq!(snap.seed, 9);
    assert_eq!(session.engine().board().filled_count(), 4);

    let (summary, log) = session.finish().unwrap();
    assert_eq!(summary.seed, 9);
    assert_eq!(summary.games, 1);

    let lines = log_lines(&log.unwrap());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "sessionStart");
    assert_eq!(lines[0]["seed"], 9);
    assert_eq!(lines[0]["config"]["base_fall"], 520);
    assert_eq!(lines[1]["type"], "pieceLocked");
    assert_eq!(lines[1]["tMs"], 16);
    assert_eq!(lines[1]["hardDrop"], true);
    assert_eq!(lines[1]["cells"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_quit_skips_the_engine() {
    let mut session = Session::new(EngineConfig::default().with_seed(1));
    let quit = Intents::empty().with(Intent::Quit).with(Intent::HardDrop);
    assert_eq!(session.frame(ms(16), quit).unwrap(), FrameOutcome::Quit);
    assert_eq!(session.engine().board().filled_count(), 0);
    assert_eq!(session.engine().elapsed(), Duration::ZERO);

    let (summary, log) = session.finish().unwrap();
    assert!(log.is_none());
    assert_eq!(summary.score, 0);
}

#[test]
fn test_restart_counts_games() {
    let cfg = EngineConfig::default().with_seed(3);
    let mut session = Session::with_log(cfg, EventLog::new(Vec::new())).unwrap();
    session
        .frame(ms(16), Intents::from(Intent::HardDrop))
        .unwrap();
    session
        .frame(ms(16), Intents::from(Intent::Restart))
        .unwrap();

    assert_eq!(session.snapshot().score, 0);
    let summary = session.summary();
    assert_eq!(summary.games, 2);
    assert_eq!(summary.elapsed, Duration::ZERO);

    let (_, log) = session.finish().unwrap();
    let lines = log_lines(&log.unwrap());
    let last = lines.last().unwrap();
    assert_eq!(last["type"], "restarted");
    assert_eq!(last["seed"], 3);
}

#[test]
fn test_held_restart_starts_one_game() {
    let cfg = EngineConfig::default().with_seed(4);
    let mut session = Session::with_log(cfg, EventLog::new(Vec::new())).unwrap();
    let restart = Intents::from(Intent::Restart);

    // One ~100ms press of R.
    for _ in 0..6 {
        session.frame(ms(16), restart).unwrap();
    }
    assert_eq!(session.summary().games, 2);
    // The game started by the press keeps running while R is held.
    assert_eq!(session.engine().elapsed(), ms(16 * 5));

    session.frame(ms(16), Intents::empty()).unwrap();
    session.frame(ms(16), restart).unwrap();
    assert_eq!(session.summary().games, 3);

    let (_, log) = session.finish().unwrap();
    let restarts = log_lines(&log.unwrap())
        .iter()
        .filter(|line| line["type"] == "restarted")
        .count();
    assert_eq!(restarts, 2);
}

#[test]
fn test_config_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!(
        "photon-blocks-config-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{ "base_fall": 400, "soft_drop": "slow", "seed": 11 }"#,
    )
    .unwrap();

    let cfg = read_config_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cfg.base_fall, ms(400));
    assert_eq!(cfg.soft_drop, SoftDropMode::Slow);
    assert_eq!(cfg.seed, Some(11));
    assert_eq!(cfg.min_fall, EngineConfig::default().min_fall);
}

#[test]
fn test_missing_config_file_names_the_path() {
    let err = read_config_file(std::path::Path::new("/nonexistent/photon.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/photon.json"));
}
