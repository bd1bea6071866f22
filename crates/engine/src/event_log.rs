//! JSON-lines event log.
//!
//! One JSON object per line: a `sessionStart` header followed by every
//! engine event, each tagged with the game time (`tMs`) at which the tick
//! that produced it ended.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{EngineConfig, EngineEvent};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventLine<'a> {
    t_ms: u64,
    #[serde(flatten)]
    event: &'a EngineEvent,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    seed: u64,
    config: &'a EngineConfig,
}

pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
    lines: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
            lines: 0,
        }
    }

    pub fn record_start(&mut self, seed: u64, config: &EngineConfig) -> Result<()> {
        self.write_line(&StartLine {
            kind: "sessionStart",
            seed,
            config,
        })
    }

    pub fn record(&mut self, elapsed: Duration, event: &EngineEvent) -> Result<()> {
        let t_ms = elapsed.as_millis().min(u64::MAX as u128) as u64;
        self.write_line(&EventLine { t_ms, event })
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, value)?;
        self.buf.push(b'\n');
        self.out
            .write_all(&self.buf)
            .context("writing event log")?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flushing event log")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameOverReason;

    #[test]
    fn writes_one_object_per_line() {
        let mut log = EventLog::new(Vec::new());
        log.record_start(9, &EngineConfig::default()).unwrap();
        log.record(
            Duration::from_millis(1500),
            &EngineEvent::GameOver {
                reason: GameOverReason::LockOut,
            },
        )
        .unwrap();
        assert_eq!(log.lines(), 2);

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let start: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(start["type"], "sessionStart");
        assert_eq!(start["seed"], 9);
        assert_eq!(start["config"]["base_fall"], 520);

        let over: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(over["type"], "gameOver");
        assert_eq!(over["tMs"], 1500);
        assert_eq!(over["reason"], "lockOut");
    }
}
