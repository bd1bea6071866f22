//! Session: one running game plus its optional event log.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;

use anyhow::Result;

use crate::core::{EngineConfig, GameEngine, GameSnapshot};
use crate::event_log::EventLog;
use crate::types::{GameOverReason, Intent, Intents};

/// What the frontend should do after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Continue(GameSnapshot),
    Quit,
}

/// Final numbers, reported after the frontend exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub elapsed: Duration,
    pub game_over: Option<GameOverReason>,
    pub games: u32,
}

pub struct Session<W: Write = BufWriter<File>> {
    engine: GameEngine,
    log: Option<EventLog<W>>,
    snapshot: GameSnapshot,
    games: u32,
    prev_intents: Intents,
}

impl Session {
    /// Session without an event log
    pub fn new(config: EngineConfig) -> Self {
        let engine = GameEngine::new(config);
        let snapshot = engine.snapshot();
        Self {
            engine,
            log: None,
            snapshot,
            games: 1,
            prev_intents: Intents::empty(),
        }
    }
}

impl<W: Write> Session<W> {
    pub fn with_log(config: EngineConfig, mut log: EventLog<W>) -> Result<Self> {
        let engine = GameEngine::new(config);
        log.record_start(engine.seed(), engine.config())?;
        let snapshot = engine.snapshot();
        Ok(Self {
            engine,
            log: Some(log),
            snapshot,
            games: 1,
            prev_intents: Intents::empty(),
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Latest snapshot
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Run one frame. Quit short-circuits before the engine sees the frame.
    ///
    /// Restart is passed on only on the frame its key goes down, so a held
    /// key starts one new game.
    pub fn frame(&mut self, dt: Duration, held: Intents) -> Result<FrameOutcome> {
        if held.contains(Intent::Quit) {
            return Ok(FrameOutcome::Quit);
        }
        let mut intents = held;
        if self.prev_intents.contains(Intent::Restart) {
            intents.remove(Intent::Restart);
        }
        self.prev_intents = held;
        if intents.contains(Intent::Restart) {
            self.games += 1;
        }

        self.snapshot = self.engine.update(dt, intents);

        let events = self.engine.take_events();
        if let Some(log) = self.log.as_mut() {
            let elapsed = self.engine.elapsed();
            for event in events.iter() {
                log.record(elapsed, event)?;
            }
        }
        Ok(FrameOutcome::Continue(self.snapshot))
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.engine.seed(),
            score: self.engine.score(),
            lines: self.engine.lines(),
            level: self.engine.level(),
            elapsed: self.engine.elapsed(),
            game_over: self.engine.game_over(),
            games: self.games,
        }
    }

    /// Flush the log and return the final numbers along with the log writer.
    pub fn finish(mut self) -> Result<(SessionSummary, Option<W>)> {
        let summary = self.summary();
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        Ok((summary, self.log.map(EventLog::into_inner)))
    }
}
