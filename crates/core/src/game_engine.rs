//! Game engine - the per-tick state machine
//!
//! [`GameEngine::update`] is the whole contract: feed it the elapsed time
//! since the previous frame and the intents active during that frame, and it
//! returns the resulting snapshot. Within one call the steps run in a fixed
//! order:
//!
//! 1. Restart (if requested) replaces the engine and ends the tick.
//! 2. Elapsed time and level advance.
//! 3. Intents apply: moves, rotation, soft drop, hard drop.
//! 4. Gravity drains its accumulator, locking at most one piece.
//! 5. A pending line clear advances and resolves once its timer runs out.
//!
//! Rotate and hard drop fire on the rising edge only: the engine compares
//! against the intents passed to the previous call, and rotation still waits
//! out its cooldown. Moves and soft drop are level-triggered and rate-limited
//! by their cooldowns.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::board::{Board, FullRows};
use crate::collision::{self, is_valid};
use crate::config::EngineConfig;
use crate::events::{EngineEvent, MAX_PENDING_EVENTS};
use crate::pieces::Tetromino;
use crate::rng::PieceSupply;
use crate::rotation::try_rotate;
use crate::scoring::{fall_interval, line_clear_score, target_level};
use crate::snapshot::GameSnapshot;
use crate::types::{GameOverReason, Intent, Intents, PieceKind, BOARD_HEIGHT, SHAKE_MIN_ROWS};

const SHAKE_KICK: f32 = 0.6;
const SHAKE_MAX: f32 = 0.5;
const SHAKE_DECAY_PER_SEC: f32 = 1.7;

pub type EngineEvents = ArrayVec<EngineEvent, MAX_PENDING_EVENTS>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    supply: PieceSupply,
    current: Tetromino,
    next: PieceKind,

    score: u32,
    lines: u32,
    level: u32,
    fall_interval: Duration,

    elapsed: Duration,
    move_timer: Duration,
    rotate_timer: Duration,
    soft_timer: Duration,
    gravity_timer: Duration,

    clearing: FullRows,
    clear_timer: Duration,

    shake: f32,
    game_over: Option<GameOverReason>,
    prev_intents: Intents,
    events: EngineEvents,
}

impl GameEngine {
    /// Create a new game. Uses `config.seed` when set, otherwise a random seed.
    pub fn new(config: EngineConfig) -> Self {
        let supply = match config.seed {
            Some(seed) => PieceSupply::new(seed),
            None => PieceSupply::from_entropy(),
        };
        Self::with_supply(config, supply)
    }

    /// Default tunables with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    pub fn with_supply(config: EngineConfig, mut supply: PieceSupply) -> Self {
        let current = Tetromino::spawn(supply.next_kind());
        let next = supply.next_kind();
        Self {
            board: Board::new(),
            supply,
            current,
            next,
            score: 0,
            lines: 0,
            level: 1,
            fall_interval: fall_interval(1, &config),
            elapsed: Duration::ZERO,
            // Cooldowns start expired so the first press acts immediately.
            move_timer: config.move_cooldown,
            rotate_timer: config.rotate_cooldown,
            soft_timer: config.soft_drop.interval(),
            gravity_timer: Duration::ZERO,
            clearing: FullRows::new(),
            clear_timer: Duration::ZERO,
            shake: 0.0,
            game_over: None,
            prev_intents: Intents::empty(),
            events: EngineEvents::new(),
            config,
        }
    }

    // ---- Getters ----

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    /// Replace the falling piece (scripted setups, tests).
    pub fn set_current(&mut self, piece: Tetromino) {
        self.current = piece;
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Unspent time in the gravity accumulator
    pub fn gravity_timer(&self) -> Duration {
        self.gravity_timer
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Rows waiting for the clear animation to finish, ascending
    pub fn clearing_rows(&self) -> &[i8] {
        &self.clearing
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn shake(&self) -> f32 {
        self.shake
    }

    pub fn seed(&self) -> u64 {
        self.supply.seed()
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> EngineEvents {
        std::mem::take(&mut self.events)
    }

    // ---- Tick ----

    /// Advance the game by `dt` with the given intents held.
    ///
    /// `dt` is clamped to `config.max_frame_dt`. Never fails: moves that do
    /// not fit are dropped and a finished game only reacts to Restart.
    pub fn update(&mut self, dt: Duration, intents: Intents) -> GameSnapshot {
        let dt = dt.min(self.config.max_frame_dt);

        if intents.contains(Intent::Restart) {
            self.restart();
            self.prev_intents = intents;
            return self.snapshot();
        }

        self.move_timer += dt;
        self.rotate_timer += dt;
        self.soft_timer += dt;
        self.elapsed += dt;
        self.update_level();

        if self.game_over.is_none() {
            self.apply_intents(intents);
        }
        if self.game_over.is_none() {
            self.apply_gravity(dt);
        }
        if self.game_over.is_none() {
            self.advance_clear(dt);
        }

        if self.shake > 0.0 {
            self.shake = (self.shake - dt.as_secs_f32() * SHAKE_DECAY_PER_SEC).max(0.0);
        }

        self.prev_intents = intents;
        self.snapshot()
    }

    /// Replace this engine with a fresh game using the same config.
    ///
    /// Undrained events survive so the caller still sees them.
    pub fn restart(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.config);
        self.events = events;
        self.push_event(EngineEvent::Restarted { seed: self.seed() });
    }

    fn update_level(&mut self) {
        let target = target_level(self.lines, self.elapsed);
        if target > self.level {
            self.level = target;
            self.fall_interval = fall_interval(self.level, &self.config);
            self.push_event(EngineEvent::LevelUp { level: self.level });
        }
    }

    fn apply_intents(&mut self, intents: Intents) {
        // Left and right share one cooldown; left wins when both are held.
        let move_cooldown = self.config.move_cooldown;
        if intents.contains(Intent::MoveLeft) && self.move_timer >= move_cooldown {
            self.try_shift(-1);
            self.move_timer = Duration::ZERO;
        }
        if intents.contains(Intent::MoveRight) && self.move_timer >= move_cooldown {
            self.try_shift(1);
            self.move_timer = Duration::ZERO;
        }

        if self.pressed(intents, Intent::Rotate)
            && self.rotate_timer >= self.config.rotate_cooldown
        {
            try_rotate(&mut self.current, &self.board);
            self.rotate_timer = Duration::ZERO;
        }

        let soft_step = self.config.soft_drop.interval();
        if intents.contains(Intent::SoftDrop) {
            if self.soft_timer >= soft_step {
                self.try_descend();
                self.soft_timer = Duration::ZERO;
            }
        } else {
            self.soft_timer = self.soft_timer.min(soft_step);
        }

        if self.pressed(intents, Intent::HardDrop) {
            self.hard_drop();
        }
    }

    /// Held now but not in the previous call
    fn pressed(&self, intents: Intents, intent: Intent) -> bool {
        intents.contains(intent) && !self.prev_intents.contains(intent)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if is_valid(&self.current, &self.board, dx, 0, None) {
            self.current.x += dx;
            true
        } else {
            false
        }
    }

    fn try_descend(&mut self) -> bool {
        if is_valid(&self.current, &self.board, 0, 1, None) {
            self.current.y += 1;
            true
        } else {
            false
        }
    }

    fn hard_drop(&mut self) {
        while self.try_descend() {}
        self.lock_current(true);
    }

    fn apply_gravity(&mut self, dt: Duration) {
        self.gravity_timer += dt;
        if self.fall_interval.is_zero() {
            return;
        }
        while self.gravity_timer >= self.fall_interval {
            self.gravity_timer -= self.fall_interval;
            if !self.try_descend() {
                // Stop for this tick; the leftover time drains next tick.
                self.lock_current(false);
                break;
            }
        }
    }

    /// Lock the falling piece, then spawn the next one and schedule any
    /// full rows.
    fn lock_current(&mut self, hard_drop: bool) {
        collision::lock(&self.current, &mut self.board);
        self.push_event(EngineEvent::PieceLocked {
            kind: self.current.kind,
            cells: self.current.cells(0, 0, None),
            hard_drop,
        });

        if self.board.has_overhang() {
            self.end_game(GameOverReason::LockOut);
            return;
        }

        self.current = Tetromino::spawn(self.next);
        self.next = self.supply.next_kind();
        if !is_valid(&self.current, &self.board, 0, 0, None) {
            self.end_game(GameOverReason::BlockOut);
            return;
        }

        // Rows still pending from an earlier lock are full too, so this
        // re-detection covers them; the timer restarts for the whole set.
        let rows = self.board.find_full_rows();
        if !rows.is_empty() {
            self.clearing = rows.clone();
            self.clear_timer = Duration::ZERO;
            self.push_event(EngineEvent::RowsScheduled { rows });
        }
    }

    fn advance_clear(&mut self, dt: Duration) {
        if self.clearing.is_empty() {
            return;
        }
        self.clear_timer += dt;
        if self.clear_timer < self.config.clear_duration {
            return;
        }

        self.board.clear_rows(&self.clearing);
        let count = self.clearing.len();
        let score_delta = line_clear_score(count);
        self.score += score_delta;
        self.lines += count as u32;
        if count >= SHAKE_MIN_ROWS {
            self.shake = (self.shake + SHAKE_KICK).min(SHAKE_MAX);
        }
        self.clearing.clear();
        self.clear_timer = Duration::ZERO;
        self.push_event(EngineEvent::RowsCleared {
            count: count as u32,
            score_delta,
        });
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.game_over = Some(reason);
        self.push_event(EngineEvent::GameOver { reason });
    }

    fn push_event(&mut self, event: EngineEvent) {
        let _ = self.events.try_push(event);
    }

    // ---- Snapshot ----

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.visible_into(&mut out.board);

        if self.game_over.is_none() {
            out.active = Some(self.current.into());
            out.ghost_y = Some(collision::ghost_y(&self.current, &self.board));
        } else {
            out.active = None;
            out.ghost_y = None;
        }
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.elapsed = self.elapsed;
        out.fall_interval = self.fall_interval;

        out.clearing = [false; BOARD_HEIGHT as usize];
        for &y in self.clearing.iter() {
            out.clearing[y as usize] = true;
        }
        out.clear_progress = if self.clearing.is_empty() {
            0.0
        } else if self.config.clear_duration.is_zero() {
            1.0
        } else {
            (self.clear_timer.as_secs_f32() / self.config.clear_duration.as_secs_f32()).min(1.0)
        };

        out.shake = self.shake;
        out.game_over = self.game_over;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
