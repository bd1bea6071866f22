//! Held-key tracking for terminal environments.
//!
//! The engine wants level-triggered intents ("is left held this frame?"),
//! while terminals deliver discrete key events. The tracker keeps a key held
//! from its press until its release. Terminals that never report releases
//! fall back to a timeout after the last press or repeat event; once a single
//! release has been seen the timeout is disabled.
//!
//! A press always shows up in the next frame's intents, even if the release
//! arrives before that frame is sampled.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::intent_for_key;
use crate::types::{Intent, Intents};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained hold.
pub const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press/repeat time per intent, `None` when released
    held: [Option<Instant>; Intent::ALL.len()],
    /// Intents pressed since the last sample
    pressed: Intents,
    release_timeout: Duration,
    saw_release: bool,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; Intent::ALL.len()],
            pressed: Intents::empty(),
            release_timeout: DEFAULT_KEY_RELEASE_TIMEOUT,
            saw_release: false,
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Whether the terminal has reported at least one key release
    pub fn reports_releases(&self) -> bool {
        self.saw_release
    }

    /// Feed one key event. Returns the mapped intent, if any.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Intent> {
        let intent = intent_for_key(key)?;
        let slot = &mut self.held[intent as usize];
        match key.kind {
            KeyEventKind::Press => {
                *slot = Some(now);
                self.pressed.insert(intent);
            }
            KeyEventKind::Repeat => {
                *slot = Some(now);
            }
            KeyEventKind::Release => {
                *slot = None;
                self.saw_release = true;
            }
        }
        Some(intent)
    }

    /// Intents active for the frame sampled at `now`.
    pub fn sample(&mut self, now: Instant) -> Intents {
        let mut out = std::mem::take(&mut self.pressed);
        for (intent, slot) in Intent::ALL.iter().zip(self.held.iter_mut()) {
            let Some(last) = *slot else {
                continue;
            };
            if !self.saw_release && now.saturating_duration_since(last) > self.release_timeout {
                *slot = None;
                continue;
            }
            out.insert(*intent);
        }
        out
    }

    /// Forget every held key (focus loss, restart).
    pub fn clear(&mut self) {
        self.held = [None; Intent::ALL.len()];
        self.pressed = Intents::empty();
    }
}
