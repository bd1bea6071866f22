//! Frame pacing.

use std::time::{Duration, Instant};

/// Measures real time between frames and tells the loop how long it may
/// wait for input before the next frame is due.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame: Duration,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Time left until the next frame is due (zero when already late)
    pub fn time_until_next(&self) -> Duration {
        self.frame.saturating_sub(self.last.elapsed())
    }

    pub fn is_due(&self) -> bool {
        self.last.elapsed() >= self.frame
    }

    /// Elapsed time since the previous tick; restarts the measurement.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_and_resets() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= Duration::from_millis(5));
        assert!(clock.time_until_next() <= Duration::from_millis(16));
    }
}
