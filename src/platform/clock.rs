//! Frame clocks and pacing

use std::time::{Duration, Instant};

use super::Clock;

/// Wall clock anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    elapsed: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }

    pub fn set(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed
    }
}

/// Fixed delay per frame, matching the target rate
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame: Duration,
}

impl FramePacer {
    /// `fps` of zero is treated as one
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block for one frame period
    pub fn wait(&self) {
        std::thread::sleep(self.frame);
    }
}
