//! Time-gated spawn scheduling
//!
//! One bubble per elapsed quantum, at most one per frame, until the arena is
//! full. A stalled frame pump catches up one bubble per frame, never in a
//! burst.

use std::time::Duration;

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Appearance, Bubble, Viewport};
use crate::consts::*;

/// Decides when bubbles appear and what they look like
#[derive(Debug, Clone)]
pub struct SpawnScheduler<R> {
    interval: Duration,
    rng: R,
}

impl<R: RandomSource> SpawnScheduler<R> {
    pub fn new(rng: R) -> Self {
        Self::with_interval(rng, SPAWN_INTERVAL)
    }

    /// Zero intervals are bumped to one millisecond
    pub fn with_interval(rng: R, interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            rng,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Number of whole quanta elapsed since engine start
    pub fn quanta_elapsed(&self, elapsed: Duration) -> u128 {
        elapsed.as_nanos() / self.interval.as_nanos()
    }

    /// Whether a new bubble is due given the current active count
    pub fn is_due(&self, elapsed: Duration, active: usize) -> bool {
        active < NBUBBLES && self.quanta_elapsed(elapsed) > active as u128
    }

    /// Produce the next bubble if one is due
    pub fn admit(&mut self, elapsed: Duration, active: usize, viewport: &Viewport) -> Option<Bubble> {
        self.is_due(elapsed, active).then(|| self.launch(viewport))
    }

    /// New bubble at the bottom-left corner, heading up and to the right.
    ///
    /// Launch speed scales with viewport height.
    pub fn launch(&mut self, viewport: &Viewport) -> Bubble {
        let scale = viewport.height / BUBBLE_SIZE;
        let vx = self.rng.unit() * scale + LAUNCH_SPEED_BASE;
        let vy = -(self.rng.unit() * scale + LAUNCH_SPEED_BASE);
        let appearance = Appearance::new(self.rng.pick(APPEARANCE_COUNT)).unwrap_or_default();

        Bubble::new(
            Vec2::new(0.0, viewport.height - BUBBLE_SIZE),
            Vec2::new(vx, vy),
            appearance,
        )
    }
}
