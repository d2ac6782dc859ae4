//! Random sources for the spawn scheduler

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Capability the spawn scheduler draws its randomness from
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Default source: seeded PCG32
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "pick from an empty range");
        self.rng.random_range(0..n)
    }
}

/// Replays a fixed sequence of unit draws, cycling when exhausted.
///
/// `pick` maps the next unit draw onto `0..n`, so a script fully determines
/// both velocities and appearances.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }

    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "pick from an empty range");
        ((self.unit() * n as f32) as usize).min(n.saturating_sub(1))
    }
}
