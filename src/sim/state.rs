//! Simulation state and core types
//!
//! Everything the frame loop mutates lives here. Bubbles are stored in a
//! fixed-capacity arena that only ever grows.

use glam::Vec2;
use super::rng::{PcgRandom, RandomSource};
use super::spawn::SpawnScheduler;
use crate::consts::*;
use crate::surface::SurfaceLifecycle;

/// Index into the collaborator-owned appearance (texture) table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Appearance(u8);

impl Appearance {
    /// Build from a table index, `None` when out of range
    pub fn new(index: usize) -> Option<Self> {
        (index < APPEARANCE_COUNT).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All variants, in table order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..APPEARANCE_COUNT).map(|i| Self(i as u8))
    }
}

/// Axis-aligned rectangle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A single bubble
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bubble {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub appearance: Appearance,
}

impl Bubble {
    pub fn new(pos: Vec2, vel: Vec2, appearance: Appearance) -> Self {
        Self {
            pos,
            vel,
            appearance,
        }
    }

    /// Bounding square for drawing
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.pos.x,
            y: self.pos.y,
            w: BUBBLE_SIZE,
            h: BUBBLE_SIZE,
        }
    }

    /// Flip velocity components for every viewport edge the bubble crosses.
    ///
    /// Both axes are checked independently. No position correction: a bubble
    /// already past an edge may overshoot for a frame.
    pub fn reflect(&mut self, viewport: &Viewport) {
        if self.pos.x < 0.0 || self.pos.x + BUBBLE_SIZE > viewport.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y + BUBBLE_SIZE > viewport.height {
            self.vel.y = -self.vel.y;
        }
    }

    /// One explicit Euler step
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Output dimensions, as last reported by the surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Fixed-capacity, grow-only bubble storage
#[derive(Debug, Clone)]
pub struct BubbleArena {
    slots: [Bubble; NBUBBLES],
    len: usize,
}

impl Default for BubbleArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleArena {
    pub fn new() -> Self {
        Self {
            slots: [Bubble::default(); NBUBBLES],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        NBUBBLES
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == NBUBBLES
    }

    /// Append a bubble, returning its index. Hands the bubble back when full.
    pub fn push(&mut self, bubble: Bubble) -> Result<usize, Bubble> {
        if self.is_full() {
            return Err(bubble);
        }
        let index = self.len;
        self.slots[index] = bubble;
        self.len += 1;
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&Bubble> {
        self.as_slice().get(index)
    }

    /// Active bubbles, in spawn order
    pub fn as_slice(&self) -> &[Bubble] {
        &self.slots[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Bubble] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.as_slice().iter()
    }
}

/// Complete simulation context, owned by the driver
#[derive(Debug, Clone)]
pub struct Simulation<R = PcgRandom> {
    /// Configure handshake state; gates every frame
    pub surface: SurfaceLifecycle,
    /// Current output dimensions
    pub viewport: Viewport,
    /// Active bubbles (spawn order)
    pub bubbles: BubbleArena,
    /// Spawn schedule and random source
    pub scheduler: SpawnScheduler<R>,
    /// Frames simulated since configuration
    pub frame: u64,
}

impl Simulation<PcgRandom> {
    /// Create a simulation with a seeded PCG random source
    pub fn seeded(seed: u64) -> Self {
        Self::new(PcgRandom::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(rng: R) -> Self {
        Self::with_scheduler(SpawnScheduler::new(rng))
    }

    pub fn with_scheduler(scheduler: SpawnScheduler<R>) -> Self {
        Self {
            surface: SurfaceLifecycle::Unconfigured,
            viewport: Viewport::default(),
            bubbles: BubbleArena::new(),
            scheduler,
            frame: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_ready()
    }

    pub fn active_count(&self) -> usize {
        self.bubbles.len()
    }
}
