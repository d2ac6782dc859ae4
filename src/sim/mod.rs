//! Bubble simulation module
//!
//! All per-frame logic lives here:
//! - Time-gated spawning with an injected random source
//! - Edge reflection and explicit Euler integration
//! - Pairwise overlap detection and elastic impulse resolution
//!
//! No rendering or platform dependencies beyond the `platform` traits.

pub mod collision;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collides, contact_normal_velocity, has_collision, resolve_collision};
pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
pub use spawn::SpawnScheduler;
pub use state::{Appearance, Bubble, BubbleArena, Rect, Simulation, Viewport};
pub use tick::{FrameStats, tick};
