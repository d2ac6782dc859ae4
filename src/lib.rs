//! Bubbles - sprites drifting across a transparent overlay
//!
//! Core modules:
//! - `sim`: Bubble simulation (spawning, integration, collisions)
//! - `surface`: Overlay surface lifecycle (configure handshake)
//! - `platform`: Collaborator traits and headless implementations
//! - `settings`: JSON-backed runtime configuration

pub mod platform;
pub mod settings;
pub mod sim;
pub mod surface;

pub use settings::{Settings, SettingsError};
pub use sim::{FrameStats, Simulation};
pub use surface::{Control, SurfaceEvent, SurfaceLifecycle};

/// Simulation configuration constants
pub mod consts {
    use std::time::Duration;

    /// Edge length of every bubble's bounding square (pixels)
    pub const BUBBLE_SIZE: f32 = 256.0;
    /// Capacity of the bubble arena; no more bubbles ever spawn in a run
    pub const NBUBBLES: usize = 16;
    /// Number of visual variants a bubble can take
    pub const APPEARANCE_COUNT: usize = 3;

    /// Default time quantum between spawns
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(800);
    /// Default frame pump rate
    pub const FPS: u32 = 60;

    /// Floor for the contact distance when computing a collision normal
    pub const MIN_CONTACT_DISTANCE: f32 = 0.1;
    /// Base launch speed added to the random component (pixels/frame)
    pub const LAUNCH_SPEED_BASE: f32 = 0.5;
}
