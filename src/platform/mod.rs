//! Platform collaborators
//!
//! The simulation never talks to a compositor, GPU or wall clock directly.
//! It sees them through the traits below:
//! - `Clock`: monotonic time since engine start
//! - `Renderer`: clear / draw / present
//! - `SurfaceHost`: resize and configure acknowledgment
//!
//! Headless implementations are provided for the driver binary and tests.

pub mod appearance;
pub mod clock;
pub mod headless;

pub use appearance::AppearanceTable;
pub use clock::{FramePacer, ManualClock, MonotonicClock};
pub use headless::{DrawCall, FrameRecorder, HeadlessSurface};

use std::time::Duration;

use crate::sim::{Appearance, Rect};

/// Monotonic frame clock
pub trait Clock {
    /// Time elapsed since the engine started
    fn now(&self) -> Duration;
}

/// Draw target for one frame
pub trait Renderer {
    /// Clear the whole target to transparent
    fn clear(&mut self);
    /// Draw the sprite for `appearance` into `rect`
    fn draw(&mut self, appearance: Appearance, rect: Rect);
    /// Hand the finished frame to the compositor
    fn present(&mut self);
}

/// Window side of the configure handshake
pub trait SurfaceHost {
    /// Resize the window / render target
    fn resize(&mut self, width: u32, height: u32);
    /// Acknowledge the configure event carrying `serial`
    fn ack_configure(&mut self, serial: u32);
}
