//! Overlay surface lifecycle
//!
//! The compositor must size the surface before anything is drawn. The first
//! configure event is resized to, acknowledged with its own serial, and
//! flips the lifecycle to `Configured` for the rest of the run.

use crate::platform::SurfaceHost;

/// Events delivered by the windowing collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Compositor assigned a size; must be acknowledged with `serial`
    Configure { serial: u32, width: u32, height: u32 },
    /// Output size changed (pixel size notification)
    Resized { width: u32, height: u32 },
    /// Compositor closed the surface
    Closed,
    /// User or system asked the process to quit
    Quit,
}

/// What the frame pump should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Configure handshake state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceLifecycle {
    /// No configure received yet; nothing may be drawn
    #[default]
    Unconfigured,
    /// First configure acknowledged
    Configured,
}

impl SurfaceLifecycle {
    pub fn is_ready(&self) -> bool {
        matches!(self, SurfaceLifecycle::Configured)
    }

    /// Apply a configure event: resize, ack with the same serial, mark ready.
    ///
    /// Every configure is resized to and acknowledged. Only the first one
    /// changes state. Returns true when this call performed the transition.
    pub fn configure(&mut self, host: &mut impl SurfaceHost, serial: u32, width: u32, height: u32) -> bool {
        host.resize(width, height);
        host.ack_configure(serial);

        match self {
            SurfaceLifecycle::Unconfigured => {
                *self = SurfaceLifecycle::Configured;
                log::info!("layer surface configured {}x{} (serial {})", width, height, serial);
                true
            }
            SurfaceLifecycle::Configured => {
                log::debug!("layer surface reconfigured {}x{} (serial {})", width, height, serial);
                false
            }
        }
    }
}
