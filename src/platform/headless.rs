//! Headless collaborators
//!
//! Stand-ins for a compositor surface and a GPU renderer. They record what
//! the engine asks of them so the driver can report it and tests can assert
//! on it.

use crate::sim::{Appearance, Rect};

use super::{Renderer, SurfaceHost};

/// Surface that remembers its size and every acknowledged serial
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub size: Option<(u32, u32)>,
    pub acked: Vec<u32>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_ack(&self) -> Option<u32> {
        self.acked.last().copied()
    }
}

impl SurfaceHost for HeadlessSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn ack_configure(&mut self, serial: u32) {
        self.acked.push(serial);
    }
}

/// A single recorded draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub appearance: Appearance,
    pub rect: Rect,
}

/// Renderer that keeps the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    /// Draws since the last clear
    pub draws: Vec<DrawCall>,
    /// Frames presented so far
    pub presented: u64,
    /// Total draws across all frames
    pub total_draws: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self) {
        self.draws.clear();
    }

    fn draw(&mut self, appearance: Appearance, rect: Rect) {
        self.draws.push(DrawCall { appearance, rect });
        self.total_draws += 1;
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_frame_cycle() {
        let mut recorder = FrameRecorder::new();
        recorder.clear();
        recorder.draw(Appearance::default(), Rect::default());
        recorder.draw(Appearance::default(), Rect::default());
        recorder.present();
        assert_eq!(recorder.draws.len(), 2);

        recorder.clear();
        recorder.present();
        assert!(recorder.draws.is_empty());
        assert_eq!(recorder.presented, 2);
        assert_eq!(recorder.total_draws, 2);
    }

    #[test]
    fn test_surface_records_acks() {
        let mut surface = HeadlessSurface::new();
        surface.resize(640, 480);
        surface.ack_configure(3);
        surface.ack_configure(9);
        assert_eq!(surface.size, Some((640, 480)));
        assert_eq!(surface.acked, vec![3, 9]);
        assert_eq!(surface.last_ack(), Some(9));
    }
}
