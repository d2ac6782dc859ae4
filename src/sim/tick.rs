//! Per-frame simulation step and driver entry points
//!
//! The driver applies surface events first, then calls `tick` once per
//! frame. Nothing here blocks or spawns threads.

use std::time::Duration;

use super::collision::{has_collision, resolve_collision};
use super::rng::RandomSource;
use super::state::{Simulation, Viewport};
use crate::platform::{Renderer, SurfaceHost};
use crate::surface::{Control, SurfaceEvent};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Surface not configured yet; nothing ran
    pub skipped: bool,
    /// Arena index of the bubble spawned this frame
    pub spawned: Option<usize>,
    /// Bubbles drawn
    pub drawn: usize,
    /// Colliding pairs whose velocities changed
    pub collisions: u32,
}

impl FrameStats {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

/// Advance the simulation by one frame.
///
/// `elapsed` is monotonic time since engine start. Before the surface is
/// configured this is a no-op: no spawn, no integration, no drawing.
pub fn tick<R: RandomSource>(
    sim: &mut Simulation<R>,
    elapsed: Duration,
    renderer: &mut impl Renderer,
) -> FrameStats {
    if !sim.is_ready() {
        log::debug!("frame skipped: surface not configured");
        return FrameStats::skipped();
    }

    sim.frame += 1;
    let mut stats = FrameStats::default();

    renderer.clear();

    // At most one admission per frame
    let active = sim.bubbles.len();
    if let Some(bubble) = sim.scheduler.admit(elapsed, active, &sim.viewport) {
        if let Ok(index) = sim.bubbles.push(bubble) {
            log::debug!(
                "spawned bubble {} at {}ms: vel=({:.2}, {:.2}) appearance={}",
                index,
                elapsed.as_millis(),
                bubble.vel.x,
                bubble.vel.y,
                bubble.appearance.index()
            );
            stats.spawned = Some(index);
        }
    }

    let viewport = sim.viewport;
    let bubbles = sim.bubbles.as_mut_slice();

    for cur in 0..bubbles.len() {
        renderer.draw(bubbles[cur].appearance, bubbles[cur].rect());
        stats.drawn += 1;

        bubbles[cur].reflect(&viewport);

        if has_collision(bubbles, cur) {
            stats.collisions += resolve_collision(bubbles, cur);
        }

        bubbles[cur].integrate();
    }

    renderer.present();
    stats
}

impl<R: RandomSource> Simulation<R> {
    /// See [`tick`]
    pub fn tick(&mut self, elapsed: Duration, renderer: &mut impl Renderer) -> FrameStats {
        tick(self, elapsed, renderer)
    }

    /// Output size notification. Ignored until the surface is configured.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if !self.is_ready() {
            log::debug!("resize to {}x{} ignored: surface not configured", width, height);
            return;
        }
        self.apply_viewport(width, height);
    }

    /// Configure event from the compositor.
    ///
    /// Resizes the host, acknowledges `serial` and adopts the new size as the
    /// viewport. The first call makes the simulation ready.
    pub fn on_configure(&mut self, serial: u32, width: u32, height: u32, host: &mut impl SurfaceHost) {
        self.surface.configure(host, serial, width, height);
        self.apply_viewport(width, height);
    }

    /// Dispatch one surface event
    pub fn handle_event(&mut self, event: SurfaceEvent, host: &mut impl SurfaceHost) -> Control {
        match event {
            SurfaceEvent::Configure {
                serial,
                width,
                height,
            } => self.on_configure(serial, width, height, host),
            SurfaceEvent::Resized { width, height } => self.on_resize(width, height),
            SurfaceEvent::Closed => {
                log::info!("layer surface closed");
                return Control::Exit;
            }
            SurfaceEvent::Quit => {
                log::info!("Bye");
                return Control::Exit;
            }
        }
        Control::Continue
    }

    fn apply_viewport(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport != self.viewport {
            log::debug!("viewport {}x{}", width, height);
            self.viewport = viewport;
        }
    }
}
