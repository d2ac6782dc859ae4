//! Bubbles entry point
//!
//! Runs the simulation against headless collaborators: a surface that is
//! configured once at startup and a renderer that records draw calls. The
//! frame pump sleeps one frame period, applies pending surface events, then
//! ticks.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::path::PathBuf;

use bubbles::consts::NBUBBLES;
use bubbles::platform::{AppearanceTable, Clock, FramePacer, FrameRecorder, HeadlessSurface, MonotonicClock};
use bubbles::sim::{PcgRandom, Simulation, SpawnScheduler};
use bubbles::{Control, Settings, SurfaceEvent};

/// Serial of the initial configure event sent by the headless compositor
const INITIAL_SERIAL: u32 = 1;

fn settings_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(Settings::CONFIG_ENV))
        .map(PathBuf::from)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bubbles starting...");

    let settings = Settings::load_or_default(settings_path().as_deref());

    let rng = match settings.seed {
        Some(seed) => PcgRandom::new(seed),
        None => PcgRandom::from_entropy(),
    };
    log::info!("Simulation seed: {}", rng.seed());

    let textures = match AppearanceTable::resolve(|_, name| Ok::<_, Infallible>(name.to_string())) {
        Ok(table) => table,
        Err(never) => match never {},
    };
    for (appearance, name) in textures.iter() {
        log::debug!("appearance {} -> {}", appearance.index(), name);
    }

    let mut sim = Simulation::with_scheduler(SpawnScheduler::with_interval(rng, settings.spawn_interval()));
    let mut host = HeadlessSurface::new();
    let mut renderer = FrameRecorder::new();
    let clock = MonotonicClock::new();
    let pacer = FramePacer::new(settings.fps);

    let mut events = VecDeque::from([SurfaceEvent::Configure {
        serial: INITIAL_SERIAL,
        width: settings.output_width,
        height: settings.output_height,
    }]);

    let mut full_logged = false;
    loop {
        pacer.wait();

        if settings.frames.is_some_and(|limit| sim.frame >= limit) {
            events.push_back(SurfaceEvent::Closed);
        }

        let mut control = Control::Continue;
        while let Some(event) = events.pop_front() {
            control = sim.handle_event(event, &mut host);
            if control == Control::Exit {
                break;
            }
        }
        if control == Control::Exit {
            break;
        }

        let stats = sim.tick(clock.now(), &mut renderer);
        if let Some(index) = stats.spawned {
            let bubble = sim.bubbles.as_slice()[index];
            log::info!(
                "Bubble {}/{} ({}) launched",
                index + 1,
                NBUBBLES,
                textures.get(bubble.appearance)
            );
        }
        if sim.bubbles.is_full() && !full_logged {
            log::info!("All {} bubbles active at frame {}", NBUBBLES, sim.frame);
            full_logged = true;
        }
    }

    log::info!(
        "Ran {} frames, {} draws, {} configure acks",
        renderer.presented,
        renderer.total_draws,
        host.acked.len()
    );
}
