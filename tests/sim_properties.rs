use std::time::Duration;

use bubbles::consts::{BUBBLE_SIZE, NBUBBLES};
use bubbles::platform::{Clock, FrameRecorder, HeadlessSurface, ManualClock};
use bubbles::sim::{
    Appearance, Bubble, ScriptedRandom, Simulation, SpawnScheduler, contact_normal_velocity,
    resolve_collision,
};
use glam::Vec2;
use proptest::prelude::*;

fn bubble(pos: (f32, f32), vel: (f32, f32)) -> Bubble {
    Bubble::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), Appearance::default())
}

fn configured(width: u32, height: u32) -> Simulation<ScriptedRandom> {
    let mut sim = Simulation::new(ScriptedRandom::new(vec![0.1, 0.7, 0.4, 0.9, 0.3]));
    sim.on_configure(1, width, height, &mut HeadlessSurface::new());
    sim
}

proptest! {
    #[test]
    fn elastic_resolution_conserves_momentum(
        ax in -100.0f32..100.0, ay in -100.0f32..100.0,
        dx in -180.0f32..180.0, dy in -180.0f32..180.0,
        avx in -10.0f32..10.0, avy in -10.0f32..10.0,
        bvx in -10.0f32..10.0, bvy in -10.0f32..10.0,
    ) {
        let mut pair = [bubble((ax, ay), (avx, avy)), bubble((ax + dx, ay + dy), (bvx, bvy))];
        let before = pair[0].vel + pair[1].vel;

        resolve_collision(&mut pair, 1);

        let after = pair[0].vel + pair[1].vel;
        prop_assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn separating_pairs_are_untouched(
        dx in -200.0f32..200.0, dy in -200.0f32..200.0,
        avx in -10.0f32..10.0, avy in -10.0f32..10.0,
        bvx in -10.0f32..10.0, bvy in -10.0f32..10.0,
    ) {
        let mut pair = [bubble((500.0, 500.0), (avx, avy)), bubble((500.0 + dx, 500.0 + dy), (bvx, bvy))];
        let (_, normal_vel) = contact_normal_velocity(&pair[1], &pair[0]);
        prop_assume!(normal_vel > 0.0);

        let before = pair;
        prop_assert_eq!(resolve_collision(&mut pair, 1), 0);
        prop_assert_eq!(pair, before);
    }

    #[test]
    fn crowded_tick_resolves_each_pair_at_most_once(
        bodies in prop::collection::vec(
            ((1000.0f32..1300.0, 1000.0f32..1300.0), (-5.0f32..5.0, -5.0f32..5.0)),
            2..6,
        ),
    ) {
        let mut sim = configured(4000, 4000);
        for &(pos, vel) in &bodies {
            sim.bubbles.push(bubble(pos, vel)).unwrap();
        }
        let n = bodies.len() as u32;
        let momentum_before: Vec2 = sim.bubbles.iter().map(|b| b.vel).sum();

        let stats = sim.tick(Duration::ZERO, &mut FrameRecorder::new());

        // Far from every edge: only pairwise impulses act
        let momentum_after: Vec2 = sim.bubbles.iter().map(|b| b.vel).sum();
        prop_assert!(stats.collisions <= n * (n - 1) / 2);
        prop_assert!((momentum_before - momentum_after).length() < 1e-3);
    }

    #[test]
    fn nothing_moves_before_configure(frames in 1usize..200, step_ms in 1u64..2000) {
        let mut sim = Simulation::new(ScriptedRandom::new(vec![0.5]));
        let mut renderer = FrameRecorder::new();

        for frame in 0..frames {
            let stats = sim.tick(Duration::from_millis(frame as u64 * step_ms), &mut renderer);
            prop_assert!(stats.skipped);
        }

        prop_assert_eq!(sim.active_count(), 0);
        prop_assert_eq!(renderer.total_draws, 0);
    }

    #[test]
    fn spawns_are_monotonic_and_time_gated(
        steps in prop::collection::vec(0u64..1500, 1..120),
        interval_ms in 50u64..1000,
    ) {
        let interval = Duration::from_millis(interval_ms);
        let rng = ScriptedRandom::new(vec![0.2, 0.8, 0.5]);
        let mut sim = Simulation::with_scheduler(SpawnScheduler::with_interval(rng, interval));
        sim.on_configure(7, 1920, 1080, &mut HeadlessSurface::new());

        let mut renderer = FrameRecorder::new();
        let mut elapsed = Duration::ZERO;
        let mut last_count = 0;

        for step in steps {
            elapsed += Duration::from_millis(step);
            let stats = sim.tick(elapsed, &mut renderer);
            let count = sim.active_count();

            prop_assert!(count >= last_count);
            prop_assert!(count - last_count <= 1);
            prop_assert!(count <= NBUBBLES);
            if let Some(k) = stats.spawned {
                // k-th spawn (0-indexed) needs k + 1 elapsed quanta
                prop_assert!(elapsed >= interval * (k as u32 + 1));
            }
            last_count = count;
        }
    }

    #[test]
    fn isolated_bubble_reflects_off_left_edge(
        x in -50.0f32..-0.01, y in 0.0f32..300.0, vx in -10.0f32..-0.1, vy in -5.0f32..5.0,
    ) {
        let mut sim = configured(800, 600);
        sim.bubbles.push(bubble((x, y), (vx, vy))).unwrap();

        sim.tick(Duration::ZERO, &mut FrameRecorder::new());

        let after = sim.bubbles.get(0).unwrap();
        prop_assert_eq!(after.vel.x, -vx);
    }

    #[test]
    fn resize_is_idempotent(width in 300u32..4000, height in 300u32..4000) {
        let mut sim = configured(800, 600);
        sim.bubbles.push(bubble((10.0, 20.0), (1.0, -1.0))).unwrap();
        let before = sim.bubbles.as_slice().to_vec();

        sim.on_resize(width, height);
        let once = sim.viewport;
        sim.on_resize(width, height);

        prop_assert_eq!(sim.viewport, once);
        prop_assert_eq!(sim.bubbles.as_slice(), &before[..]);
    }
}

#[test]
fn threshold_boundary() {
    let far = [bubble((0.0, 0.0), (1.0, 0.0)), bubble((BUBBLE_SIZE + 1.0, 0.0), (-1.0, 0.0))];
    assert!(!bubbles::sim::has_collision(&far, 1));

    let near = [bubble((0.0, 0.0), (1.0, 0.0)), bubble((BUBBLE_SIZE - 1.0, 0.0), (-1.0, 0.0))];
    assert!(bubbles::sim::has_collision(&near, 1));
}

#[test]
fn full_run_fills_arena_with_finite_state() {
    let mut sim = configured(1920, 1080);
    let mut renderer = FrameRecorder::new();
    let mut clock = ManualClock::new();

    for _ in 0..3000 {
        let stats = sim.tick(clock.now(), &mut renderer);
        clock.advance(Duration::from_millis(16));
        assert_eq!(stats.drawn, sim.active_count());
        assert!(sim.bubbles.iter().all(|b| b.pos.is_finite() && b.vel.is_finite()));
    }

    assert_eq!(sim.active_count(), NBUBBLES);
    assert_eq!(renderer.presented, 3000);
}
