//! Collision detection and response between bubbles
//!
//! Bubbles share one size, so overlap is tested on anchor-to-anchor distance
//! and resolved as an equal-mass, perfectly elastic impulse along the contact
//! normal.

use glam::Vec2;

use super::state::Bubble;
use crate::consts::*;

/// Whether two bubbles overlap (anchor distance at most `BUBBLE_SIZE`)
#[inline]
pub fn collides(a: &Bubble, b: &Bubble) -> bool {
    a.pos.distance(b.pos) <= BUBBLE_SIZE
}

/// Whether bubble `cur` overlaps any bubble with a lower index.
///
/// Each pair is visited once per frame, from its higher index, after the
/// lower bubble has already reflected and moved.
pub fn has_collision(bubbles: &[Bubble], cur: usize) -> bool {
    let cur_bubble = &bubbles[cur];
    bubbles[..cur].iter().any(|other| collides(cur_bubble, other))
}

/// Normal component of the relative velocity of `a` with respect to `b`.
///
/// Returns the unit contact normal (pointing from `b` to `a`) and `rv . n`.
/// Positive means the pair is already moving apart.
pub fn contact_normal_velocity(a: &Bubble, b: &Bubble) -> (Vec2, f32) {
    let delta = a.pos - b.pos;
    let dist = delta.length().max(MIN_CONTACT_DISTANCE);
    let normal = delta / dist;
    let normal_vel = (a.vel - b.vel).dot(normal);
    (normal, normal_vel)
}

/// Resolve every collision of bubble `cur` against lower-indexed bubbles.
///
/// Impulses are applied sequentially in index order. A pair that is already
/// separating along its normal is left alone. Returns the number of pairs
/// resolved.
pub fn resolve_collision(bubbles: &mut [Bubble], cur: usize) -> u32 {
    let mut resolved = 0;

    for i in 0..cur {
        if !collides(&bubbles[cur], &bubbles[i]) {
            continue;
        }

        let (normal, normal_vel) = contact_normal_velocity(&bubbles[cur], &bubbles[i]);

        // Separating: handled already, or never approaching
        if normal_vel > 0.0 {
            continue;
        }

        let impulse = normal * normal_vel;
        bubbles[cur].vel -= impulse;
        bubbles[i].vel += impulse;
        resolved += 1;

        log::trace!(
            "bubble {} <-> {}: normal=({:.3}, {:.3}) vn={:.3}",
            cur,
            i,
            normal.x,
            normal.y,
            normal_vel
        );
    }

    resolved
}
