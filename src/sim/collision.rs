//! Ball-ball collision detection and response
//!
//! Every unordered pair `(i, j)` with `i < j` is checked once per tick, in
//! ascending index order. Pairs are resolved one after another against the
//! already-updated balls, so a ball caught in a triple overlap sees the
//! result of earlier pairs. Balls are equal-mass: radius does not weight the
//! momentum exchange.

use glam::Vec2;

use super::state::{Ball, World};
use super::walls::clamp_to_arena;
use crate::consts::SEPARATION_EPSILON;

/// Overlap between two balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector pointing from the second ball's center toward the first's
    pub normal: Vec2,
    /// Center distance
    pub distance: f32,
    /// Radius sum minus distance (positive while overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Check two balls for overlap.
    ///
    /// Coincident centers have no defined normal; `+x` is used instead.
    pub fn between(a: &Ball, b: &Ball) -> Option<Self> {
        let delta = a.pos - b.pos;
        let distance = delta.length();
        let radii = a.radius() + b.radius();
        if distance >= radii {
            return None;
        }

        let normal = if distance > 0.0 {
            delta / distance
        } else {
            Vec2::X
        };
        Some(Self {
            normal,
            distance,
            penetration: radii - distance,
        })
    }
}

/// Equal-mass elastic exchange along `normal`.
///
/// Both velocities are rotated into the collision frame (x along the
/// normal), their normal components are swapped, and the result is rotated
/// back. Tangential components are untouched.
pub fn exchange_normal_velocity(vel_a: Vec2, vel_b: Vec2, normal: Vec2) -> (Vec2, Vec2) {
    // Rotating by the conjugate of a unit vector undoes its angle
    let into_frame = Vec2::new(normal.x, -normal.y);
    let local_a = into_frame.rotate(vel_a);
    let local_b = into_frame.rotate(vel_b);

    let swapped_a = Vec2::new(local_b.x, local_a.y);
    let swapped_b = Vec2::new(local_a.x, local_b.y);

    (normal.rotate(swapped_a), normal.rotate(swapped_b))
}

/// Push two overlapping balls apart along the contact normal, half each.
///
/// The push overshoots by [`SEPARATION_EPSILON`] so the pair is strictly
/// apart afterwards, then both are clamped back into the arena.
pub fn separate(a: &mut Ball, b: &mut Ball, contact: &Contact, world: &World) {
    let push = contact.normal * ((contact.penetration + SEPARATION_EPSILON) * 0.5);
    a.pos += push;
    b.pos -= push;
    clamp_to_arena(a, world);
    clamp_to_arena(b, world);
}

/// Resolve a single colliding pair: count the hit, exchange velocities,
/// de-overlap. Returns `false` when the balls do not touch.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, world: &World) -> bool {
    let Some(contact) = Contact::between(a, b) else {
        return false;
    };

    a.record_hit();
    b.record_hit();

    let (vel_a, vel_b) = exchange_normal_velocity(a.vel, b.vel, contact.normal);
    a.vel = vel_a;
    b.vel = vel_b;

    separate(a, b, &contact, world);
    true
}

/// Check and resolve every pair once, returning the ids of colliding pairs
/// in resolution order. Never adds or removes balls.
pub fn resolve_collisions(balls: &mut [Ball], world: &World) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();

    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, world) {
                log::trace!("Collision between ball {} and ball {}", a.id, b.id);
                pairs.push((a.id, b.id));
            }
        }
    }

    pairs
}
