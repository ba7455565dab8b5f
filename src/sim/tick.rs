//! Fixed timestep simulation tick
//!
//! One call advances the whole population by exactly one step.

use glam::Vec2;
use serde::Serialize;

use super::collision::resolve_collisions;
use super::integrate::integrate;
use super::lifecycle::{Retirement, retire_exhausted};
use super::selection::SelectionController;
use super::state::{BallState, SimulationState};

/// Input for a single tick, already reduced from raw events
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer pressed at this arena position
    pub pointer_down: Option<Vec2>,
    /// Pointer released
    pub pointer_up: bool,
    /// Pause toggle
    pub pause: bool,
    /// Drag velocity derived from the pointer trajectory
    pub drag: Vec2,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    /// Colliding pairs by id, in resolution order
    pub collisions: Vec<(u32, u32)>,
    pub retirements: Vec<Retirement>,
    /// Balls grabbed by a pointer press
    pub grabbed: Vec<u32>,
    /// Balls freed by a pointer release
    pub released: Vec<u32>,
    /// Balls that touched at least one wall
    pub wall_bounces: u32,
}

/// Advance the simulation by one tick.
///
/// Order: pointer transitions, per-ball motion (integrator or drag
/// override), pairwise collisions, then retirement and respawn. A paused
/// tick only honours pointer release.
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    if input.pause {
        state.paused = !state.paused;
        log::info!(
            "Simulation {} at tick {}",
            if state.paused { "paused" } else { "resumed" },
            state.time_ticks
        );
    }

    let controller = SelectionController::new(input.drag);
    if !state.paused {
        if let Some(pointer) = input.pointer_down {
            report.grabbed = controller.press(&mut state.balls, pointer);
        }
    }
    if input.pointer_up {
        report.released = controller.release(&mut state.balls);
    }

    if state.paused {
        return report;
    }

    state.time_ticks += 1;
    let world = state.world;

    for ball in &mut state.balls {
        let hits = match ball.state {
            BallState::Free => integrate(ball, &world),
            BallState::Selected => controller.step(ball, &world),
        };
        if hits.any() {
            report.wall_bounces += 1;
        }
    }

    report.collisions = resolve_collisions(&mut state.balls, &world);
    report.retirements = retire_exhausted(state);

    report
}
