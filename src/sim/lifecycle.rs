//! Hit-count driven retirement and respawn
//!
//! Runs after the collision pass has finished, so the collection is never
//! modified while pairs are being enumerated. Removals and insertions are
//! applied as one batch: survivors keep their relative order and
//! replacements are appended in the order their predecessors were retired.

use serde::Serialize;

use super::state::SimulationState;

/// A ball that hit its threshold and the ball that replaced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Retirement {
    pub retired: u32,
    pub replacement: u32,
}

/// Replace every exhausted ball with a freshly spawned one.
///
/// The population size is unchanged on return.
pub fn retire_exhausted(state: &mut SimulationState) -> Vec<Retirement> {
    let retired: Vec<u32> = state
        .balls
        .iter()
        .filter(|b| b.is_exhausted())
        .map(|b| b.id)
        .collect();
    if retired.is_empty() {
        return Vec::new();
    }

    state.balls.retain(|b| !b.is_exhausted());

    retired
        .into_iter()
        .map(|retired| {
            let replacement = state.spawn_ball();
            log::debug!("Ball {} retired, replaced by ball {}", retired, replacement);
            Retirement {
                retired,
                replacement,
            }
        })
        .collect()
}
