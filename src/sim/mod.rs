//! Fixed-tick simulation module
//!
//! All physics lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection index)

pub mod collision;
pub mod integrate;
pub mod lifecycle;
pub mod selection;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod walls;

pub use collision::{Contact, exchange_normal_velocity, resolve_collisions, resolve_pair};
pub use integrate::integrate;
pub use lifecycle::{Retirement, retire_exhausted};
pub use selection::SelectionController;
pub use spawn::{SpawnConfig, spawn_ball};
pub use state::{Ball, BallState, Color, Damping, SimulationState, World};
pub use tick::{TickInput, TickReport, tick};
pub use walls::{WallHits, clamp_to_arena, resolve_walls};
