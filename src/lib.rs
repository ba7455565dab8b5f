//! Marble Sandbox - a 2D bouncing-marble physics sandbox
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (integration, walls, collisions, lifecycle, drag)
//! - `renderer`: Mesh building for the rendering collaborator
//! - `platform`: Input and timing collaborators
//! - `runner`: The frame loop tying the collaborators to the simulation
//! - `settings`: Data-driven world and spawn tuning

pub mod error;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use runner::{RunSummary, run};
pub use settings::Settings;

/// Simulation defaults (overridable through [`Settings`])
pub mod consts {
    /// Target tick rate; the engine advances exactly one tick per frame
    pub const TICK_RATE_HZ: u32 = 60;

    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: u32 = 800;
    pub const ARENA_HEIGHT: u32 = 600;

    /// Added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Fraction of speed kept after a wall bounce (marbles are very elastic)
    pub const WALL_RESTITUTION: f32 = 0.95;
    /// Per-tick velocity loss; damping factor is `1 - FRICTION`
    pub const FRICTION: f32 = 0.01;
    /// Floor bounces slower than this come to rest
    pub const MIN_BOUNCE_SPEED: f32 = 0.1;

    /// Population size
    pub const BALL_COUNT: usize = 10;
    /// Spawn radius range (inclusive, whole pixels)
    pub const BALL_RADIUS_MIN: u32 = 5;
    pub const BALL_RADIUS_MAX: u32 = 15;
    /// Spawn velocity range per axis (pixels/tick)
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Collisions a ball survives before it is replaced (inclusive range)
    pub const HIT_THRESHOLD_MIN: u32 = 3;
    pub const HIT_THRESHOLD_MAX: u32 = 10;
    /// Distance from each wall inside which no ball is spawned
    pub const SPAWN_MARGIN: u32 = 50;

    /// Extra push added when separating overlapping balls
    pub const SEPARATION_EPSILON: f32 = 0.01;

    /// Pointer samples averaged into the drag velocity
    pub const DRAG_HISTORY: usize = 15;

    /// Headless run length when no limit is configured (10 s at 60 Hz)
    pub const HEADLESS_MAX_TICKS: u64 = 600;
}
