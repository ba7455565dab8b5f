//! Simulation state and core types
//!
//! Everything a tick reads or writes lives here; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{SpawnConfig, spawn_ball};
use crate::error::SimResult;
use crate::settings::Settings;

/// Per-tick velocity decay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Damping {
    /// Same factor on both axes
    Uniform { factor: f32 },
    /// Separate factors for x and y
    PerAxis { x: f32, y: f32 },
}

impl Damping {
    /// Uniform damping expressed as `1 - friction`
    pub fn from_friction(friction: f32) -> Self {
        Damping::Uniform {
            factor: 1.0 - friction,
        }
    }

    /// Apply one tick of decay to a velocity
    #[inline]
    pub fn apply(&self, vel: Vec2) -> Vec2 {
        match *self {
            Damping::Uniform { factor } => vel * factor,
            Damping::PerAxis { x, y } => vel * Vec2::new(x, y),
        }
    }

    /// All factors in (0, 1]
    pub fn is_valid(&self) -> bool {
        let ok = |f: f32| f > 0.0 && f <= 1.0;
        match *self {
            Damping::Uniform { factor } => ok(factor),
            Damping::PerAxis { x, y } => ok(x) && ok(y),
        }
    }
}

/// Arena bounds and physics constants, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Added to vertical velocity every tick (y grows downward)
    pub gravity: f32,
    /// Fraction of speed kept on a wall bounce
    pub wall_restitution: f32,
    pub damping: Damping,
    /// Floor bounces slower than this are zeroed
    pub min_bounce_speed: f32,
}

impl World {
    /// Whether a disk at `pos` lies fully inside the arena
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Ball grip state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// Moved by the integrator
    #[default]
    Free,
    /// Puppeted by the pointer drag velocity
    Selected,
}

/// Display color, irrelevant to physics
pub type Color = [u8; 3];

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub state: BallState,
    radius: f32,
    hit_count: u32,
    hit_threshold: u32,
}

impl Ball {
    /// Create a fresh ball with no hits recorded.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not a positive finite number or `hit_threshold`
    /// is zero.
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, hit_threshold: u32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "ball radius must be positive, got {radius}"
        );
        assert!(hit_threshold > 0, "ball hit threshold must be at least 1");
        Self {
            id,
            pos,
            vel,
            color: [255, 255, 255],
            state: BallState::Free,
            radius,
            hit_count: 0,
            hit_threshold,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    #[inline]
    pub fn hit_threshold(&self) -> u32 {
        self.hit_threshold
    }

    /// Count one collision
    pub(crate) fn record_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }

    /// Reached its hit threshold and must be replaced
    pub fn is_exhausted(&self) -> bool {
        self.hit_count >= self.hit_threshold
    }

    pub fn is_selected(&self) -> bool {
        self.state == BallState::Selected
    }

    /// Point-in-circle test
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub world: World,
    pub spawn: SpawnConfig,
    /// Live balls; index order drives collision pair enumeration
    pub balls: Vec<Ball>,
    /// Randomness for spawn parameters
    pub rng: Pcg32,
    /// Ticks simulated (paused ticks excluded)
    pub time_ticks: u64,
    pub paused: bool,
    next_id: u32,
}

impl SimulationState {
    /// Create a state with no balls
    pub fn empty(world: World, spawn: SpawnConfig, seed: u64) -> Self {
        Self {
            seed,
            world,
            spawn,
            balls: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            paused: false,
            next_id: 1,
        }
    }

    /// Create a state populated with `ball_count` random balls
    pub fn new(world: World, spawn: SpawnConfig, ball_count: usize, seed: u64) -> Self {
        let mut state = Self::empty(world, spawn, seed);
        state.balls.reserve(ball_count);
        for _ in 0..ball_count {
            state.spawn_ball();
        }
        state
    }

    /// Create a populated state from settings, rejecting any that fail
    /// validation before a ball is spawned
    pub fn from_settings(settings: &Settings, seed: u64) -> SimResult<Self> {
        settings.validate()?;
        Ok(Self::new(
            settings.world(),
            settings.spawn_config(),
            settings.ball_count,
            seed,
        ))
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a random ball at the end of the collection, returning its id
    pub fn spawn_ball(&mut self) -> u32 {
        let id = self.next_entity_id();
        let ball = spawn_ball(&mut self.rng, &self.spawn, id);
        self.balls.push(ball);
        id
    }

    pub fn ball(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }
}
