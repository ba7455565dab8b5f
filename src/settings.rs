//! Sandbox settings
//!
//! Loaded from a JSON file next to the binary. Every field is optional in the
//! file; missing keys fall back to the defaults in [`crate::consts`].

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::{Damping, SpawnConfig, World};

/// Sandbox settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena width in pixels
    pub width: u32,
    /// Arena height in pixels
    pub height: u32,

    // === Physics ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Fraction of speed kept after a wall bounce, in (0, 1]
    pub wall_restitution: f32,
    /// Per-tick velocity decay
    pub damping: Damping,
    /// Floor bounces slower than this are zeroed
    pub min_bounce_speed: f32,

    // === Population ===
    pub ball_count: usize,
    /// Spawn radius range (whole pixels)
    pub radius_range: RangeInclusive<u32>,
    /// Spawn velocity range, drawn independently per axis
    pub speed_range: RangeInclusive<f32>,
    /// Hit threshold range
    pub hit_threshold_range: RangeInclusive<u32>,
    /// Balls spawn inside `[margin, dimension - margin]`
    pub spawn_margin: u32,

    // === Loop ===
    pub tick_rate_hz: u32,
    /// Pointer samples averaged into the drag velocity
    pub drag_history: usize,
    /// RNG seed; a random seed is picked when absent
    pub seed: Option<u64>,
    /// Stop the headless run after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
            damping: Damping::from_friction(FRICTION),
            min_bounce_speed: MIN_BOUNCE_SPEED,

            ball_count: BALL_COUNT,
            radius_range: BALL_RADIUS_MIN..=BALL_RADIUS_MAX,
            speed_range: -BALL_START_SPEED..=BALL_START_SPEED,
            hit_threshold_range: HIT_THRESHOLD_MIN..=HIT_THRESHOLD_MAX,
            spawn_margin: SPAWN_MARGIN,

            tick_rate_hz: TICK_RATE_HZ,
            drag_history: DRAG_HISTORY,
            seed: None,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Default settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "marble_sandbox.json";

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| SimError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: &Path) -> SimResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> SimResult<()> {
        if self.width == 0 {
            return Err(SimError::invalid("width", self.width, "a positive integer"));
        }
        if self.height == 0 {
            return Err(SimError::invalid("height", self.height, "a positive integer"));
        }
        if !self.gravity.is_finite() {
            return Err(SimError::invalid("gravity", self.gravity, "a finite number"));
        }
        if !(self.wall_restitution > 0.0 && self.wall_restitution <= 1.0) {
            return Err(SimError::invalid(
                "wall_restitution",
                self.wall_restitution,
                "a value in (0, 1]",
            ));
        }
        if !self.damping.is_valid() {
            return Err(SimError::invalid(
                "damping",
                self.damping,
                "factors in (0, 1]",
            ));
        }
        if !(self.min_bounce_speed >= 0.0) {
            return Err(SimError::invalid(
                "min_bounce_speed",
                self.min_bounce_speed,
                "a non-negative number",
            ));
        }
        if self.ball_count == 0 {
            return Err(SimError::invalid("ball_count", self.ball_count, "at least 1"));
        }
        if self.radius_range.is_empty() || *self.radius_range.start() == 0 {
            return Err(SimError::invalid(
                "radius_range",
                &self.radius_range,
                "a non-empty range of positive radii",
            ));
        }
        if !(self.speed_range.start().is_finite()
            && self.speed_range.end().is_finite()
            && self.speed_range.start() <= self.speed_range.end())
        {
            return Err(SimError::invalid(
                "speed_range",
                &self.speed_range,
                "a non-empty finite range",
            ));
        }
        if self.hit_threshold_range.is_empty() || *self.hit_threshold_range.start() == 0 {
            return Err(SimError::invalid(
                "hit_threshold_range",
                &self.hit_threshold_range,
                "a non-empty range starting at 1 or more",
            ));
        }
        let margin = self.spawn_margin;
        if margin.saturating_mul(2) > self.width.min(self.height) {
            return Err(SimError::invalid(
                "spawn_margin",
                margin,
                "at most half the smaller arena dimension",
            ));
        }
        if *self.radius_range.end() > margin {
            return Err(SimError::invalid(
                "radius_range",
                &self.radius_range,
                "a largest radius no bigger than spawn_margin",
            ));
        }
        if self.tick_rate_hz == 0 {
            return Err(SimError::invalid("tick_rate_hz", self.tick_rate_hz, "at least 1"));
        }
        if self.drag_history == 0 {
            return Err(SimError::invalid("drag_history", self.drag_history, "at least 1"));
        }
        Ok(())
    }

    /// Arena and physics constants for the engine
    pub fn world(&self) -> World {
        World {
            width: self.width as f32,
            height: self.height as f32,
            gravity: self.gravity,
            wall_restitution: self.wall_restitution,
            damping: self.damping,
            min_bounce_speed: self.min_bounce_speed,
        }
    }

    /// Parameter ranges for the spawn factory
    pub fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            width: self.width,
            height: self.height,
            margin: self.spawn_margin,
            radius: self.radius_range.clone(),
            speed: self.speed_range.clone(),
            hit_threshold: self.hit_threshold_range.clone(),
        }
    }
}
