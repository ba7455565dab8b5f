//! Random ball factory
//!
//! Every parameter is a fresh draw from the RNG; nothing is cached between
//! spawns.

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Ball;

/// Parameter ranges for freshly spawned balls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub width: u32,
    pub height: u32,
    /// Centers land in `[margin, dimension - margin]`
    pub margin: u32,
    pub radius: RangeInclusive<u32>,
    /// Drawn independently for each velocity component
    pub speed: RangeInclusive<f32>,
    pub hit_threshold: RangeInclusive<u32>,
}

/// Build a ball with randomly drawn position, radius, color, velocity and
/// hit threshold.
pub fn spawn_ball<R: Rng + ?Sized>(rng: &mut R, config: &SpawnConfig, id: u32) -> Ball {
    let x = rng.random_range(config.margin..=config.width - config.margin);
    let y = rng.random_range(config.margin..=config.height - config.margin);
    let radius = rng.random_range(config.radius.clone());
    let color = [rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()];
    let vel = Vec2::new(
        rng.random_range(config.speed.clone()),
        rng.random_range(config.speed.clone()),
    );
    let hit_threshold = rng.random_range(config.hit_threshold.clone());

    Ball::new(
        id,
        Vec2::new(x as f32, y as f32),
        vel,
        radius as f32,
        hit_threshold,
    )
    .with_color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_ranges() {
        let config = Settings::default().spawn_config();
        let mut rng = Pcg32::seed_from_u64(1234);
        for id in 0..500 {
            let ball = spawn_ball(&mut rng, &config, id);
            assert!(ball.pos.x >= 50.0 && ball.pos.x <= 750.0);
            assert!(ball.pos.y >= 50.0 && ball.pos.y <= 550.0);
            assert!(ball.radius() >= 5.0 && ball.radius() <= 15.0);
            assert!(ball.vel.x.abs() <= 5.0 && ball.vel.y.abs() <= 5.0);
            assert!(config.hit_threshold.contains(&ball.hit_threshold()));
            assert_eq!(ball.hit_count(), 0);
        }
    }

    #[test]
    fn test_spawns_differ() {
        let config = Settings::default().spawn_config();
        let mut rng = Pcg32::seed_from_u64(99);
        let a = spawn_ball(&mut rng, &config, 1);
        let b = spawn_ball(&mut rng, &config, 2);
        assert!(a.pos != b.pos || a.vel != b.vel);
    }
}
