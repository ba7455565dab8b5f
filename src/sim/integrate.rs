//! Per-ball kinematics for one tick

use super::state::{Ball, World};
use super::walls::{WallHits, resolve_walls};

/// Advance a free ball by one tick: move, fall, decay, then bounce off walls.
pub fn integrate(ball: &mut Ball, world: &World) -> WallHits {
    ball.pos += ball.vel;
    ball.vel.y += world.gravity;
    ball.vel = world.damping.apply(ball.vel);
    resolve_walls(ball, world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Damping;
    use glam::Vec2;

    fn world(damping: Damping) -> World {
        World {
            width: 800.0,
            height: 600.0,
            gravity: 0.5,
            wall_restitution: 0.95,
            damping,
            min_bounce_speed: 0.1,
        }
    }

    #[test]
    fn test_free_flight_step() {
        let world = world(Damping::Uniform { factor: 0.5 });
        let mut ball = Ball::new(1, Vec2::new(100.0, 100.0), Vec2::new(2.0, -4.0), 10.0, 5);
        integrate(&mut ball, &world);
        // Position uses the velocity from before this tick
        assert_eq!(ball.pos, Vec2::new(102.0, 96.0));
        assert_eq!(ball.vel, Vec2::new(1.0, -1.75));
    }

    #[test]
    fn test_per_axis_damping() {
        let world = world(Damping::PerAxis { x: 0.5, y: 1.0 });
        let mut ball = Ball::new(1, Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0), 10.0, 5);
        integrate(&mut ball, &world);
        assert_eq!(ball.vel, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_integrate_hands_off_to_walls() {
        let world = world(Damping::Uniform { factor: 1.0 });
        let mut ball = Ball::new(1, Vec2::new(12.0, 300.0), Vec2::new(-4.0, 0.0), 10.0, 5);
        let hits = integrate(&mut ball, &world);
        assert!(hits.left && !hits.floor);
        assert_eq!(ball.pos.x, 10.0);
        assert!((ball.vel.x - 3.8).abs() < 1e-5);
    }

    #[test]
    fn test_dropped_ball_keeps_a_bounded_bounce() {
        let world = world(Damping::from_friction(0.01));
        let start = 300.0;
        let mut ball = Ball::new(1, Vec2::new(400.0, start), Vec2::ZERO, 10.0, 5);
        let floor = world.height - ball.radius();

        let mut late_peak = floor;
        for tick in 0..5_000 {
            integrate(&mut ball, &world);
            assert!(world.contains(ball.pos, ball.radius()));
            // Never climbs above the drop height
            assert!(ball.pos.y >= start - 1e-3);
            if tick >= 4_500 {
                late_peak = late_peak.min(ball.pos.y);
            }
        }

        // Gravity added after the move keeps a small steady bounce going
        let height = floor - late_peak;
        assert!(height > 10.0 && height < 60.0, "bounce height {height}");
    }
}
