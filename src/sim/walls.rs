//! Arena wall handling
//!
//! Walls are the four sides of the `width x height` rectangle. Each axis is
//! handled independently, so a corner contact bounces on both.

use glam::Vec2;

use super::state::{Ball, World};

/// Which walls a ball touched during [`resolve_walls`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub ceiling: bool,
    pub floor: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.ceiling || self.floor
    }
}

/// Clamp a ball into the arena and reflect its velocity with restitution.
///
/// A ball bounces when it penetrates a wall, or sits exactly on it while
/// still moving into it. Floor bounces that would come back slower than
/// `min_bounce_speed` are zeroed so resting balls settle.
pub fn resolve_walls(ball: &mut Ball, world: &World) -> WallHits {
    let r = ball.radius();
    let e = world.wall_restitution;
    let mut hits = WallHits::default();

    let left = ball.pos.x - r;
    let right = ball.pos.x + r - world.width;
    if left < 0.0 || (left == 0.0 && ball.vel.x < 0.0) {
        ball.pos.x = r;
        ball.vel.x = -ball.vel.x * e;
        hits.left = true;
    } else if right > 0.0 || (right == 0.0 && ball.vel.x > 0.0) {
        ball.pos.x = world.width - r;
        ball.vel.x = -ball.vel.x * e;
        hits.right = true;
    }

    let top = ball.pos.y - r;
    let bottom = ball.pos.y + r - world.height;
    if top < 0.0 || (top == 0.0 && ball.vel.y < 0.0) {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y * e;
        hits.ceiling = true;
    } else if bottom > 0.0 || (bottom == 0.0 && ball.vel.y > 0.0) {
        ball.pos.y = world.height - r;
        let bounced = -ball.vel.y * e;
        ball.vel.y = if bounced.abs() < world.min_bounce_speed {
            0.0
        } else {
            bounced
        };
        hits.floor = true;
    }

    hits
}

/// Position-only clamp into `[radius, dimension - radius]`, velocity untouched
pub fn clamp_to_arena(ball: &mut Ball, world: &World) {
    let r = ball.radius();
    ball.pos = ball
        .pos
        .clamp(Vec2::splat(r), Vec2::new(world.width - r, world.height - r));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Damping;

    fn world() -> World {
        World {
            width: 800.0,
            height: 600.0,
            gravity: 0.5,
            wall_restitution: 0.95,
            damping: Damping::from_friction(0.01),
            min_bounce_speed: 0.1,
        }
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = Ball::new(1, Vec2::new(10.0, 300.0), Vec2::new(-2.0, 0.0), 10.0, 5);
        let hits = resolve_walls(&mut ball, &world());
        assert!(hits.left);
        assert_eq!(ball.pos.x, 10.0);
        assert!((ball.vel.x - 1.9).abs() < 1e-5);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_penetrating_right_wall() {
        let mut ball = Ball::new(1, Vec2::new(795.0, 300.0), Vec2::new(3.0, 1.0), 10.0, 5);
        let hits = resolve_walls(&mut ball, &world());
        assert!(hits.right);
        assert_eq!(ball.pos.x, 790.0);
        assert!((ball.vel.x + 2.85).abs() < 1e-5);
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_touching_but_leaving_does_not_bounce() {
        let mut ball = Ball::new(1, Vec2::new(10.0, 300.0), Vec2::new(2.0, 0.0), 10.0, 5);
        let hits = resolve_walls(&mut ball, &world());
        assert!(!hits.any());
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_floor_settles_slow_bounce() {
        let mut ball = Ball::new(1, Vec2::new(400.0, 592.0), Vec2::new(0.0, 0.08), 10.0, 5);
        let hits = resolve_walls(&mut ball, &world());
        assert!(hits.floor);
        assert_eq!(ball.pos.y, 590.0);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_floor_fast_bounce_reflects() {
        let mut ball = Ball::new(1, Vec2::new(400.0, 595.0), Vec2::new(0.0, 4.0), 10.0, 5);
        resolve_walls(&mut ball, &world());
        assert_eq!(ball.pos.y, 590.0);
        assert!((ball.vel.y + 3.8).abs() < 1e-5);
    }

    #[test]
    fn test_ceiling_never_settles() {
        let mut ball = Ball::new(1, Vec2::new(400.0, 8.0), Vec2::new(0.0, -0.05), 10.0, 5);
        resolve_walls(&mut ball, &world());
        assert_eq!(ball.pos.y, 10.0);
        assert!((ball.vel.y - 0.0475).abs() < 1e-6);
    }

    #[test]
    fn test_corner_hits_both_axes() {
        let mut ball = Ball::new(1, Vec2::new(-5.0, 610.0), Vec2::new(-3.0, 6.0), 10.0, 5);
        let hits = resolve_walls(&mut ball, &world());
        assert!(hits.left && hits.floor);
        assert_eq!(ball.pos, Vec2::new(10.0, 590.0));
        assert!(ball.vel.x > 0.0 && ball.vel.y < 0.0);
    }

    #[test]
    fn test_clamp_keeps_velocity() {
        let mut ball = Ball::new(1, Vec2::new(900.0, -20.0), Vec2::new(1.0, 1.0), 10.0, 5);
        clamp_to_arena(&mut ball, &world());
        assert_eq!(ball.pos, Vec2::new(790.0, 10.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
    }
}
