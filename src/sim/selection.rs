//! Pointer drag override
//!
//! A pointer press grabs every ball under the pointer; release frees them
//! all. While selected, a ball ignores gravity and damping and moves with the
//! drag velocity supplied by the input layer, but still bounces off walls.

use glam::Vec2;

use super::state::{Ball, BallState, World};
use super::walls::{WallHits, resolve_walls};

/// Applies the current drag velocity to selected balls
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionController {
    /// Velocity forced onto selected balls this tick
    pub drag: Vec2,
}

impl SelectionController {
    pub fn new(drag: Vec2) -> Self {
        Self { drag }
    }

    /// Select every free ball containing `pointer`, returning their ids
    pub fn press(&self, balls: &mut [Ball], pointer: Vec2) -> Vec<u32> {
        let mut grabbed = Vec::new();
        for ball in balls.iter_mut() {
            if ball.state == BallState::Free && ball.contains_point(pointer) {
                ball.state = BallState::Selected;
                grabbed.push(ball.id);
            }
        }
        if !grabbed.is_empty() {
            log::debug!("Pointer down at {:?} grabbed balls {:?}", pointer, grabbed);
        }
        grabbed
    }

    /// Free every selected ball, returning their ids
    pub fn release(&self, balls: &mut [Ball]) -> Vec<u32> {
        let mut released = Vec::new();
        for ball in balls.iter_mut().filter(|b| b.is_selected()) {
            ball.state = BallState::Free;
            released.push(ball.id);
        }
        if !released.is_empty() {
            log::debug!("Pointer up released balls {:?}", released);
        }
        released
    }

    /// Stand-in for the integrator on a selected ball
    pub fn step(&self, ball: &mut Ball, world: &World) -> WallHits {
        ball.vel = self.drag;
        ball.pos += ball.vel;
        resolve_walls(ball, world)
    }
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
    fn test_press_selects_ball_under_pointer() {
        let mut balls = vec![
            Ball::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, 5),
            Ball::new(2, Vec2::new(300.0, 100.0), Vec2::ZERO, 10.0, 5),
        ];
        let controller = SelectionController::default();
        assert_eq!(controller.press(&mut balls, Vec2::new(303.0, 96.0)), vec![2]);
        assert!(!balls[0].is_selected());
        assert!(balls[1].is_selected());

        assert!(controller.press(&mut balls, Vec2::new(500.0, 500.0)).is_empty());
    }

    #[test]
    fn test_release_frees_all() {
        let mut balls = vec![
            Ball::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, 5),
            Ball::new(2, Vec2::new(105.0, 100.0), Vec2::ZERO, 10.0, 5),
        ];
        let controller = SelectionController::default();
        // Overlapping balls can both be grabbed by one press
        assert_eq!(controller.press(&mut balls, Vec2::new(102.0, 100.0)), vec![1, 2]);
        assert_eq!(controller.release(&mut balls), vec![1, 2]);
        assert!(balls.iter().all(|b| !b.is_selected()));
    }

    #[test]
    fn test_step_follows_drag_without_gravity() {
        let controller = SelectionController::new(Vec2::new(4.0, -2.0));
        let mut ball = Ball::new(1, Vec2::new(100.0, 100.0), Vec2::new(9.0, 9.0), 10.0, 5);
        ball.state = BallState::Selected;
        controller.step(&mut ball, &world());
        assert_eq!(ball.vel, Vec2::new(4.0, -2.0));
        assert_eq!(ball.pos, Vec2::new(104.0, 98.0));
    }

    #[test]
    fn test_drag_cannot_push_through_wall() {
        let controller = SelectionController::new(Vec2::new(50.0, 0.0));
        let mut ball = Ball::new(1, Vec2::new(770.0, 300.0), Vec2::ZERO, 10.0, 5);
        ball.state = BallState::Selected;
        controller.step(&mut ball, &world());
        assert_eq!(ball.pos.x, 790.0);
    }
}
