//! Per-frame snapshot handed to the rendering collaborator
//!
//! The renderer only ever sees a read-only [`Frame`]; nothing it does feeds
//! back into the simulation.

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors, rgba};
use crate::sim::{Color, SimulationState};

/// What the renderer needs to know about one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSnapshot {
    pub id: u32,
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    pub hit_count: u32,
    pub selected: bool,
}

/// Read-only view of the simulation after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub tick: u64,
    pub paused: bool,
    pub balls: Vec<BallSnapshot>,
}

impl Frame {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            width: state.world.width,
            height: state.world.height,
            tick: state.time_ticks,
            paused: state.paused,
            balls: state
                .balls
                .iter()
                .map(|b| BallSnapshot {
                    id: b.id,
                    position: b.pos,
                    radius: b.radius(),
                    color: b.color,
                    hit_count: b.hit_count(),
                    selected: b.is_selected(),
                })
                .collect(),
        }
    }
}

/// Rendering collaborator
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Turns frames into a triangle-list vertex buffer for a GPU backend
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    vertices: Vec<Vertex>,
    /// Segments per ball circle
    pub circle_segments: u32,
    /// Draw each ball's hit count on top of it
    pub show_hit_counts: bool,
    pub wall_thickness: f32,
    frames: u64,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            circle_segments: 24,
            show_hit_counts: true,
            wall_thickness: 2.0,
            frames: 0,
        }
    }
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last rendered frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes of the last frame, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn push_walls(&mut self, width: f32, height: f32) {
        let corners = [
            Vec2::ZERO,
            Vec2::new(width, 0.0),
            Vec2::new(width, height),
            Vec2::new(0.0, height),
        ];
        for i in 0..corners.len() {
            let from = corners[i];
            let to = corners[(i + 1) % corners.len()];
            self.vertices
                .extend(shapes::line(from, to, self.wall_thickness, colors::WALL));
        }
    }
}

impl Renderer for MeshRenderer {
    fn render(&mut self, frame: &Frame) {
        self.vertices.clear();
        self.vertices.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(frame.width, frame.height),
            colors::BACKGROUND,
        ));
        self.push_walls(frame.width, frame.height);

        for ball in &frame.balls {
            self.vertices.extend(shapes::circle(
                ball.position,
                ball.radius,
                rgba(ball.color),
                self.circle_segments,
            ));
            if ball.selected {
                self.vertices.extend(shapes::ring(
                    ball.position,
                    ball.radius,
                    ball.radius + 2.0,
                    colors::SELECTED_RING,
                    self.circle_segments,
                ));
            }
            if self.show_hit_counts {
                self.vertices.extend(shapes::number(
                    ball.hit_count,
                    ball.position,
                    ball.radius,
                    colors::LABEL,
                ));
            }
        }

        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::BallState;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = SimulationState::from_settings(&Settings::default(), 11).unwrap();
        state.balls[0].state = BallState::Selected;
        let frame = Frame::capture(&state);
        assert_eq!(frame.balls.len(), state.balls.len());
        assert_eq!(frame.width, 800.0);
        assert!(frame.balls[0].selected);
        assert_eq!(frame.balls[1].position, state.balls[1].pos);
        assert_eq!(frame.balls[1].radius, state.balls[1].radius());
    }

    #[test]
    fn test_mesh_renderer_builds_walls_and_balls() {
        let state = SimulationState::from_settings(&Settings::default(), 11).unwrap();
        let frame = Frame::capture(&state);

        let mut renderer = MeshRenderer {
            show_hit_counts: false,
            ..Default::default()
        };
        renderer.render(&frame);
        let expected = 6 + 4 * 6 + frame.balls.len() * 24 * 3;
        assert_eq!(renderer.vertices().len(), expected);
        assert_eq!(renderer.as_bytes().len(), expected * 24);
        // Background goes first so everything else draws over it
        assert!(renderer.vertices()[..6].iter().all(|v| v.color == colors::BACKGROUND));

        // Re-rendering replaces the previous frame
        renderer.render(&frame);
        assert_eq!(renderer.vertices().len(), expected);
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn test_hit_count_labels_add_geometry() {
        let state = SimulationState::from_settings(&Settings::default(), 11).unwrap();
        let frame = Frame::capture(&state);
        let mut plain = MeshRenderer {
            show_hit_counts: false,
            ..Default::default()
        };
        let mut labelled = MeshRenderer::new();
        plain.render(&frame);
        labelled.render(&frame);
        assert!(labelled.vertices().len() > plain.vertices().len());
    }
}
