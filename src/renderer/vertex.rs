//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque RGBA from a ball's 8-bit color tag
pub fn rgba(color: Color) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        1.0,
    ]
}

/// Colors for sandbox elements
pub mod colors {
    pub const WALL: [f32; 4] = [0.2, 0.2, 0.25, 1.0];
    pub const LABEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SELECTED_RING: [f32; 4] = [1.0, 0.55, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
