//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let edge1 = center + Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius;
        let edge2 = center + Vec2::from_angle((i + 1) as f32 / segments as f32 * TAU) * radius;

        // Fan triangle from the center
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(edge1.x, edge1.y, color));
        vertices.push(Vertex::new(edge2.x, edge2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let dir1 = Vec2::from_angle(i as f32 / segments as f32 * TAU);
        let dir2 = Vec2::from_angle((i + 1) as f32 / segments as f32 * TAU);
        quad(
            &mut vertices,
            [
                center + dir1 * inner_radius,
                center + dir1 * outer_radius,
                center + dir2 * inner_radius,
                center + dir2 * outer_radius,
            ],
            color,
        );
    }

    vertices
}

/// Generate vertices for a line segment of the given thickness
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let side = (to - from).perp().normalize_or_zero() * (thickness * 0.5);
    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        [from + side, from - side, to + side, to - side],
        color,
    );
    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        [min, Vec2::new(max.x, min.y), Vec2::new(min.x, max.y), max],
        color,
    );
    vertices
}

/// Two triangles from corners `[a1, b1, a2, b2]`, where `a*`/`b*` are the
/// two long edges of the quad
fn quad(vertices: &mut Vec<Vertex>, [a1, b1, a2, b2]: [Vec2; 4], color: [f32; 4]) {
    vertices.push(Vertex::new(a1.x, a1.y, color));
    vertices.push(Vertex::new(b1.x, b1.y, color));
    vertices.push(Vertex::new(a2.x, a2.y, color));

    vertices.push(Vertex::new(a2.x, a2.y, color));
    vertices.push(Vertex::new(b1.x, b1.y, color));
    vertices.push(Vertex::new(b2.x, b2.y, color));
}

/// Seven-segment masks for 0-9, bit 0 = top segment, then clockwise,
/// bit 6 = middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Generate vertices for one seven-segment digit with its top-left corner at
/// `origin` (y grows downward)
pub fn digit(value: u8, origin: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mask = DIGIT_SEGMENTS[(value % 10) as usize];
    let w = height * 0.5;
    let h = height;
    let t = height * 0.12;
    let mid = h * 0.5;

    let segments = [
        (Vec2::new(0.0, 0.0), Vec2::new(w, t)),                        // top
        (Vec2::new(w - t, 0.0), Vec2::new(w, mid)),                    // upper right
        (Vec2::new(w - t, mid), Vec2::new(w, h)),                      // lower right
        (Vec2::new(0.0, h - t), Vec2::new(w, h)),                      // bottom
        (Vec2::new(0.0, mid), Vec2::new(t, h)),                        // lower left
        (Vec2::new(0.0, 0.0), Vec2::new(t, mid)),                      // upper left
        (Vec2::new(0.0, mid - t * 0.5), Vec2::new(w, mid + t * 0.5)), // middle
    ];

    let mut vertices = Vec::new();
    for (bit, (min, max)) in segments.into_iter().enumerate() {
        if mask & (1 << bit) != 0 {
            vertices.extend(rect(origin + min, origin + max, color));
        }
    }
    vertices
}

/// Generate vertices for a decimal number centered on `center`
pub fn number(value: u32, center: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let text = value.to_string();
    let digit_width = height * 0.5;
    let gap = height * 0.2;
    let count = text.len() as f32;
    let total_width = count * digit_width + (count - 1.0) * gap;

    let mut origin = Vec2::new(center.x - total_width * 0.5, center.y - height * 0.5);
    let mut vertices = Vec::new();
    for ch in text.bytes() {
        vertices.extend(digit(ch - b'0', origin, height, color));
        origin.x += digit_width + gap;
    }
    vertices
}
