//! Rendering module
//!
//! Builds triangle-list meshes from frame snapshots. Presenting them (window,
//! GPU surface) is left to the host.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{BallSnapshot, Frame, MeshRenderer, Renderer};
pub use vertex::Vertex;
