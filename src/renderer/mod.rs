//! Mesh rendering: buffers, pipelines, and the dual-path draw.

/// The triangle-mesh renderer and its pipelines.
pub mod mesh_renderer;

pub use mesh_renderer::MeshRenderer;
