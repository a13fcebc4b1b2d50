//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and the depth buffer
//! shared by all mesh pipelines.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth-buffer texture abstraction.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::DepthTexture;
