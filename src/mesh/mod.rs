//! Mesh data: topology, file loading, and normal synthesis.
//!
//! A mesh enters the viewer as raw topology (vertex positions + triangle
//! index triples) and leaves as lighting-ready geometry: per-face
//! normals and areas, a vertex-to-face adjacency table, and smooth
//! area-weighted per-vertex normals.

/// Text-format mesh parsing (`v`/`f` lines).
pub mod loader;
/// Face data, adjacency, and area-weighted vertex normals.
pub mod normals;
/// Raw triangle topology and bounding box.
pub mod topology;

pub use loader::{load_mesh, MeshLoadError};
pub use normals::{MeshNormals, VertexFaceAdjacency};
pub use topology::{Aabb, MeshTopology};
