// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against exact constants and mixes f32/usize freely
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

//! Interactive triangle-mesh viewer built on wgpu.
//!
//! Meshview loads a triangle mesh from a simple `v`/`f` text format,
//! synthesizes smooth per-vertex normals for Gouraud-style shading, and
//! renders the model through two parallel camera paths (hand-built
//! matrices vs. a library reference) for side-by-side validation.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - standalone window + event loop
//! - [`engine::ViewerEngine`] - the rendering engine behind the window
//! - [`camera::Camera`] - look-at camera state and matrix synthesis
//! - [`mesh`] - topology, loading, and vertex-normal synthesis
//! - [`options::Options`] - runtime configuration (speeds, display,
//!   keybindings)
//!
//! # Architecture
//!
//! Raw window events are translated into platform-agnostic
//! [`input::InputEvent`]s, which an [`input::InputProcessor`] converts
//! into [`engine::ViewerCommand`]s. The engine executes commands against
//! the camera and display state, then uploads fresh uniforms and draws
//! both viewport halves each frame.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod renderer;
pub mod viewer;

pub use engine::{ViewerCommand, ViewerEngine};
pub use error::ViewerError;
pub use input::{InputEvent, MouseButton};
pub use viewer::Viewer;
