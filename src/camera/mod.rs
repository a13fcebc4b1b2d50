//! Look-at camera: state, transform synthesis, and GPU wiring.
//!
//! The camera is defined by an eye position, a target point, an
//! approximate up direction, and near/far clip distances. Its
//! right/up/forward frame is derived fresh from that state every time
//! it is needed — nothing caches a basis across mutations, so a stale
//! frame can never leak into a transform.

/// Camera state, derived basis, and view/projection matrix synthesis.
pub mod core;
/// GPU uniform buffers and bind groups for both camera paths.
pub mod controller;
/// Mutation operations: reset, translate, rotate, clip adjustment.
pub mod rig;

pub use self::core::{Camera, CameraBasis, CameraUniform};
pub use controller::CameraController;
pub use rig::CameraAxis;
