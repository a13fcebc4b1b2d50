//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, a
//! mouse gesture, or a programmatic call — is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute). The engine
//! never cares *how* a command was triggered.

use glam::Vec2;

use crate::camera::CameraAxis;
use crate::options::PolygonMode;

/// A light color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    /// Red component.
    Red,
    /// Green component.
    Green,
    /// Blue component.
    Blue,
}

/// A discrete or parameterized operation the engine can perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Slide the camera one step along one of its own axes, carrying
    /// the target with it.
    TranslateCamera {
        /// Which camera-local axis to move along.
        axis: CameraAxis,
        /// `true` moves along the axis, `false` against it.
        positive: bool,
    },

    /// Rotate the camera by `delta` pixels of mouse drag (x = yaw,
    /// y = pitch).
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Roll the camera one step around its view axis.
    RollCamera {
        /// `true` tilts counter-clockwise.
        counter_clockwise: bool,
    },

    /// Zoom by moving the camera along its view axis (positive = in).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Step the near clip plane; clamped against the far plane.
    AdjustNearClip {
        /// `true` steps toward the far plane.
        increase: bool,
    },

    /// Step the far clip plane; clamped against the near plane.
    AdjustFarClip {
        /// `true` steps away from the near plane.
        increase: bool,
    },

    /// Reset the camera to frame the current model.
    ResetCamera,

    // ── Display ─────────────────────────────────────────────────────
    /// Step one light color channel, clamped to [0, 1].
    StepLightColor {
        /// Which channel to step.
        channel: ColorChannel,
        /// `true` steps up.
        increase: bool,
    },

    /// Advance the lighting mode (off → ambient-only → full).
    CycleLighting,

    /// Toggle smooth/flat shading.
    ToggleShading,

    /// Select the triangle rasterization mode.
    SetPolygonMode(PolygonMode),

    // ── Session ─────────────────────────────────────────────────────
    /// Replace the current model with the mesh at `path`.
    LoadModel {
        /// Path to a `v`/`f` mesh file.
        path: String,
    },

    /// Request viewer shutdown.
    Quit,
}
