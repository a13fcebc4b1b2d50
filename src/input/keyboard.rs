use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "Space"
/// cycle_lighting = "KeyL"
/// ```
///
/// Actions come in two flavors: *held* actions repeat once per tick for
/// as long as the key is down (camera panning, clip planes, color
/// stepping, roll), while the rest fire once per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pan the camera left (held).
    PanLeft,
    /// Pan the camera right (held).
    PanRight,
    /// Pan the camera up (held).
    PanUp,
    /// Pan the camera down (held).
    PanDown,
    /// Roll the camera counter-clockwise (held).
    RollLeft,
    /// Roll the camera clockwise (held).
    RollRight,
    /// Step the near clip plane (held; direction follows the step
    /// toggle).
    NearClip,
    /// Step the far clip plane (held; direction follows the step
    /// toggle).
    FarClip,
    /// Step the red light channel (held; direction follows the step
    /// toggle).
    ColorRed,
    /// Step the green light channel (held).
    ColorGreen,
    /// Step the blue light channel (held).
    ColorBlue,
    /// Invert the step direction used by clip and color keys.
    InvertStep,
    /// Cycle the lighting mode (off → ambient-only → full).
    CycleLighting,
    /// Toggle smooth/flat shading.
    ToggleShading,
    /// Render filled triangles.
    PolygonSolid,
    /// Render wireframe.
    PolygonWireframe,
    /// Render vertices as points.
    PolygonPoints,
    /// Load the primary bundled model.
    ModelPrimary,
    /// Load the secondary bundled model.
    ModelSecondary,
    /// Reset the camera to frame the current model.
    ResetCamera,
    /// Quit the viewer.
    Quit,
}

impl KeyAction {
    /// Whether this action repeats while its key is held.
    #[must_use]
    pub fn is_held(self) -> bool {
        matches!(
            self,
            Self::PanLeft
                | Self::PanRight
                | Self::PanUp
                | Self::PanDown
                | Self::RollLeft
                | Self::RollRight
                | Self::NearClip
                | Self::FarClip
                | Self::ColorRed
                | Self::ColorGreen
                | Self::ColorBlue
        )
    }
}
