use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Speed constants for interactive controls.
///
/// Held keys apply their speed once per tick; mouse rotation applies
/// `rotate_speed` per pixel of drag.
pub struct ControlOptions {
    /// Camera translation step per tick (world units).
    pub translate_speed: f32,
    /// Camera rotation step (radians per drag pixel / roll tick).
    pub rotate_speed: f32,
    /// Clip plane step per tick.
    pub clip_speed: f32,
    /// Light color channel step per tick.
    pub color_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            translate_speed: 0.05,
            rotate_speed: 0.005,
            clip_speed: 0.025,
            color_speed: 0.01,
        }
    }
}
