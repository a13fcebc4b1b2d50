use serde::{Deserialize, Serialize};

/// How triangles are rasterized.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    /// Filled triangles.
    #[default]
    Solid,
    /// Triangle edges only.
    Wireframe,
    /// Vertices as points.
    Points,
}

/// Whether fragments use the interpolated vertex normal or a flat
/// per-face normal.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Interpolated vertex normals (Gouraud-style smooth shading).
    #[default]
    Smooth,
    /// One normal per face, derived in the fragment shader.
    Flat,
}

impl ShadingMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Smooth => Self::Flat,
            Self::Flat => Self::Smooth,
        }
    }
}

/// Lighting state, cycled by a single key in off → ambient-only → full
/// order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// No lighting: the raw light color is painted directly.
    Off,
    /// Global ambient term only.
    AmbientOnly,
    /// Ambient + diffuse + specular.
    #[default]
    Full,
}

impl LightingMode {
    /// Advance to the next mode in the cycle.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::AmbientOnly,
            Self::AmbientOnly => Self::Full,
            Self::Full => Self::Off,
        }
    }

    /// Numeric form for the shader uniform.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::AmbientOnly => 1,
            Self::Full => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Display state: rasterization, shading, and lighting.
pub struct DisplayOptions {
    /// Triangle rasterization mode.
    pub polygon_mode: PolygonMode,
    /// Smooth vs. flat shading.
    pub shading: ShadingMode,
    /// Lighting mode.
    pub lighting: LightingMode,
    /// Light color, shared by all light components and stepped per
    /// channel at runtime.
    pub light_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            polygon_mode: PolygonMode::default(),
            shading: ShadingMode::default(),
            lighting: LightingMode::default(),
            light_color: [0.5, 0.5, 0.5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_cycle_wraps() {
        let mut mode = LightingMode::Off;
        mode = mode.cycled();
        assert_eq!(mode, LightingMode::AmbientOnly);
        mode = mode.cycled();
        assert_eq!(mode, LightingMode::Full);
        mode = mode.cycled();
        assert_eq!(mode, LightingMode::Off);
    }

    #[test]
    fn shading_toggle_is_an_involution() {
        assert_eq!(ShadingMode::Smooth.toggled().toggled(), ShadingMode::Smooth);
    }
}
