//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (control speeds, display state, model paths,
//! keybindings) are consolidated here. Options serialize to/from TOML so
//! a viewer setup can be stored and reloaded.

mod controls;
mod display;
mod keybindings;

use std::path::Path;

pub use controls::ControlOptions;
pub use display::{DisplayOptions, LightingMode, PolygonMode, ShadingMode};
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Paths of the two models bound to quick-switch keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModelOptions {
    /// Model loaded by the primary switch key.
    pub primary: String,
    /// Model loaded by the secondary switch key.
    pub secondary: String,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            primary: "models/bunny.obj".into(),
            secondary: "models/cactus.obj".into(),
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[controls]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Interactive control speeds.
    pub controls: ControlOptions,
    /// Display state defaults.
    pub display: DisplayOptions,
    /// Quick-switch model paths.
    pub models: ModelOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
translate_speed = 0.2
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.controls.translate_speed, 0.2);
        // Everything else should be default
        assert_eq!(opts.controls.rotate_speed, 0.005);
        assert_eq!(opts.display.light_color, [0.5, 0.5, 0.5]);
        assert_eq!(opts.display.polygon_mode, PolygonMode::Solid);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::PanUp));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }
}
