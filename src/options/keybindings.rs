use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::PanLeft, "KeyA".into()),
            (KeyAction::PanRight, "KeyD".into()),
            (KeyAction::PanUp, "KeyW".into()),
            (KeyAction::PanDown, "KeyS".into()),
            (KeyAction::RollLeft, "KeyQ".into()),
            (KeyAction::RollRight, "KeyE".into()),
            (KeyAction::NearClip, "KeyN".into()),
            (KeyAction::FarClip, "KeyF".into()),
            (KeyAction::ColorRed, "KeyR".into()),
            (KeyAction::ColorGreen, "KeyG".into()),
            (KeyAction::ColorBlue, "KeyB".into()),
            (KeyAction::InvertStep, "KeyT".into()),
            (KeyAction::CycleLighting, "KeyL".into()),
            (KeyAction::ToggleShading, "KeyP".into()),
            (KeyAction::PolygonSolid, "Digit1".into()),
            (KeyAction::PolygonWireframe, "Digit2".into()),
            (KeyAction::PolygonPoints, "Digit3".into()),
            (KeyAction::ModelPrimary, "Digit9".into()),
            (KeyAction::ModelSecondary, "Digit0".into()),
            (KeyAction::ResetCamera, "Space".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
