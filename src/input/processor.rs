//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state: the last cursor
//! position, mouse button state, the set of currently-held repeat keys,
//! and the step-direction toggle shared by the clip and color keys. It
//! is the only thing between raw window events and the engine's
//! [`execute`](crate::ViewerEngine::execute) method.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::camera::CameraAxis;
use crate::engine::command::{ColorChannel, ViewerCommand};
use crate::options::{Options, PolygonMode};

/// Converts raw window events into [`ViewerCommand`]s.
///
/// Mouse gestures map straight to parameterized commands (drag →
/// rotation, scroll → zoom, side buttons → roll). Keyboard input goes
/// through the binding table: discrete actions fire a command on press,
/// while *held* actions are collected into a set and re-emitted once per
/// [`tick`](Self::tick), so several keys can act simultaneously.
pub struct InputProcessor {
    /// Last observed cursor position in physical pixels.
    last_mouse_pos: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the secondary mouse button is currently held.
    right_pressed: bool,
    /// Currently-held repeat keys.
    held: HashSet<KeyAction>,
    /// Step direction for clip/color keys; inverted by
    /// [`KeyAction::InvertStep`].
    increase: bool,
}

impl InputProcessor {
    /// Create a processor with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            right_pressed: false,
            held: HashSet::new(),
            increase: true,
        }
    }

    /// Whether the clip/color keys currently step upward.
    #[must_use]
    pub fn step_increases(&self) -> bool {
        self.increase
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                let delta = current - self.last_mouse_pos;
                self.last_mouse_pos = current;

                if self.mouse_pressed {
                    return Some(ViewerCommand::RotateCamera { delta });
                }
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.mouse_pressed = pressed,
                    MouseButton::Right => self.right_pressed = pressed,
                    MouseButton::Middle => {}
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(ViewerCommand::Zoom { delta })
            }
        }
    }

    /// Process a key press or release against the current bindings.
    ///
    /// Held actions update the repeat set and emit nothing here; their
    /// commands come out of [`tick`](Self::tick). Discrete actions emit
    /// their command on press.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
        options: &Options,
    ) -> Option<ViewerCommand> {
        let action = options.keybindings.lookup(key)?;

        if action.is_held() {
            if pressed {
                let _ = self.held.insert(action);
            } else {
                let _ = self.held.remove(&action);
            }
            return None;
        }

        if !pressed {
            return None;
        }

        match action {
            KeyAction::InvertStep => {
                self.increase = !self.increase;
                None
            }
            KeyAction::CycleLighting => Some(ViewerCommand::CycleLighting),
            KeyAction::ToggleShading => Some(ViewerCommand::ToggleShading),
            KeyAction::PolygonSolid => {
                Some(ViewerCommand::SetPolygonMode(PolygonMode::Solid))
            }
            KeyAction::PolygonWireframe => {
                Some(ViewerCommand::SetPolygonMode(PolygonMode::Wireframe))
            }
            KeyAction::PolygonPoints => {
                Some(ViewerCommand::SetPolygonMode(PolygonMode::Points))
            }
            KeyAction::ModelPrimary => Some(ViewerCommand::LoadModel {
                path: options.models.primary.clone(),
            }),
            KeyAction::ModelSecondary => Some(ViewerCommand::LoadModel {
                path: options.models.secondary.clone(),
            }),
            KeyAction::ResetCamera => Some(ViewerCommand::ResetCamera),
            KeyAction::Quit => Some(ViewerCommand::Quit),
            // Held actions were dispatched above.
            _ => None,
        }
    }

    /// Emit one command per held action (and per held roll button).
    ///
    /// Called once per frame so simultaneous keys — panning diagonally,
    /// rolling while clipping — all take effect together.
    #[must_use]
    pub fn tick(&self) -> Vec<ViewerCommand> {
        let mut commands = Vec::new();

        for &action in &self.held {
            if let Some(cmd) = self.held_command(action) {
                commands.push(cmd);
            }
        }

        // Right-button hold tilts clockwise; while the left button is
        // dragging, rotation wins.
        if self.right_pressed && !self.mouse_pressed {
            commands.push(ViewerCommand::RollCamera {
                counter_clockwise: false,
            });
        }

        commands
    }

    /// The per-tick command for a held action.
    fn held_command(&self, action: KeyAction) -> Option<ViewerCommand> {
        let increase = self.increase;
        match action {
            KeyAction::PanLeft => Some(ViewerCommand::TranslateCamera {
                axis: CameraAxis::Right,
                positive: false,
            }),
            KeyAction::PanRight => Some(ViewerCommand::TranslateCamera {
                axis: CameraAxis::Right,
                positive: true,
            }),
            KeyAction::PanUp => Some(ViewerCommand::TranslateCamera {
                axis: CameraAxis::Up,
                positive: true,
            }),
            KeyAction::PanDown => Some(ViewerCommand::TranslateCamera {
                axis: CameraAxis::Up,
                positive: false,
            }),
            KeyAction::RollLeft => Some(ViewerCommand::RollCamera {
                counter_clockwise: true,
            }),
            KeyAction::RollRight => Some(ViewerCommand::RollCamera {
                counter_clockwise: false,
            }),
            KeyAction::NearClip => {
                Some(ViewerCommand::AdjustNearClip { increase })
            }
            KeyAction::FarClip => {
                Some(ViewerCommand::AdjustFarClip { increase })
            }
            KeyAction::ColorRed => Some(ViewerCommand::StepLightColor {
                channel: ColorChannel::Red,
                increase,
            }),
            KeyAction::ColorGreen => Some(ViewerCommand::StepLightColor {
                channel: ColorChannel::Green,
                increase,
            }),
            KeyAction::ColorBlue => Some(ViewerCommand::StepLightColor {
                channel: ColorChannel::Blue,
                increase,
            }),
            _ => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_rotates_only_while_pressed() {
        let mut input = InputProcessor::new();

        // Move without pressing: no command, but position is tracked.
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd =
            input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 });
        assert_eq!(
            cmd,
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(4.0, -3.0)
            })
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(ViewerCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn held_keys_repeat_per_tick_until_released() {
        let options = Options::default();
        let mut input = InputProcessor::new();

        assert_eq!(input.handle_key("KeyW", true, &options), None);
        assert_eq!(input.handle_key("KeyA", true, &options), None);

        let commands = input.tick();
        assert_eq!(commands.len(), 2);
        assert!(commands.contains(&ViewerCommand::TranslateCamera {
            axis: CameraAxis::Up,
            positive: true,
        }));
        assert!(commands.contains(&ViewerCommand::TranslateCamera {
            axis: CameraAxis::Right,
            positive: false,
        }));

        assert_eq!(input.handle_key("KeyW", false, &options), None);
        assert_eq!(input.tick().len(), 1);
    }

    #[test]
    fn invert_step_flips_clip_direction() {
        let options = Options::default();
        let mut input = InputProcessor::new();

        let _ = input.handle_key("KeyN", true, &options);
        assert_eq!(
            input.tick(),
            vec![ViewerCommand::AdjustNearClip { increase: true }]
        );

        let _ = input.handle_key("KeyT", true, &options);
        assert_eq!(
            input.tick(),
            vec![ViewerCommand::AdjustNearClip { increase: false }]
        );
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let options = Options::default();
        let mut input = InputProcessor::new();

        assert_eq!(
            input.handle_key("Space", true, &options),
            Some(ViewerCommand::ResetCamera)
        );
        assert_eq!(input.handle_key("Space", false, &options), None);
        assert_eq!(input.handle_key("KeyZ", true, &options), None);
    }

    #[test]
    fn model_keys_carry_configured_paths() {
        let options = Options::default();
        let mut input = InputProcessor::new();

        assert_eq!(
            input.handle_key("Digit9", true, &options),
            Some(ViewerCommand::LoadModel {
                path: options.models.primary.clone()
            })
        );
    }
}
