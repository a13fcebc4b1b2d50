//! Input dispatch methods for [`ViewerEngine`].

use super::core::ViewerEngine;
use crate::input::InputEvent;

impl ViewerEngine {
    /// Feed a platform-agnostic input event through the processor and
    /// execute whatever command it produces.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Feed a key press/release (winit `KeyCode` debug string) through
    /// the binding table.
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        if let Some(command) =
            self.input.handle_key(key, pressed, &self.options)
        {
            self.execute(command);
        }
    }

    /// Apply one tick's worth of held-key commands. Called once per
    /// frame so held keys repeat at the frame rate.
    pub fn tick(&mut self) {
        for command in self.input.tick() {
            self.execute(command);
        }
    }
}
