//! The viewer engine: command execution, per-frame updates, rendering.

mod input;

/// The engine's interactive command vocabulary.
pub mod command;
/// Engine construction and frame orchestration.
pub mod core;

pub use self::core::ViewerEngine;
pub use command::{ColorChannel, ViewerCommand};
