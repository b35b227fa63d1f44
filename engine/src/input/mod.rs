//! Input Module
//!
//! Platform-agnostic pointer and keyboard input for the editor.
//! This module is decoupled from any specific windowing system (like winit)
//! so the editor can be driven by a native window, a browser canvas or a
//! headless test.
//!
//! # Example
//!
//! ```rust,ignore
//! use bond_sketch_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//!
//! // Pointer: track the cursor, then turn button presses into gesture events
//! let moved = input.pointer.cursor_moved(120.0, 40.0);
//! let start = input.pointer.button(MouseButton::Left, true);
//!
//! // Keyboard: modifiers are tracked, chords resolve to commands
//! input.handle_key(KeyCode::ControlLeft, true);
//! let command = input.handle_key(KeyCode::Z, true); // Some(EditorCommand::Undo)
//! ```

pub mod bindings;
pub mod keyboard;
pub mod pointer;

// Re-export commonly used types at module level
pub use bindings::{EditorCommand, Shortcut, ShortcutBindings, ShortcutConfig};
pub use keyboard::{KeyCode, ModifierState};
pub use pointer::{MouseButton, PointerEvent, PointerPhase, PointerTracker};

/// Combined keyboard and pointer state for one editor window.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub modifiers: ModifierState,
    pub pointer: PointerTracker,
    pub bindings: ShortcutBindings,
}

impl InputState {
    /// Create an input state with default shortcut bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input state with bindings built from `config`.
    pub fn with_shortcuts(config: &ShortcutConfig) -> Self {
        Self {
            bindings: ShortcutBindings::from_config(config),
            ..Self::default()
        }
    }

    /// Handle a key press or release.
    ///
    /// Modifier keys only update the modifier state. Other keys resolve to a
    /// command on press; releases never produce a command.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<EditorCommand> {
        if self.modifiers.handle_key(key, pressed) || !pressed {
            return None;
        }
        self.bindings.resolve(key, self.modifiers)
    }

    /// Reset modifier and pointer state (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.modifiers.reset();
        self.pointer = PointerTracker::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Tool;

    #[test]
    fn test_ctrl_z_resolves_to_undo() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(KeyCode::ControlLeft, true), None);
        assert_eq!(input.handle_key(KeyCode::Z, true), Some(EditorCommand::Undo));
        assert_eq!(input.handle_key(KeyCode::Z, false), None);
    }

    #[test]
    fn test_plain_key_after_ctrl_release() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::ControlLeft, true);
        input.handle_key(KeyCode::ControlLeft, false);
        assert_eq!(input.handle_key(KeyCode::Z, true), None);
        assert_eq!(
            input.handle_key(KeyCode::P, true),
            Some(EditorCommand::SelectTool(Tool::Pencil))
        );
    }

    #[test]
    fn test_reset_clears_modifiers() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::ControlLeft, true);
        input.reset();
        assert!(input.modifiers.is_empty());
    }
}
