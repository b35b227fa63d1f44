//! Keyboard Input Module
//!
//! Key codes and modifier tracking for editor shortcuts.
//! Decoupled from winit to use generic key codes.

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of windowing system.
///
/// Only the keys the editor can bind are listed; everything else arrives
/// as [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letter keys
    A,
    B,
    C,
    D,
    E,
    L,
    P,
    R,
    X,
    Y,
    Z,

    // Control keys
    Escape,
    Backspace,
    Delete,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifier state with only Ctrl held.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Modifier state with Ctrl and Shift held.
    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::default()
        }
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Update from a modifier key press/release.
    ///
    /// Returns `true` if `key` was a modifier key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.shift = pressed,
            KeyCode::ControlLeft | KeyCode::ControlRight => self.ctrl = pressed,
            KeyCode::AltLeft | KeyCode::AltRight => self.alt = pressed,
            KeyCode::SuperLeft | KeyCode::SuperRight => self.meta = pressed,
            _ => return false,
        }
        true
    }

    /// Reset to no modifiers held (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
