//! Shortcut Bindings Module
//!
//! Maps key chords (key + Ctrl/Shift) to editor commands, so keyboard
//! shortcuts stay UI glue rather than core behavior.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{KeyCode, ModifierState};
use crate::gesture::Tool;

/// Commands exposed by the editor to the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Undo,
    Redo,
    Clear,
    SelectTool(Tool),
}

/// A key plus the modifiers that must be held with it.
///
/// On macOS the Command key counts as Ctrl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: KeyCode,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Shortcut {
    /// A bare key with no modifiers.
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Ctrl + `key`.
    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// Ctrl + Shift + `key`.
    pub const fn ctrl_shift(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: true,
        }
    }

    /// The chord produced by pressing `key` with `modifiers` held.
    pub fn from_press(key: KeyCode, modifiers: ModifierState) -> Self {
        Self {
            key,
            ctrl: modifiers.ctrl || modifiers.meta,
            shift: modifiers.shift,
        }
    }
}

/// Shortcut lists per command, as stored in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub undo: Vec<Shortcut>,
    pub redo: Vec<Shortcut>,
    pub clear: Vec<Shortcut>,
    pub pencil: Vec<Shortcut>,
    pub eraser: Vec<Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            undo: vec![Shortcut::ctrl(KeyCode::Z)],
            redo: vec![Shortcut::ctrl(KeyCode::Y), Shortcut::ctrl_shift(KeyCode::Z)],
            clear: vec![Shortcut::key(KeyCode::Delete)],
            pencil: vec![Shortcut::key(KeyCode::P)],
            eraser: vec![Shortcut::key(KeyCode::E)],
        }
    }
}

/// Lookup table from key chord to [`EditorCommand`].
#[derive(Debug, Clone)]
pub struct ShortcutBindings {
    map: HashMap<Shortcut, EditorCommand>,
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self::from_config(&ShortcutConfig::default())
    }
}

impl ShortcutBindings {
    /// Create bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Build the lookup table from a config.
    ///
    /// When a chord appears under several commands, the later one wins
    /// (order: undo, redo, clear, pencil, eraser).
    pub fn from_config(config: &ShortcutConfig) -> Self {
        let mut bindings = Self::empty();
        let groups = [
            (&config.undo, EditorCommand::Undo),
            (&config.redo, EditorCommand::Redo),
            (&config.clear, EditorCommand::Clear),
            (&config.pencil, EditorCommand::SelectTool(Tool::Pencil)),
            (&config.eraser, EditorCommand::SelectTool(Tool::Eraser)),
        ];
        for (shortcuts, command) in groups {
            for &shortcut in shortcuts {
                bindings.bind(shortcut, command);
            }
        }
        bindings
    }

    /// Bind a chord to a command, replacing any previous binding of that chord.
    pub fn bind(&mut self, shortcut: Shortcut, command: EditorCommand) {
        if let Some(old) = self.map.insert(shortcut, command) {
            if old != command {
                tracing::debug!(?shortcut, ?old, ?command, "shortcut rebound");
            }
        }
    }

    /// Remove the binding for a chord.
    pub fn unbind(&mut self, shortcut: Shortcut) {
        self.map.remove(&shortcut);
    }

    /// The command bound to pressing `key` with `modifiers` held, if any.
    pub fn resolve(&self, key: KeyCode, modifiers: ModifierState) -> Option<EditorCommand> {
        self.map.get(&Shortcut::from_press(key, modifiers)).copied()
    }

    /// All chords bound to `command`.
    pub fn shortcuts_for(&self, command: EditorCommand) -> impl Iterator<Item = Shortcut> + '_ {
        self.map
            .iter()
            .filter(move |(_, c)| **c == command)
            .map(|(s, _)| *s)
    }
}
