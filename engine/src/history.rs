//! Undo/Redo History
//!
//! A linear log of action tags with a cursor. Entries carry no payload:
//! undo and redo re-derive their effect from the current state of the
//! [`Drawing`] (segment store, erased stack, clear backup) at replay time.
//!
//! # Usage
//!
//! ```ignore
//! use bond_sketch_engine::document::Drawing;
//! use bond_sketch_engine::history::{ActionTag, History};
//!
//! let mut drawing = Drawing::new();
//! let mut history = History::new();
//!
//! drawing.commit(segment);
//! history.record(ActionTag::Draw);
//!
//! if let Some(tag) = history.undo(&mut drawing) {
//!     // redraw
//! }
//! ```
//!
//! # Erase asymmetry
//!
//! One eraser click may remove several segments but records a single
//! `Erase`. Undoing it restores only the most recently erased segment and
//! redoing it removes only the top visible one, so a multi-segment erase is
//! not fully reversible through undo/redo.

use serde::{Deserialize, Serialize};

use crate::document::Drawing;

// ============================================================================
// TYPES
// ============================================================================

/// A committed editor action, recorded without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTag {
    /// A segment was appended to the store.
    Draw,
    /// An eraser click removed zero or more segments.
    Erase,
    /// The whole drawing was cleared.
    Clear,
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionTag::Draw => write!(f, "Draw"),
            ActionTag::Erase => write!(f, "Erase"),
            ActionTag::Clear => write!(f, "Clear"),
        }
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// Tag log with a cursor.
///
/// Entries `[0..cursor]` have been applied and can be undone, entries
/// `[cursor..len]` can be redone. Recording a new action discards everything
/// after the cursor. Nothing else ever removes entries.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// The recorded tags, oldest first.
    entries: Vec<ActionTag>,
    /// Number of applied entries.
    cursor: usize,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed action.
    ///
    /// Any redo history (entries after the cursor) is discarded.
    pub fn record(&mut self, tag: ActionTag) {
        self.entries.truncate(self.cursor);
        self.entries.push(tag);
        self.cursor = self.entries.len();
        tracing::debug!(%tag, len = self.entries.len(), "history: record");
    }

    /// Step back one action, reversing its effect on `drawing`.
    ///
    /// Returns the tag that was undone, or `None` at the start of history.
    /// An `Erase` with an empty erased stack still moves the cursor but
    /// leaves the drawing untouched.
    pub fn undo(&mut self, drawing: &mut Drawing) -> Option<ActionTag> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let tag = self.entries[self.cursor];

        match tag {
            ActionTag::Draw => {
                drawing.hide_top();
            }
            ActionTag::Erase => {
                if !drawing.restore_last_erased() {
                    tracing::debug!("history: undo erase with empty erased stack");
                }
            }
            ActionTag::Clear => drawing.restore_backup(),
        }

        tracing::debug!(%tag, cursor = self.cursor, "history: undo");
        Some(tag)
    }

    /// Step forward one action, re-applying its effect on `drawing`.
    ///
    /// Returns the tag that was redone, or `None` at the end of history.
    pub fn redo(&mut self, drawing: &mut Drawing) -> Option<ActionTag> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        let tag = self.entries[self.cursor];
        self.cursor += 1;

        match tag {
            ActionTag::Draw => {
                drawing.reveal_next();
            }
            ActionTag::Erase => {
                drawing.erase_top();
            }
            ActionTag::Clear => drawing.clear(),
        }

        tracing::debug!(%tag, cursor = self.cursor, "history: redo");
        Some(tag)
    }

    /// Returns `true` if there is at least one action that can be undone.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns `true` if there is at least one action that can be redone.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Number of undoable actions.
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Number of redoable actions.
    pub fn redo_count(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// Index of the current entry, or `None` before the first action.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// All recorded tags, oldest first.
    pub fn entries(&self) -> &[ActionTag] {
        &self.entries
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::Segment;
    use glam::Vec2;

    fn vertical(x: f32) -> Segment {
        Segment::from_coords(x, 0.0, x, 100.0)
    }

    fn draw(drawing: &mut Drawing, history: &mut History, x: f32) {
        drawing.commit(vertical(x));
        history.record(ActionTag::Draw);
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        assert_eq!(history.undo(&mut drawing), None);
        assert_eq!(history.redo(&mut drawing), None);

        draw(&mut drawing, &mut history, 0.0);
        assert_eq!(history.redo(&mut drawing), None);
        assert_eq!(drawing.visible_segments().count(), 1);
    }

    #[test]
    fn test_undo_redo_draw_moves_watermark() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        draw(&mut drawing, &mut history, 0.0);
        draw(&mut drawing, &mut history, 10.0);

        assert_eq!(history.undo(&mut drawing), Some(ActionTag::Draw));
        assert_eq!(drawing.store().visible_slice(), &[vertical(0.0)]);
        assert_eq!(drawing.store().len(), 2);

        assert_eq!(history.redo(&mut drawing), Some(ActionTag::Draw));
        assert_eq!(drawing.store().visible_slice(), &[vertical(0.0), vertical(10.0)]);
    }

    #[test]
    fn test_record_truncates_redo_history() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        draw(&mut drawing, &mut history, 0.0);
        draw(&mut drawing, &mut history, 10.0);
        draw(&mut drawing, &mut history, 20.0);

        history.undo(&mut drawing);
        history.undo(&mut drawing);
        assert_eq!(history.redo_count(), 2);

        draw(&mut drawing, &mut history, 99.0);
        assert!(!history.can_redo());
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.redo(&mut drawing), None);
    }

    #[test]
    fn test_undo_erase_restores_at_end() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        draw(&mut drawing, &mut history, 0.0);
        draw(&mut drawing, &mut history, 50.0);

        drawing.erase_near(Vec2::new(3.0, 40.0), 5.0);
        history.record(ActionTag::Erase);
        assert_eq!(drawing.store().visible_slice(), &[vertical(50.0)]);

        assert_eq!(history.undo(&mut drawing), Some(ActionTag::Erase));
        assert_eq!(drawing.store().visible_slice(), &[vertical(50.0), vertical(0.0)]);

        assert_eq!(history.redo(&mut drawing), Some(ActionTag::Erase));
        assert_eq!(drawing.store().visible_slice(), &[vertical(50.0)]);
        assert_eq!(drawing.erased(), &[vertical(0.0)]);
    }

    #[test]
    fn test_undo_erase_with_empty_stack_moves_cursor_only() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        draw(&mut drawing, &mut history, 0.0);

        // A click that hit nothing still records an Erase
        assert_eq!(drawing.erase_near(Vec2::new(500.0, 0.0), 5.0), 0);
        history.record(ActionTag::Erase);

        assert_eq!(history.undo(&mut drawing), Some(ActionTag::Erase));
        assert_eq!(history.undo_count(), 1);
        assert_eq!(drawing.store().visible_slice(), &[vertical(0.0)]);
    }

    #[test]
    fn test_clear_undo_redo_cycle() {
        let mut drawing = Drawing::new();
        let mut history = History::new();
        draw(&mut drawing, &mut history, 0.0);
        draw(&mut drawing, &mut history, 10.0);

        drawing.clear();
        history.record(ActionTag::Clear);
        assert_eq!(drawing.visible_segments().count(), 0);

        assert_eq!(history.undo(&mut drawing), Some(ActionTag::Clear));
        assert_eq!(drawing.store().visible_slice(), &[vertical(0.0), vertical(10.0)]);

        assert_eq!(history.redo(&mut drawing), Some(ActionTag::Clear));
        assert_eq!(drawing.visible_segments().count(), 0);

        assert_eq!(history.undo(&mut drawing), Some(ActionTag::Clear));
        assert_eq!(drawing.visible_segments().count(), 2);
    }

    #[test]
    fn test_action_tag_display_and_serde() {
        assert_eq!(ActionTag::Erase.to_string(), "Erase");
        let json = serde_json::to_string(&ActionTag::Clear).unwrap();
        assert_eq!(json, "\"clear\"");
        let back: ActionTag = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(back, ActionTag::Draw);
    }
}
