//! Gesture Controller
//!
//! Turns pointer phases into segment creation and erasure.
//!
//! - Pencil: press snaps the start point and enters `Drawing`, move updates
//!   the live end point, release commits the bond if it is long enough.
//! - Eraser: press removes every visible segment whose line passes close to
//!   the click. Move and release do nothing for the eraser.
//!
//! The active tool is read at press time only, so switching tools in the
//! middle of a pencil drag still lets that drag finish as a draw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use crate::document::Drawing;
use crate::geometry::{distance, snap_point};
use crate::history::ActionTag;
use crate::segments::Segment;

// ============================================================================
// ENUMS
// ============================================================================

/// The tool applied by the next pointer press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Press-drag-release draws a straight bond.
    #[default]
    Pencil,
    /// Press erases bonds under the cursor.
    Eraser,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Pencil => write!(f, "Pencil"),
            Tool::Eraser => write!(f, "Eraser"),
        }
    }
}

/// In-progress gesture state. Never recorded in history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    /// No pointer gesture is active.
    #[default]
    Idle,
    /// A pencil drag is in progress.
    Drawing {
        /// Snapped start point.
        start: Vec2,
        /// Raw pointer position of the latest move.
        end: Vec2,
    },
}

impl GestureState {
    /// The in-progress bond, if a pencil drag is active.
    pub fn preview(&self) -> Option<Segment> {
        match *self {
            GestureState::Idle => None,
            GestureState::Drawing { start, end } => Some(Segment::new(start, end)),
        }
    }
}

/// What the editor has to do after a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to render or record.
    Nothing,
    /// Redraw the visible segments.
    Redraw,
    /// Redraw the visible segments plus the in-progress bond.
    Preview(Segment),
    /// An action changed the drawing: record it, then redraw.
    Committed(ActionTag),
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Pointer-driven state machine over a [`Drawing`].
#[derive(Debug, Clone)]
pub struct GestureController {
    /// Tool used by the next press.
    tool: Tool,
    /// Current gesture.
    state: GestureState,
    /// Snap, minimum length and eraser distances.
    thresholds: Thresholds,
}

impl GestureController {
    /// Create an idle controller.
    pub fn new(tool: Tool, thresholds: Thresholds) -> Self {
        Self {
            tool,
            state: GestureState::Idle,
            thresholds,
        }
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select the tool for the next press. An active drag is left running.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            self.tool = tool;
            tracing::info!(%tool, "gesture: tool selected");
        }
    }

    /// The current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while a pencil drag is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// Handle a pointer press at surface-local `point`.
    pub fn pointer_down(&mut self, point: Vec2, drawing: &mut Drawing) -> GestureOutcome {
        match self.tool {
            Tool::Pencil => {
                let start = snap_point(
                    point,
                    drawing.visible_segments(),
                    self.thresholds.snap_radius,
                );
                let snapped = start != point;
                self.state = GestureState::Drawing { start, end: start };
                tracing::debug!(x = start.x, y = start.y, snapped, "gesture: draw start");
                GestureOutcome::Nothing
            }
            Tool::Eraser => {
                if !drawing.store().has_visible() {
                    return GestureOutcome::Nothing;
                }
                let removed = drawing.erase_near(point, self.thresholds.eraser_tolerance);
                tracing::debug!(removed, x = point.x, y = point.y, "gesture: erase");
                GestureOutcome::Committed(ActionTag::Erase)
            }
        }
    }

    /// Handle pointer movement. Only a pencil drag reacts.
    pub fn pointer_move(&mut self, point: Vec2) -> GestureOutcome {
        match &mut self.state {
            GestureState::Idle => GestureOutcome::Nothing,
            GestureState::Drawing { start, end } => {
                *end = point;
                GestureOutcome::Preview(Segment::new(*start, *end))
            }
        }
    }

    /// Handle a pointer release (or the pointer leaving the surface).
    ///
    /// A drag whose release point is no further than the minimum length from
    /// its start is treated as a stray click and discarded.
    pub fn pointer_up(&mut self, point: Vec2, drawing: &mut Drawing) -> GestureOutcome {
        let GestureState::Drawing { start, .. } = std::mem::take(&mut self.state) else {
            return GestureOutcome::Nothing;
        };

        let length = distance(start, point);
        if length > self.thresholds.min_segment_length {
            let segment = Segment::new(start, point);
            drawing.commit(segment);
            tracing::debug!(%segment, "gesture: draw commit");
            GestureOutcome::Committed(ActionTag::Draw)
        } else {
            tracing::debug!(length, "gesture: draw discarded");
            GestureOutcome::Redraw
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(Tool::default(), Thresholds::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_pencil_press_enters_drawing() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();

        assert_eq!(gesture.pointer_down(p(5.0, 5.0), &mut drawing), GestureOutcome::Nothing);
        assert_eq!(
            gesture.state(),
            GestureState::Drawing { start: p(5.0, 5.0), end: p(5.0, 5.0) }
        );
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut gesture = GestureController::default();
        assert_eq!(gesture.pointer_move(p(1.0, 1.0)), GestureOutcome::Nothing);
    }

    #[test]
    fn test_move_updates_preview() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        gesture.pointer_down(p(0.0, 0.0), &mut drawing);

        let outcome = gesture.pointer_move(p(30.0, 40.0));
        assert_eq!(outcome, GestureOutcome::Preview(Segment::from_coords(0.0, 0.0, 30.0, 40.0)));
        assert_eq!(gesture.state().preview(), Some(Segment::from_coords(0.0, 0.0, 30.0, 40.0)));
    }

    #[test]
    fn test_release_commits_long_segment() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        gesture.pointer_down(p(0.0, 0.0), &mut drawing);

        let outcome = gesture.pointer_up(p(0.0, 100.0), &mut drawing);
        assert_eq!(outcome, GestureOutcome::Committed(ActionTag::Draw));
        assert_eq!(drawing.store().visible_slice(), &[Segment::from_coords(0.0, 0.0, 0.0, 100.0)]);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_release_at_exact_minimum_is_discarded() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        gesture.pointer_down(p(0.0, 0.0), &mut drawing);

        assert_eq!(gesture.pointer_up(p(20.0, 0.0), &mut drawing), GestureOutcome::Redraw);
        assert!(drawing.store().is_empty());
        assert!(!gesture.is_drawing());
    }

    #[test]
    fn test_release_uses_release_point_not_last_move() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        gesture.pointer_down(p(0.0, 0.0), &mut drawing);
        gesture.pointer_move(p(0.0, 200.0));

        assert_eq!(gesture.pointer_up(p(5.0, 5.0), &mut drawing), GestureOutcome::Redraw);
        assert!(drawing.store().is_empty());
    }

    #[test]
    fn test_release_while_idle_is_ignored() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        assert_eq!(gesture.pointer_up(p(0.0, 0.0), &mut drawing), GestureOutcome::Nothing);
    }

    #[test]
    fn test_pencil_start_snaps_to_endpoint() {
        let mut drawing = Drawing::new();
        drawing.commit(Segment::from_coords(0.0, 0.0, 0.0, 100.0));
        let mut gesture = GestureController::default();

        gesture.pointer_down(p(6.0, 94.0), &mut drawing);
        assert_eq!(
            gesture.state(),
            GestureState::Drawing { start: p(0.0, 100.0), end: p(0.0, 100.0) }
        );
    }

    #[test]
    fn test_eraser_on_empty_canvas_is_noop() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::new(Tool::Eraser, Thresholds::default());
        assert_eq!(gesture.pointer_down(p(0.0, 0.0), &mut drawing), GestureOutcome::Nothing);
    }

    #[test]
    fn test_eraser_records_erase_even_on_miss() {
        let mut drawing = Drawing::new();
        drawing.commit(Segment::from_coords(0.0, 0.0, 0.0, 100.0));
        let mut gesture = GestureController::new(Tool::Eraser, Thresholds::default());

        let outcome = gesture.pointer_down(p(300.0, 50.0), &mut drawing);
        assert_eq!(outcome, GestureOutcome::Committed(ActionTag::Erase));
        assert_eq!(drawing.visible_segments().count(), 1);
    }

    #[test]
    fn test_tool_switch_mid_drag_still_commits() {
        let mut drawing = Drawing::new();
        let mut gesture = GestureController::default();
        gesture.pointer_down(p(0.0, 0.0), &mut drawing);
        gesture.select_tool(Tool::Eraser);

        assert_eq!(
            gesture.pointer_up(p(50.0, 0.0), &mut drawing),
            GestureOutcome::Committed(ActionTag::Draw)
        );
        assert_eq!(gesture.tool(), Tool::Eraser);
    }

    #[test]
    fn test_tool_display() {
        assert_eq!(Tool::Pencil.to_string(), "Pencil");
        assert_eq!(Tool::Eraser.to_string(), "Eraser");
    }
}
