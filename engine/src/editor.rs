//! Bond Editor
//!
//! Wires the gesture controller, history and drawing to a render surface
//! and exposes the command interface (`select_tool`, `clear`, `undo`,
//! `redo`) to whatever UI hosts it.
//!
//! Every handler runs synchronously to completion. Each mutating operation
//! rebuilds the surface from the visible segments and bumps
//! [`Editor::revision`], which frame-driven hosts use as a dirty flag.

use glam::Vec2;

use crate::config::EditorConfig;
use crate::document::Drawing;
use crate::gesture::{GestureController, GestureOutcome, Tool};
use crate::history::{ActionTag, History};
use crate::input::{EditorCommand, PointerEvent, PointerPhase};
use crate::render::{self, RenderSurface};
use crate::segments::Segment;

// ============================================================================
// STATUS
// ============================================================================

/// Snapshot of the editor state shown in window titles and toolbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorStatus {
    pub tool: Tool,
    pub visible_segments: usize,
    pub undo_count: usize,
    pub redo_count: usize,
}

impl std::fmt::Display for EditorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} bonds | undo {} / redo {}",
            self.tool, self.visible_segments, self.undo_count, self.redo_count
        )
    }
}

// ============================================================================
// EDITOR
// ============================================================================

/// One independent editor instance drawing onto `S`.
pub struct Editor<S: RenderSurface> {
    config: EditorConfig,
    drawing: Drawing,
    history: History,
    gesture: GestureController,
    surface: S,
    /// Incremented on every redraw.
    revision: u64,
}

impl<S: RenderSurface> Editor<S> {
    /// Create an editor with an empty drawing.
    pub fn new(config: EditorConfig, surface: S) -> Self {
        let gesture = GestureController::new(config.initial_tool, config.thresholds);
        Self {
            config,
            drawing: Drawing::new(),
            history: History::new(),
            gesture,
            surface,
            revision: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface (e.g. to resize it). Call
    /// [`Editor::redraw`] afterwards if the change affects geometry.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of redraws performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Visible segments in store order.
    pub fn visible_segments(&self) -> std::slice::Iter<'_, Segment> {
        self.drawing.visible_segments()
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.gesture.tool()
    }

    /// Current state summary.
    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            tool: self.gesture.tool(),
            visible_segments: self.drawing.store().visible_len(),
            undo_count: self.history.undo_count(),
            redo_count: self.history.redo_count(),
        }
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Select the tool used by the next pointer press.
    pub fn select_tool(&mut self, tool: Tool) {
        self.gesture.select_tool(tool);
    }

    /// Clear the drawing, keeping a backup so the clear can be undone.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.surface.clear_all();
        self.revision += 1;
        self.history.record(ActionTag::Clear);
        tracing::debug!("editor: clear");
    }

    /// Undo the most recent action. Returns the undone tag, if any.
    pub fn undo(&mut self) -> Option<ActionTag> {
        let tag = self.history.undo(&mut self.drawing)?;
        self.redraw();
        Some(tag)
    }

    /// Redo the next action. Returns the redone tag, if any.
    pub fn redo(&mut self) -> Option<ActionTag> {
        let tag = self.history.redo(&mut self.drawing)?;
        self.redraw();
        Some(tag)
    }

    /// Run a command resolved from a keyboard shortcut or toolbar button.
    pub fn execute(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
            EditorCommand::Clear => self.clear(),
            EditorCommand::SelectTool(tool) => self.select_tool(tool),
        }
    }

    // ========================================================================
    // POINTER INPUT
    // ========================================================================

    /// Pointer pressed at surface-local `point`.
    pub fn pointer_down(&mut self, point: Vec2) {
        let outcome = self.gesture.pointer_down(point, &mut self.drawing);
        self.apply(outcome);
    }

    /// Pointer moved to `point`.
    pub fn pointer_move(&mut self, point: Vec2) {
        let outcome = self.gesture.pointer_move(point);
        self.apply(outcome);
    }

    /// Pointer released at `point`.
    pub fn pointer_up(&mut self, point: Vec2) {
        let outcome = self.gesture.pointer_up(point, &mut self.drawing);
        self.apply(outcome);
    }

    /// Pointer left the surface at `point`; ends the gesture like a release.
    pub fn pointer_leave(&mut self, point: Vec2) {
        self.pointer_up(point);
    }

    /// Dispatch a pointer event by phase.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Start => self.pointer_down(event.position),
            PointerPhase::Move => self.pointer_move(event.position),
            PointerPhase::End => self.pointer_up(event.position),
            PointerPhase::Leave => self.pointer_leave(event.position),
        }
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Rebuild the surface from the visible segments, plus the live preview
    /// while a pencil drag is active.
    pub fn redraw(&mut self) {
        render::redraw(
            &mut self.surface,
            self.drawing.visible_segments(),
            self.gesture.state().preview(),
        );
        self.revision += 1;
    }

    fn apply(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Nothing => {}
            GestureOutcome::Redraw | GestureOutcome::Preview(_) => self.redraw(),
            GestureOutcome::Committed(tag) => {
                self.history.record(tag);
                self.redraw();
            }
        }
    }
}

impl<S: RenderSurface + Default> Default for Editor<S> {
    fn default() -> Self {
        Self::new(EditorConfig::default(), S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn editor() -> Editor<RecordingSurface> {
        Editor::default()
    }

    fn drag(editor: &mut Editor<RecordingSurface>, from: (f32, f32), to: (f32, f32)) {
        editor.pointer_down(Vec2::new(from.0, from.1));
        editor.pointer_move(Vec2::new(to.0, to.1));
        editor.pointer_up(Vec2::new(to.0, to.1));
    }

    #[test]
    fn test_drag_commits_and_renders() {
        let mut e = editor();
        drag(&mut e, (0.0, 0.0), (0.0, 100.0));

        assert_eq!(e.surface().lines, vec![Segment::from_coords(0.0, 0.0, 0.0, 100.0)]);
        assert_eq!(e.surface().preview, None);
        assert_eq!(e.history().entries(), &[ActionTag::Draw]);
    }

    #[test]
    fn test_move_renders_preview() {
        let mut e = editor();
        e.pointer_down(Vec2::new(0.0, 0.0));
        e.pointer_move(Vec2::new(50.0, 0.0));
        assert_eq!(e.surface().preview, Some(Segment::from_coords(0.0, 0.0, 50.0, 0.0)));
        assert!(e.surface().lines.is_empty());
    }

    #[test]
    fn test_clear_clears_surface_and_records() {
        let mut e = editor();
        drag(&mut e, (0.0, 0.0), (0.0, 100.0));
        let clears = e.surface().clears;

        e.clear();
        assert_eq!(e.surface().clears, clears + 1);
        assert!(e.surface().lines.is_empty());
        assert_eq!(e.history().entries(), &[ActionTag::Draw, ActionTag::Clear]);
    }

    #[test]
    fn test_undo_at_start_does_not_redraw() {
        let mut e = editor();
        let revision = e.revision();
        assert_eq!(e.undo(), None);
        assert_eq!(e.redo(), None);
        assert_eq!(e.revision(), revision);
    }

    #[test]
    fn test_execute_commands() {
        let mut e = editor();
        e.execute(EditorCommand::SelectTool(Tool::Eraser));
        assert_eq!(e.tool(), Tool::Eraser);
        e.execute(EditorCommand::SelectTool(Tool::Pencil));

        drag(&mut e, (0.0, 0.0), (0.0, 100.0));
        e.execute(EditorCommand::Undo);
        assert_eq!(e.visible_segments().count(), 0);
        e.execute(EditorCommand::Redo);
        assert_eq!(e.visible_segments().count(), 1);
        e.execute(EditorCommand::Clear);
        assert_eq!(e.visible_segments().count(), 0);
    }

    #[test]
    fn test_status_display() {
        let mut e = editor();
        drag(&mut e, (0.0, 0.0), (0.0, 100.0));
        let status = e.status();
        assert_eq!(status.visible_segments, 1);
        assert_eq!(status.to_string(), "Pencil | 1 bonds | undo 1 / redo 0");
    }

    #[test]
    fn test_handle_pointer_leave_ends_gesture() {
        let mut e = editor();
        e.handle_pointer(PointerEvent::start(0.0, 0.0));
        e.handle_pointer(PointerEvent::moved(60.0, 0.0));
        e.handle_pointer(PointerEvent::leave(60.0, 0.0));

        assert!(!e.gesture().is_drawing());
        assert_eq!(e.visible_segments().count(), 1);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = editor();
        let b = editor();
        drag(&mut a, (0.0, 0.0), (0.0, 100.0));
        assert_eq!(a.visible_segments().count(), 1);
        assert_eq!(b.visible_segments().count(), 0);
    }
}
