//! Pointer Input Module
//!
//! Gesture phases and surface-local positions delivered by the host
//! (winit, a browser canvas, or a test). Decoupled from any windowing system.

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Primary button pressed.
    Start,
    /// Pointer moved (button held or not).
    Move,
    /// Primary button released.
    End,
    /// Pointer left the drawing surface. Handled exactly like `End`.
    Leave,
}

/// A pointer event in surface-local coordinates (origin top-left, Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    /// Create an event.
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Vec2::new(x, y),
        }
    }

    /// Gesture start at `(x, y)`.
    pub fn start(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, x, y)
    }

    /// Pointer movement to `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// Gesture end at `(x, y)`.
    pub fn end(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, x, y)
    }

    /// Pointer left the surface at `(x, y)`.
    pub fn leave(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Leave, x, y)
    }
}

/// Tracks the last known pointer position so hosts that report button
/// presses without coordinates (winit) can still build [`PointerEvent`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    /// Last position reported while inside the surface.
    position: Option<Vec2>,
    /// Whether the primary button is held.
    primary_down: bool,
}

impl PointerTracker {
    /// Create a tracker with no known position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known position, or the origin before the first move.
    pub fn position(&self) -> Vec2 {
        self.position.unwrap_or(Vec2::ZERO)
    }

    /// Returns `true` while the primary button is held.
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Record cursor movement and produce the matching event.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> PointerEvent {
        self.position = Some(Vec2::new(x, y));
        PointerEvent::moved(x, y)
    }

    /// Translate a button press/release into a gesture event.
    ///
    /// Only the left button drives gestures; other buttons yield `None`.
    pub fn button(&mut self, button: MouseButton, pressed: bool) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        let pos = self.position();
        self.primary_down = pressed;
        let phase = if pressed {
            PointerPhase::Start
        } else {
            PointerPhase::End
        };
        Some(PointerEvent::new(phase, pos.x, pos.y))
    }

    /// The cursor left the surface.
    pub fn cursor_left(&mut self) -> PointerEvent {
        let pos = self.position();
        self.primary_down = false;
        PointerEvent::leave(pos.x, pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        let ev = PointerEvent::start(3.0, 4.0);
        assert_eq!(ev.phase, PointerPhase::Start);
        assert_eq!(ev.position, Vec2::new(3.0, 4.0));
        assert_eq!(PointerEvent::leave(0.0, 0.0).phase, PointerPhase::Leave);
    }

    #[test]
    fn test_tracker_uses_last_position_for_buttons() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(10.0, 20.0);

        let ev = tracker.button(MouseButton::Left, true).unwrap();
        assert_eq!(ev, PointerEvent::start(10.0, 20.0));
        assert!(tracker.is_primary_down());

        tracker.cursor_moved(30.0, 20.0);
        let ev = tracker.button(MouseButton::Left, false).unwrap();
        assert_eq!(ev, PointerEvent::end(30.0, 20.0));
        assert!(!tracker.is_primary_down());
    }

    #[test]
    fn test_tracker_ignores_other_buttons() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.button(MouseButton::Right, true).is_none());
        assert!(tracker.button(MouseButton::Other(4), true).is_none());
    }

    #[test]
    fn test_cursor_left_releases_primary() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(5.0, 5.0);
        tracker.button(MouseButton::Left, true);

        assert_eq!(tracker.cursor_left(), PointerEvent::leave(5.0, 5.0));
        assert!(!tracker.is_primary_down());
    }
}
