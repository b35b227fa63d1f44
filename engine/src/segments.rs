//! Segment Store
//!
//! Ordered list of committed bond segments plus a visible watermark.
//! Segments past the watermark stay in the sequence so that undo of a draw
//! can be redone by simply moving the watermark forward again. Any new
//! append truncates that retained tail first.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ============================================================================
// SEGMENT
// ============================================================================

/// A straight bond between two endpoints, the only drawable primitive.
///
/// Coordinates are surface-local pixels. A segment is never mutated after
/// it is committed; its identity is its position in the [`SegmentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    /// Create a segment from two endpoints.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Create a segment from raw coordinates.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        crate::geometry::distance(self.start, self.end)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) -> ({:.1}, {:.1})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

// ============================================================================
// SEGMENT STORE
// ============================================================================

/// Ordered segments with a visible watermark.
///
/// Positions `[0..visible_len)` are shown; positions `[visible_len..len)` are
/// retained only so a later redo can reveal them. The watermark is stored as
/// a count, so "nothing visible" is `0` rather than `-1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentStore {
    /// Every retained segment, visible or not.
    segments: Vec<Segment>,
    /// Number of visible segments. Always `<= segments.len()`.
    visible: usize,
}

impl SegmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of retained segments, including the hidden tail.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segments are retained at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of visible segments.
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Position of the last visible segment, or `None` when nothing is shown.
    pub fn visible_index(&self) -> Option<usize> {
        self.visible.checked_sub(1)
    }

    /// Returns `true` if at least one segment is visible.
    pub fn has_visible(&self) -> bool {
        self.visible > 0
    }

    /// Segment at position `index`, visible or not.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// The full retained sequence, including the hidden tail.
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Visible segments as a slice.
    pub fn visible_slice(&self) -> &[Segment] {
        &self.segments[..self.visible]
    }

    /// Visible segments in store order.
    ///
    /// The iterator is lazy and finite, and can be cloned to walk the same
    /// range again. This is exactly the sequence a redraw must render.
    pub fn visible_segments(&self) -> std::slice::Iter<'_, Segment> {
        self.visible_slice().iter()
    }

    /// Commit a freshly drawn segment.
    ///
    /// The hidden tail is discarded before the segment is pushed, so a new
    /// draw after an undo can never be followed by a stale reveal.
    pub fn append(&mut self, segment: Segment) {
        self.segments.truncate(self.visible);
        self.segments.push(segment);
        self.visible += 1;
    }

    /// Put a previously erased segment back on top of the visible range.
    ///
    /// The segment lands at the end, not at the position it was erased from.
    pub fn restore_top(&mut self, segment: Segment) {
        self.segments.truncate(self.visible);
        self.segments.push(segment);
        self.visible += 1;
    }

    /// Splice out the visible segment at `index`, shrinking the visible range.
    ///
    /// Returns `None` (and leaves the store untouched) when `index` is not
    /// a visible position.
    pub fn remove_at(&mut self, index: usize) -> Option<Segment> {
        if index >= self.visible {
            return None;
        }
        let removed = self.segments.remove(index);
        self.visible -= 1;
        Some(removed)
    }

    /// Move the watermark back by one, hiding the top visible segment.
    ///
    /// Returns `false` if nothing was visible.
    pub fn hide_top(&mut self) -> bool {
        if self.visible == 0 {
            return false;
        }
        self.visible -= 1;
        true
    }

    /// Move the watermark forward by one, revealing the next retained segment.
    ///
    /// Returns `false` if there is no hidden segment to reveal.
    pub fn reveal_next(&mut self) -> bool {
        if self.visible >= self.segments.len() {
            return false;
        }
        self.visible += 1;
        true
    }

    /// Empty the store, returning the full sequence (hidden tail included).
    pub fn take_all(&mut self) -> Vec<Segment> {
        self.visible = 0;
        std::mem::take(&mut self.segments)
    }

    /// Replace the whole sequence and make every segment visible.
    pub fn replace_all(&mut self, segments: Vec<Segment>) {
        self.visible = segments.len();
        self.segments = segments;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(n: f32) -> Segment {
        Segment::from_coords(n, 0.0, n, 100.0)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SegmentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.visible_index(), None);
        assert_eq!(store.visible_segments().count(), 0);
    }

    #[test]
    fn test_append_advances_watermark() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        assert_eq!(store.visible_index(), Some(1));
        assert_eq!(store.visible_slice(), &[seg(1.0), seg(2.0)]);
    }

    #[test]
    fn test_append_truncates_hidden_tail() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        assert!(store.hide_top());
        assert_eq!(store.len(), 2);

        store.append(seg(3.0));
        assert_eq!(store.as_slice(), &[seg(1.0), seg(3.0)]);
        assert_eq!(store.visible_len(), 2);
    }

    #[test]
    fn test_remove_at_shrinks_visible_range() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        store.append(seg(3.0));

        assert_eq!(store.remove_at(1), Some(seg(2.0)));
        assert_eq!(store.visible_slice(), &[seg(1.0), seg(3.0)]);
        assert_eq!(store.visible_index(), Some(1));
    }

    #[test]
    fn test_remove_at_hidden_position_is_rejected() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        store.hide_top();

        assert_eq!(store.remove_at(1), None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.visible_len(), 1);
    }

    #[test]
    fn test_restore_top_goes_to_end() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        let erased = store.remove_at(0).unwrap();

        store.restore_top(erased);
        assert_eq!(store.visible_slice(), &[seg(2.0), seg(1.0)]);
    }

    #[test]
    fn test_hide_and_reveal_saturate() {
        let mut store = SegmentStore::new();
        assert!(!store.hide_top());
        assert!(!store.reveal_next());

        store.append(seg(1.0));
        assert!(store.hide_top());
        assert!(!store.hide_top());
        assert!(store.reveal_next());
        assert!(!store.reveal_next());
        assert_eq!(store.visible_len(), 1);
    }

    #[test]
    fn test_take_and_replace_all() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));
        store.hide_top();

        let all = store.take_all();
        assert_eq!(all.len(), 2);
        assert!(store.is_empty());
        assert_eq!(store.visible_index(), None);

        store.replace_all(all);
        assert_eq!(store.visible_len(), 2);
    }

    #[test]
    fn test_visible_segments_is_restartable() {
        let mut store = SegmentStore::new();
        store.append(seg(1.0));
        store.append(seg(2.0));

        let iter = store.visible_segments();
        let first: Vec<_> = iter.clone().copied().collect();
        let second: Vec<_> = iter.copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_segment_length_and_display() {
        let s = Segment::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.to_string(), "(0.0, 0.0) -> (3.0, 4.0)");
    }
}
