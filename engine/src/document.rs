//! Drawing Document
//!
//! Everything the history engine replays against: the segment store, the
//! LIFO buffer of erased segments and the single-depth backup taken on clear.

use glam::Vec2;

use crate::geometry::point_to_line_distance;
use crate::segments::{Segment, SegmentStore};

/// Segment store plus the auxiliary buffers used by undo/redo.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Committed segments and the visible watermark.
    store: SegmentStore,
    /// Segments removed by erase, most recent last.
    erased: Vec<Segment>,
    /// Full sequence captured by the most recent clear.
    backup: Vec<Segment>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the segment store.
    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Segments currently on the erased stack, oldest first.
    pub fn erased(&self) -> &[Segment] {
        &self.erased
    }

    /// Sequence captured by the last clear.
    pub fn backup(&self) -> &[Segment] {
        &self.backup
    }

    /// Visible segments in store order.
    pub fn visible_segments(&self) -> std::slice::Iter<'_, Segment> {
        self.store.visible_segments()
    }

    /// Commit a drawn segment.
    pub fn commit(&mut self, segment: Segment) {
        self.store.append(segment);
    }

    /// Remove every visible segment whose line passes within `tolerance`
    /// of `point`, pushing each onto the erased stack.
    ///
    /// The scan runs in reverse store order so splicing never shifts a
    /// position that is still to be visited. Returns the number removed.
    pub fn erase_near(&mut self, point: Vec2, tolerance: f32) -> usize {
        let mut removed = 0;
        for index in (0..self.store.visible_len()).rev() {
            let hit = self
                .store
                .get(index)
                .is_some_and(|segment| point_to_line_distance(point, segment) < tolerance);
            if !hit {
                continue;
            }
            if let Some(segment) = self.store.remove_at(index) {
                self.erased.push(segment);
                removed += 1;
            }
        }
        removed
    }

    /// Pop the most recently erased segment back on top of the visible range.
    ///
    /// Returns `false` when the erased stack is empty.
    pub fn restore_last_erased(&mut self) -> bool {
        match self.erased.pop() {
            Some(segment) => {
                self.store.restore_top(segment);
                true
            }
            None => false,
        }
    }

    /// Erase the top visible segment onto the erased stack.
    ///
    /// Returns `false` when nothing is visible.
    pub fn erase_top(&mut self) -> bool {
        let Some(index) = self.store.visible_index() else {
            return false;
        };
        match self.store.remove_at(index) {
            Some(segment) => {
                self.erased.push(segment);
                true
            }
            None => false,
        }
    }

    /// Hide the most recently drawn visible segment.
    pub fn hide_top(&mut self) -> bool {
        self.store.hide_top()
    }

    /// Reveal the next retained segment.
    pub fn reveal_next(&mut self) -> bool {
        self.store.reveal_next()
    }

    /// Snapshot the whole sequence into the backup and empty the store.
    ///
    /// Any previous backup is overwritten; only one level is kept.
    pub fn clear(&mut self) {
        self.backup = self.store.take_all();
    }

    /// Replace the store with the backup and make all of it visible.
    ///
    /// The backup itself is kept so a clear/undo/redo/undo cycle keeps working.
    pub fn restore_backup(&mut self) {
        self.store.replace_all(self.backup.clone());
    }
}
