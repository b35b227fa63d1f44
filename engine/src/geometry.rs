//! Geometry Utilities
//!
//! Distance helpers and endpoint snapping used by the gesture controller.
//! All coordinates are surface-local pixels (origin top-left, Y down).

use glam::Vec2;

use crate::segments::Segment;

// ============================================================================
// DISTANCE
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through the
/// segment's endpoints.
///
/// The line is not clamped to the segment extent, so a point far beyond an
/// endpoint but on the line's extension still reports a small distance.
/// A zero-length segment has no direction and reports `f32::INFINITY`, which
/// keeps it out of every hit test.
pub fn point_to_line_distance(point: Vec2, segment: &Segment) -> f32 {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let len = (dx * dx + dy * dy).sqrt();

    if len == 0.0 {
        return f32::INFINITY;
    }

    // Twice the triangle area divided by the base length
    let area = (dx * (segment.start.y - point.y) - (segment.start.x - point.x) * dy).abs();
    area / len
}

// ============================================================================
// SNAPPING
// ============================================================================

/// Snap `candidate` onto an existing endpoint.
///
/// Segments are scanned in store order, checking the start point before the
/// end point. The first endpoint strictly closer than `radius` is returned
/// exactly (bit-for-bit), so new bonds share vertices with existing ones.
/// When nothing is in range the candidate comes back unchanged.
pub fn snap_point<'a, I>(candidate: Vec2, segments: I, radius: f32) -> Vec2
where
    I: IntoIterator<Item = &'a Segment>,
{
    for segment in segments {
        if distance(candidate, segment.start) < radius {
            return segment.start;
        }
        if distance(candidate, segment.end) < radius {
            return segment.end;
        }
    }
    candidate
}

// ============================================================================
// TESTS
// ============================================================================
