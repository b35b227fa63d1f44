//! Render Module
//!
//! The editor never draws pixels itself. It talks to a [`RenderSurface`]
//! that can clear every primitive and append one line primitive at a time,
//! and rebuilds the whole picture from the visible segment range after
//! every mutating operation.
//!
//! Surfaces provided here:
//! - [`RecordingSurface`]: keeps the primitives in memory (headless hosts, tests)
//! - [`mesh::MeshSurface`]: builds a triangle mesh for the wgpu overlay pipeline
//! - `canvas::CanvasSurface` (wasm32 only): strokes onto a 2D browser canvas

pub mod mesh;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::segments::Segment;

pub use mesh::{MeshSurface, Vertex};

// ============================================================================
// SURFACE TRAIT
// ============================================================================

/// The rendering collaborator the editor draws through.
pub trait RenderSurface {
    /// Remove every primitive from the surface.
    fn clear_all(&mut self);

    /// Append one committed line primitive.
    fn draw_segment(&mut self, start: Vec2, end: Vec2);

    /// Append the live preview of the bond being dragged.
    ///
    /// Surfaces that don't style the preview differently can keep the
    /// default, which draws it like any other segment.
    fn draw_preview(&mut self, start: Vec2, end: Vec2) {
        self.draw_segment(start, end);
    }
}

/// Rebuild `surface` from scratch: clear, then one primitive per segment,
/// then the optional preview on top.
pub fn redraw<'a, S, I>(surface: &mut S, segments: I, preview: Option<Segment>)
where
    S: RenderSurface + ?Sized,
    I: IntoIterator<Item = &'a Segment>,
{
    surface.clear_all();
    for segment in segments {
        surface.draw_segment(segment.start, segment.end);
    }
    if let Some(preview) = preview {
        surface.draw_preview(preview.start, preview.end);
    }
}

// ============================================================================
// RECORDING SURFACE
// ============================================================================

/// In-memory surface that keeps the primitives currently "on screen".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Committed primitives, in draw order.
    pub lines: Vec<Segment>,
    /// The preview primitive, if the last redraw had one.
    pub preview: Option<Segment>,
    /// Number of `clear_all` calls so far.
    pub clears: usize,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_all(&mut self) {
        self.lines.clear();
        self.preview = None;
        self.clears += 1;
    }

    fn draw_segment(&mut self, start: Vec2, end: Vec2) {
        self.lines.push(Segment::new(start, end));
    }

    fn draw_preview(&mut self, start: Vec2, end: Vec2) {
        self.preview = Some(Segment::new(start, end));
    }
}
