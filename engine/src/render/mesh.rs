//! Mesh Surface
//!
//! Turns line primitives into thin quads (two triangles each) in normalized
//! device coordinates, ready for upload to the overlay pipeline of the
//! `bond_editor` binary.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::RenderSurface;
use crate::config::StyleConfig;

// ============================================================================
// VERTEX
// ============================================================================

/// Vertex layout shared with `shaders/bond_overlay.wgsl`.
///
/// - offset 0: position (vec2<f32>) = 8 bytes
/// - offset 8: color (vec4<f32>) = 16 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(Vertex, [u8; 24]);

/// Byte offset of `Vertex::color`, for the vertex buffer layout.
pub const VERTEX_COLOR_OFFSET: u64 = 8;

/// Helper to add a quad to the mesh.
pub fn add_quad(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    corners: [[f32; 2]; 4],
    color: [f32; 4],
) {
    let base = vertices.len() as u32;
    for position in corners {
        vertices.push(Vertex { position, color });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

// ============================================================================
// MESH SURFACE
// ============================================================================

/// A [`RenderSurface`] that accumulates a triangle mesh.
///
/// Input coordinates are surface pixels (origin top-left, Y down); output
/// positions are NDC (-1..+1, Y up). Line width is specified in pixels, so
/// bonds keep their thickness when the window is resized.
#[derive(Debug, Clone)]
pub struct MeshSurface {
    /// Viewport dimensions (width, height) in pixels.
    viewport_size: [f32; 2],
    /// Half the bond width in pixels.
    half_width: f32,
    line_color: [f32; 4],
    preview_color: [f32; 4],
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshSurface {
    /// Create a surface for a viewport of `width` x `height` pixels.
    pub fn new(width: f32, height: f32, style: &StyleConfig) -> Self {
        Self {
            viewport_size: [width.max(1.0), height.max(1.0)],
            half_width: style.line_half_width,
            line_color: style.line_color,
            preview_color: style.preview_color,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Update the viewport dimensions. Call this on window resize, then redraw.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_size = [width, height];
        }
    }

    /// Current viewport dimensions.
    pub fn viewport_size(&self) -> [f32; 2] {
        self.viewport_size
    }

    /// Generated vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Generated triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of quads currently in the mesh.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Convert surface pixels to NDC.
    pub fn pixel_to_ndc(&self, p: Vec2) -> [f32; 2] {
        let [w, h] = self.viewport_size;
        [(p.x / w) * 2.0 - 1.0, 1.0 - (p.y / h) * 2.0]
    }

    /// Add a single line as a thin quad. Zero-length lines are skipped.
    fn push_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        let dir = b - a;
        let len = dir.length();
        if len < 1e-6 {
            return;
        }

        // Perpendicular direction, scaled by half width
        let offset = Vec2::new(-dir.y, dir.x) / len * self.half_width;

        let corners = [
            self.pixel_to_ndc(a + offset),
            self.pixel_to_ndc(a - offset),
            self.pixel_to_ndc(b - offset),
            self.pixel_to_ndc(b + offset),
        ];
        add_quad(&mut self.vertices, &mut self.indices, corners, color);
    }
}

impl RenderSurface for MeshSurface {
    fn clear_all(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    fn draw_segment(&mut self, start: Vec2, end: Vec2) {
        self.push_line(start, end, self.line_color);
    }

    fn draw_preview(&mut self, start: Vec2, end: Vec2) {
        self.push_line(start, end, self.preview_color);
    }
}
