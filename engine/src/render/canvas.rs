//! Browser Canvas Surface (wasm32 only)
//!
//! Strokes bonds onto an HTML canvas through `CanvasRenderingContext2d`.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::RenderSurface;
use crate::config::StyleConfig;

/// CSS color string for an RGBA float color.
fn css_color(c: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (c[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        c[3].clamp(0.0, 1.0)
    )
}

/// A [`RenderSurface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    line_width: f64,
    line_color: String,
    preview_color: String,
}

impl CanvasSurface {
    /// Wrap `canvas`, acquiring its 2D context.
    ///
    /// Returns `None` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, style: &StyleConfig) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_line_cap("round");
        Some(Self {
            canvas,
            ctx,
            line_width: f64::from(style.line_half_width * 2.0),
            line_color: css_color(style.line_color),
            preview_color: css_color(style.preview_color),
        })
    }

    fn stroke(&self, start: Vec2, end: Vec2, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(self.line_width);
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(start.x), f64::from(start.y));
        self.ctx.line_to(f64::from(end.x), f64::from(end.y));
        self.ctx.stroke();
    }
}

impl RenderSurface for CanvasSurface {
    fn clear_all(&mut self) {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_segment(&mut self, start: Vec2, end: Vec2) {
        self.stroke(start, end, &self.line_color);
    }

    fn draw_preview(&mut self, start: Vec2, end: Vec2) {
        self.stroke(start, end, &self.preview_color);
    }
}
