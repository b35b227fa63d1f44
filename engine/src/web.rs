//! Browser Bindings (wasm32 only)
//!
//! Exposes an [`Editor`] drawing onto an HTML canvas to JavaScript. The page
//! forwards pointer events in canvas-local coordinates and calls the command
//! methods from its toolbar.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::gesture::Tool;
use crate::render::canvas::CanvasSurface;

/// Install the panic hook once the module is loaded.
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn find_canvas(canvas_id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// JavaScript handle to one editor instance.
#[wasm_bindgen]
pub struct WebEditor {
    editor: Editor<CanvasSurface>,
}

#[wasm_bindgen]
impl WebEditor {
    /// Attach an editor to the canvas with id `canvas_id`.
    ///
    /// `config_json` optionally overrides the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<WebEditor, JsValue> {
        let config = match config_json {
            Some(json) => EditorConfig::from_json_str(&json).map_err(js_error)?,
            None => EditorConfig::default(),
        };
        let canvas = find_canvas(canvas_id)
            .ok_or_else(|| js_error(format!("no canvas with id '{canvas_id}'")))?;
        let surface = CanvasSurface::new(canvas, &config.style)
            .ok_or_else(|| js_error("canvas has no 2d context"))?;

        let mut editor = Editor::new(config, surface);
        editor.redraw();
        Ok(WebEditor { editor })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.editor.pointer_down(glam::Vec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.editor.pointer_move(glam::Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.editor.pointer_up(glam::Vec2::new(x, y));
    }

    pub fn pointer_leave(&mut self, x: f32, y: f32) {
        self.editor.pointer_leave(glam::Vec2::new(x, y));
    }

    /// Select `"pencil"` or `"eraser"`.
    pub fn select_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool = match name {
            "pencil" => Tool::Pencil,
            "eraser" => Tool::Eraser,
            other => return Err(js_error(format!("unknown tool '{other}'"))),
        };
        self.editor.select_tool(tool);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    /// Returns `true` if an action was undone.
    pub fn undo(&mut self) -> bool {
        self.editor.undo().is_some()
    }

    /// Returns `true` if an action was redone.
    pub fn redo(&mut self) -> bool {
        self.editor.redo().is_some()
    }

    /// Status line, e.g. `"Pencil | 3 bonds | undo 3 / redo 0"`.
    pub fn status(&self) -> String {
        self.editor.status().to_string()
    }

    /// Visible segments as a JSON array.
    pub fn segments_json(&self) -> Result<String, JsValue> {
        let segments: Vec<_> = self.editor.visible_segments().copied().collect();
        serde_json::to_string(&segments).map_err(js_error)
    }
}
