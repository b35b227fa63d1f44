//! Bond Sketch Engine Library
//!
//! The core of a 2D line-drawing editor for chemical-structure sketches:
//! users draw straight bonds with a pencil, remove them with an eraser,
//! clear the canvas, and undo/redo through a tag-only action log.
//!
//! # Modules
//!
//! - [`geometry`] - Distance, point-to-line distance and endpoint snapping
//! - [`segments`] - Segment type and the ordered store with a visible watermark
//! - [`document`] - The drawing: store plus erased and backup buffers
//! - [`history`] - Action tags and the replay-based undo/redo engine
//! - [`gesture`] - Pointer gesture state machine for the pencil and eraser
//! - [`editor`] - Facade wiring everything to a render surface
//! - [`render`] - Render surface trait and its implementations
//! - [`input`] - Platform-agnostic pointer and keyboard input
//! - [`config`] - JSON-backed editor configuration
//!
//! # Example
//!
//! ```ignore
//! use bond_sketch_engine::{Editor, RecordingSurface, Tool};
//! use glam::Vec2;
//!
//! let mut editor: Editor<RecordingSurface> = Editor::default();
//!
//! // Draw a bond
//! editor.pointer_down(Vec2::new(0.0, 0.0));
//! editor.pointer_move(Vec2::new(0.0, 100.0));
//! editor.pointer_up(Vec2::new(0.0, 100.0));
//!
//! // Erase it again, then bring it back
//! editor.select_tool(Tool::Eraser);
//! editor.pointer_down(Vec2::new(2.0, 50.0));
//! editor.undo();
//! ```

pub mod config;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod input;
pub mod render;
pub mod segments;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export the editor surface at crate level for convenience
pub use config::{ConfigError, EditorConfig, StyleConfig, Thresholds};
pub use document::Drawing;
pub use editor::{Editor, EditorStatus};
pub use geometry::{distance, point_to_line_distance, snap_point};
pub use gesture::{GestureController, GestureOutcome, GestureState, Tool};
pub use history::{ActionTag, History};
pub use input::{EditorCommand, InputState, KeyCode, MouseButton, PointerEvent, PointerPhase};
pub use render::{MeshSurface, RecordingSurface, RenderSurface, Vertex};
pub use segments::{Segment, SegmentStore};
