//! Config Module
//!
//! Injectable editor configuration: hit-test thresholds, stroke style and
//! keyboard shortcuts. Every editor instance owns its own copy, so several
//! independent editors can run side by side.

pub mod editor_config;
pub mod error;

pub use editor_config::{EditorConfig, StyleConfig, Thresholds};
pub use error::ConfigError;
