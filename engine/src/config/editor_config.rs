//! Editor Configuration
//!
//! Thresholds, stroke style and shortcuts for one editor instance.
//! Every field has a default, so a config file only needs the values it
//! wants to change:
//!
//! ```json
//! {
//!   "thresholds": { "snap_radius": 12.0 },
//!   "initial_tool": "eraser",
//!   "style": { "line_half_width": 2.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::gesture::Tool;
use crate::input::ShortcutConfig;

/// Environment variable the demo binary reads the config path from.
pub const CONFIG_ENV_VAR: &str = "BOND_EDITOR_CONFIG";

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Distances (in surface pixels) that drive snapping and hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A new bond's start snaps to an existing endpoint strictly closer than this.
    pub snap_radius: f32,
    /// A drag must be strictly longer than this to commit a bond.
    pub min_segment_length: f32,
    /// The eraser removes bonds whose line is strictly closer than this.
    pub eraser_tolerance: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            snap_radius: 10.0,
            min_segment_length: 20.0,
            eraser_tolerance: 5.0,
        }
    }
}

// ============================================================================
// STYLE
// ============================================================================

/// Stroke style used by the mesh and canvas surfaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Half the rendered bond width, in pixels.
    pub line_half_width: f32,
    /// Committed bond color (RGBA, 0..1).
    pub line_color: [f32; 4],
    /// Color of the bond being dragged.
    pub preview_color: [f32; 4],
    /// Surface clear color.
    pub background: [f32; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_half_width: 1.5,
            line_color: [0.0, 0.0, 0.0, 1.0],
            preview_color: [0.25, 0.45, 0.9, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

// ============================================================================
// EDITOR CONFIG
// ============================================================================

/// Complete configuration for one editor instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub thresholds: Thresholds,
    /// Tool selected when the editor starts.
    pub initial_tool: Tool,
    pub style: StyleConfig,
    pub shortcuts: ShortcutConfig,
}

impl EditorConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&data)?;
        tracing::info!(path = %path.display(), "config: loaded");
        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the defaults if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Serialize to pretty JSON (useful as a starting template).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("snap_radius", t.snap_radius),
            ("min_segment_length", t.min_segment_length),
            ("eraser_tolerance", t.eraser_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        let hw = self.style.line_half_width;
        if !hw.is_finite() || hw <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "line_half_width must be positive, got {hw}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor_constants() {
        let config = EditorConfig::default();
        assert_eq!(config.thresholds.snap_radius, 10.0);
        assert_eq!(config.thresholds.min_segment_length, 20.0);
        assert_eq!(config.thresholds.eraser_tolerance, 5.0);
        assert_eq!(config.initial_tool, Tool::Pencil);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json_str(
            r#"{ "thresholds": { "snap_radius": 12.5 }, "initial_tool": "eraser" }"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.snap_radius, 12.5);
        assert_eq!(config.thresholds.min_segment_length, 20.0);
        assert_eq!(config.initial_tool, Tool::Eraser);
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(EditorConfig::from_json_str("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = EditorConfig::from_json_str(r#"{ "thresholds": { "eraser_tolerance": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("eraser_tolerance"));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = EditorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EditorConfig::load(Path::new("/nonexistent/bond_editor.json")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/bond_editor.json"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_template_parses_back() {
        let config = EditorConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(EditorConfig::from_json_str(&json).unwrap(), config);
    }
}
