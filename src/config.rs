//! Editor configuration: canvas size, handle geometry, and gesture limits.
//!
//! Defaults come from [`crate::consts`]. A host can override them from the
//! environment ([`EditorConfig::from_env`]) or from a JSON document
//! ([`EditorConfig::from_json`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, HANDLE_RADIUS_PX, MIN_FRAME_SIZE_PX, ROTATE_HANDLE_OFFSET_PX,
    ROTATION_SNAP_DEG, SELECTION_DASH_PX,
};
use crate::error::ConfigError;

/// Selection outline and handle stroke color.
pub const SELECTION_COLOR: &str = "#1E90FF";

/// Handle marker fill color.
pub const HANDLE_FILL: &str = "#fff";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Radius of each handle marker and the hit slop around it.
    pub handle_radius: f64,
    /// Distance from the top edge midpoint to the rotate handle.
    pub rotate_handle_offset: f64,
    /// Lower bound on frame width and height during resize.
    pub min_frame_size: f64,
    /// Dash segment length of the selection outline.
    pub selection_dash: f64,
    /// Rotation step in degrees while shift is held.
    pub rotation_snap_deg: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            handle_radius: HANDLE_RADIUS_PX,
            rotate_handle_offset: ROTATE_HANDLE_OFFSET_PX,
            min_frame_size: MIN_FRAME_SIZE_PX,
            selection_dash: SELECTION_DASH_PX,
            rotation_snap_deg: ROTATION_SNAP_DEG,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables, defaulting any that are absent.
    ///
    /// Recognized:
    /// - `IMAGE_EDITOR_CANVAS_WIDTH`, `IMAGE_EDITOR_CANVAS_HEIGHT`
    /// - `IMAGE_EDITOR_HANDLE_RADIUS`
    /// - `IMAGE_EDITOR_ROTATE_HANDLE_OFFSET`
    /// - `IMAGE_EDITOR_MIN_FRAME_SIZE`
    /// - `IMAGE_EDITOR_SELECTION_DASH`
    /// - `IMAGE_EDITOR_ROTATION_SNAP_DEG`
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when a variable is set but is not a
    /// finite, non-negative number, or when the result fails
    /// [`EditorConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).map_err(|_| ()))
    }

    /// Same as [`EditorConfig::from_env`] with a caller-supplied variable lookup.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, ()>,
    {
        let d = Self::default();
        let config = Self {
            canvas_width: env_parse(&lookup, "IMAGE_EDITOR_CANVAS_WIDTH", d.canvas_width)?,
            canvas_height: env_parse(&lookup, "IMAGE_EDITOR_CANVAS_HEIGHT", d.canvas_height)?,
            handle_radius: env_parse(&lookup, "IMAGE_EDITOR_HANDLE_RADIUS", d.handle_radius)?,
            rotate_handle_offset: env_parse(&lookup, "IMAGE_EDITOR_ROTATE_HANDLE_OFFSET", d.rotate_handle_offset)?,
            min_frame_size: env_parse(&lookup, "IMAGE_EDITOR_MIN_FRAME_SIZE", d.min_frame_size)?,
            selection_dash: env_parse(&lookup, "IMAGE_EDITOR_SELECTION_DASH", d.selection_dash)?,
            rotation_snap_deg: env_parse(&lookup, "IMAGE_EDITOR_ROTATION_SNAP_DEG", d.rotation_snap_deg)?,
        }
        .validate()?;
        tracing::debug!(?config, "editor config loaded");
        Ok(config)
    }

    /// Parse a JSON config document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] when the document is malformed, and
    /// [`ConfigError::InvalidValue`] when it fails [`EditorConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Check that every field is usable by the editor.
    ///
    /// All fields must be finite and non-negative; the canvas must also have a
    /// non-zero size.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let fields = [
            ("canvas_width", self.canvas_width, true),
            ("canvas_height", self.canvas_height, true),
            ("handle_radius", self.handle_radius, false),
            ("rotate_handle_offset", self.rotate_handle_offset, false),
            ("min_frame_size", self.min_frame_size, false),
            ("selection_dash", self.selection_dash, false),
            ("rotation_snap_deg", self.rotation_snap_deg, false),
        ];
        for (key, value, positive) in fields {
            let ok = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
            if !ok {
                return Err(ConfigError::InvalidValue { key: key.to_owned(), value: value.to_string() });
            }
        }
        Ok(self)
    }
}

fn env_parse<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Result<String, ()>,
{
    let Ok(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidValue { key: key.to_owned(), value: raw }),
    }
}
