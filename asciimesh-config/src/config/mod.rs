//! The `Config` struct, its defaults, builder helpers and validation.

mod persistence;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{OutlineMode, RenderMode};

/// Text geometry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pixel font resource; the embedded font is used when unset
    #[serde(default)]
    pub pixel_font_path: Option<PathBuf>,

    /// Line font resource; the embedded font is used when unset
    #[serde(default)]
    pub line_font_path: Option<PathBuf>,

    /// Pipeline used to draw text
    #[serde(default)]
    pub mode: RenderMode,

    /// Size of one glyph grid unit in output units
    #[serde(default = "defaults::scale")]
    pub scale: u32,

    /// Horizontal advance per character, in glyph grid units
    #[serde(default = "defaults::spacing")]
    pub spacing: u32,

    /// Characters drawn per call before the rest are dropped (0 = unlimited)
    #[serde(default = "defaults::max_chars")]
    pub max_chars: usize,

    /// Pixel-mode outline treatment
    #[serde(default)]
    pub outline: OutlineMode,

    /// Line-mode outline (four 1-unit offset copies drawn under the strokes)
    #[serde(default = "defaults::line_outline")]
    pub line_outline: bool,

    /// Draw black glyphs on white instead of white on black
    #[serde(default = "defaults::invert")]
    pub invert: bool,

    #[serde(default = "defaults::offset")]
    pub x_offset: f32,

    #[serde(default = "defaults::offset")]
    pub y_offset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixel_font_path: None,
            line_font_path: None,
            mode: RenderMode::default(),
            scale: defaults::scale(),
            spacing: defaults::spacing(),
            max_chars: defaults::max_chars(),
            outline: OutlineMode::default(),
            line_outline: defaults::line_outline(),
            invert: defaults::invert(),
            x_offset: defaults::offset(),
            y_offset: defaults::offset(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_outline(mut self, outline: OutlineMode) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_line_outline(mut self, line_outline: bool) -> Self {
        self.line_outline = line_outline;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_offset(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_pixel_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pixel_font_path = Some(path.into());
        self
    }

    pub fn with_line_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.line_font_path = Some(path.into());
        self
    }

    /// Check field values that serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 || self.scale > defaults::MAX_SCALE {
            return Err(ConfigError::Validation(format!(
                "scale must be between 1 and {}, got {}",
                defaults::MAX_SCALE,
                self.scale
            )));
        }
        if self.spacing == 0 {
            return Err(ConfigError::Validation(
                "spacing must be at least 1".to_string(),
            ));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(ConfigError::Validation(format!(
                "offsets must be finite, got ({}, {})",
                self.x_offset, self.y_offset
            )));
        }
        Ok(())
    }
}
