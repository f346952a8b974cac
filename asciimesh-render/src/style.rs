//! Per-call glyph style options.

use asciimesh_config::{Config, OutlineMode};

use crate::vertex::{BLACK, Color, WHITE};

/// Style for pixel-mode glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelStyle {
    /// Sub-pixels per glyph cell along each axis
    pub scale: u32,
    pub outline: OutlineMode,
    /// Black glyphs on white when set, white on black otherwise
    pub invert: bool,
}

impl Default for PixelStyle {
    fn default() -> Self {
        Self {
            scale: 1,
            outline: OutlineMode::None,
            invert: false,
        }
    }
}

impl From<&Config> for PixelStyle {
    fn from(config: &Config) -> Self {
        Self {
            scale: config.scale,
            outline: config.outline,
            invert: config.invert,
        }
    }
}

/// Style for line-mode glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    /// Multiplier applied to stroke coordinates
    pub scale: u32,
    /// Draw four 1-unit offset copies of the strokes underneath in the inverse color
    pub outline: bool,
    pub invert: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            scale: 1,
            outline: false,
            invert: false,
        }
    }
}

impl From<&Config> for LineStyle {
    fn from(config: &Config) -> Self {
        Self {
            scale: config.scale,
            outline: config.line_outline,
            invert: config.invert,
        }
    }
}

/// Foreground and background colors for a polarity flag
pub(crate) fn polarity(invert: bool) -> (Color, Color) {
    if invert { (BLACK, WHITE) } else { (WHITE, BLACK) }
}
