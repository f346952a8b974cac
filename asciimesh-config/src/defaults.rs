//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on `Config`
//! fields.

/// Largest accepted scale factor
pub const MAX_SCALE: u32 = 64;

pub fn scale() -> u32 {
    2
}

pub fn spacing() -> u32 {
    7 // One full glyph grid width, so adjacent grids touch without overlap
}

pub fn max_chars() -> usize {
    0 // Unlimited
}

pub fn offset() -> f32 {
    0.0
}

pub fn line_outline() -> bool {
    false
}

pub fn invert() -> bool {
    false // White glyphs on an implied black background
}
