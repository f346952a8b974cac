use serde::{Deserialize, Serialize};

/// Background treatment for pixel-mode glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineMode {
    /// Only fill cells are drawn
    #[default]
    None,
    /// Fill cells plus a border of outline cells in the inverse color
    Outline,
    /// Every cell of the glyph grid is drawn, giving a solid background
    SolidBackground,
}

/// Which glyph pipeline draws the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Filled pixel-block glyphs from the bitmap table
    #[default]
    Pixel,
    /// Vector line-stroke glyphs from the stroke table
    Line,
}
