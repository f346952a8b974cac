//! Pixel-mode glyph rasterization.
//!
//! Every drawn cell of the 7×9 glyph grid becomes `scale × scale` vertices,
//! one per sub-pixel, so the consumer can draw the buffers as a point list.

use asciimesh_config::OutlineMode;
use asciimesh_fonts::{BitmapTable, CellValue, GLYPH_COLUMNS, GLYPH_ROWS};

use crate::error::GlyphError;
use crate::style::{PixelStyle, polarity};
use crate::vertex::{Color, VertexBuffers};

/// Append the vertices of one pixel glyph with its top-left corner at
/// `(x_offset, y_offset)`.
///
/// Returns the number of vertices appended. Characters without a complete
/// glyph in `table` fail with [`GlyphError::GlyphIndexOutOfRange`] and leave
/// `buffers` untouched.
pub fn emit_pixel_glyph(
    table: &BitmapTable,
    ch: char,
    x_offset: f32,
    y_offset: f32,
    style: &PixelStyle,
    buffers: &mut VertexBuffers,
) -> Result<usize, GlyphError> {
    let cells = table.glyph(ch).ok_or(GlyphError::GlyphIndexOutOfRange {
        ch,
        code: ch as u32,
    })?;

    let (foreground, background) = polarity(style.invert);
    let scale = style.scale as usize;
    let start = buffers.vertex_count();

    for row in 0..GLYPH_ROWS {
        for col in 0..GLYPH_COLUMNS {
            let value = CellValue::from_raw(cells[col + GLYPH_COLUMNS * row]);
            let Some(color) = cell_color(value, style.outline, foreground, background) else {
                continue;
            };

            let cell_x = x_offset + (scale * col) as f32;
            let cell_y = y_offset + (scale * row) as f32;
            for k in 0..scale {
                for l in 0..scale {
                    buffers.push(cell_x + l as f32, cell_y + k as f32, color);
                }
            }
        }
    }

    Ok(buffers.vertex_count() - start)
}

/// Color of a cell under an outline mode, or `None` when the cell is not drawn.
///
/// Fill cells always take the foreground color. Outline cells take the
/// background color and are only drawn by `Outline` and `SolidBackground`;
/// background cells are only drawn by `SolidBackground`.
fn cell_color(
    value: CellValue,
    mode: OutlineMode,
    foreground: Color,
    background: Color,
) -> Option<Color> {
    match (mode, value) {
        (_, CellValue::Fill) => Some(foreground),
        (OutlineMode::None, _) => None,
        (OutlineMode::Outline, CellValue::Outline) => Some(background),
        (OutlineMode::Outline, CellValue::Background) => None,
        (OutlineMode::SolidBackground, _) => Some(background),
    }
}
