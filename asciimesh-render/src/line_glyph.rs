//! Line-mode glyph tracing.
//!
//! Stroke points are emitted as-is, so consecutive vertex pairs form the line
//! segments of the glyph.

use asciimesh_fonts::{StrokeTable, glyph_index};

use crate::style::{LineStyle, polarity};
use crate::vertex::VertexBuffers;

/// Offsets of the outline copies: left, right, up, down.
///
/// These are one output unit regardless of scale, so the outline gets thinner
/// relative to the glyph as the scale grows.
const OUTLINE_OFFSETS: [(f32, f32); 4] = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];

/// Append the stroke vertices of the glyph for `ch`.
///
/// Characters outside the table produce no geometry; this is not an error.
/// Returns the number of vertices appended.
pub fn emit_line_glyph(
    table: &StrokeTable,
    ch: char,
    x_offset: f32,
    y_offset: f32,
    style: &LineStyle,
    buffers: &mut VertexBuffers,
) -> usize {
    match glyph_index(ch) {
        Some(index) => emit_line_glyph_at(table, index, x_offset, y_offset, style, buffers),
        None => {
            log::debug!("No stroke glyph for {:?}, nothing emitted", ch);
            0
        }
    }
}

/// Append the stroke vertices of the glyph at a space-relative `index`.
pub fn emit_line_glyph_at(
    table: &StrokeTable,
    index: usize,
    x_offset: f32,
    y_offset: f32,
    style: &LineStyle,
    buffers: &mut VertexBuffers,
) -> usize {
    if index >= table.glyph_count() {
        log::debug!(
            "Stroke glyph index {} outside table of {} glyphs, nothing emitted",
            index,
            table.glyph_count()
        );
        return 0;
    }

    let points = table.strokes_at(index);
    let (foreground, background) = polarity(style.invert);
    let scale = style.scale as f32;
    let start = buffers.vertex_count();

    if style.outline {
        for (dx, dy) in OUTLINE_OFFSETS {
            for point in points {
                buffers.push(
                    scale * point.x as f32 + x_offset + dx,
                    scale * point.y as f32 + y_offset + dy,
                    background,
                );
            }
        }
    }

    for point in points {
        buffers.push(
            scale * point.x as f32 + x_offset,
            scale * point.y as f32 + y_offset,
            foreground,
        );
    }

    buffers.vertex_count() - start
}
