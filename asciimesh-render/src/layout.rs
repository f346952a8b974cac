//! Text layout walker.
//!
//! Places characters left to right on a single line. The cursor starts one
//! advance before `x_offset` and moves by `spacing * scale` before each
//! character, so character `i` lands at `x_offset + i * spacing * scale`.

use crate::emitter::GlyphEmitter;
use crate::vertex::VertexBuffers;

/// Placement parameters for one draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub x_offset: f32,
    pub y_offset: f32,
    /// Advance per character, in glyph grid units
    pub spacing: u32,
    /// Stop after this many characters (0 = unlimited)
    pub max_chars: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            spacing: 7,
            max_chars: 0,
        }
    }
}

/// Outcome of laying out one string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Characters whose glyph was emitted
    pub glyphs: usize,
    /// Vertices appended to the buffers
    pub vertices: usize,
    /// Characters that had no glyph and were left blank
    pub skipped: Vec<char>,
    /// Characters were dropped by the `max_chars` cutoff
    pub truncated: bool,
}

/// Walk `text` and emit each character through `emitter` into `buffers`.
///
/// A character the emitter rejects is logged, recorded in
/// [`LayoutSummary::skipped`] and leaves a blank cell; the walk continues.
/// Reaching `max_chars` ends the walk early without an error.
pub fn layout_text<E: GlyphEmitter + ?Sized>(
    emitter: &E,
    text: &str,
    params: &LayoutParams,
    buffers: &mut VertexBuffers,
) -> LayoutSummary {
    let advance = params.spacing as f32 * emitter.scale() as f32;
    let mut cursor = -advance;
    let mut placed = 0usize;
    let mut summary = LayoutSummary::default();

    for ch in text.chars() {
        if params.max_chars != 0 && placed >= params.max_chars {
            summary.truncated = true;
            break;
        }

        cursor += advance;
        match emitter.emit_glyph(ch, params.x_offset + cursor, params.y_offset, buffers) {
            Ok(count) => {
                summary.glyphs += 1;
                summary.vertices += count;
            }
            Err(e) => {
                log::warn!("Skipping character at cursor {}: {}", cursor, e);
                summary.skipped.push(ch);
            }
        }
        placed += 1;
    }

    summary
}

/// Horizontal space the walker reserves for `text`: one advance per placed
/// character, honoring the `max_chars` cutoff.
pub fn text_width(text: &str, spacing: u32, scale: u32, max_chars: usize) -> f32 {
    let mut count = text.chars().count();
    if max_chars != 0 {
        count = count.min(max_chars);
    }
    count as f32 * spacing as f32 * scale as f32
}
