//! The glyph emitter seam shared by both pipelines.

use asciimesh_fonts::{BitmapTable, StrokeTable};

use crate::error::GlyphError;
use crate::line_glyph::emit_line_glyph;
use crate::pixel_glyph::emit_pixel_glyph;
use crate::style::{LineStyle, PixelStyle};
use crate::vertex::VertexBuffers;

/// Something that can append the geometry of one glyph to a buffer set.
///
/// The text layout walker drives an emitter one character at a time and
/// advances its cursor by `spacing * scale()` between characters.
pub trait GlyphEmitter {
    /// Size of one glyph grid unit in output units
    fn scale(&self) -> u32;

    /// Append the glyph for `ch` at `(x, y)`, returning the vertex count.
    fn emit_glyph(
        &self,
        ch: char,
        x: f32,
        y: f32,
        buffers: &mut VertexBuffers,
    ) -> Result<usize, GlyphError>;
}

/// Pixel-mode emitter over a bitmap table
#[derive(Debug, Clone, Copy)]
pub struct PixelEmitter<'a> {
    table: &'a BitmapTable,
    style: PixelStyle,
}

impl<'a> PixelEmitter<'a> {
    pub fn new(table: &'a BitmapTable, style: PixelStyle) -> Self {
        Self { table, style }
    }
}

impl GlyphEmitter for PixelEmitter<'_> {
    fn scale(&self) -> u32 {
        self.style.scale
    }

    fn emit_glyph(
        &self,
        ch: char,
        x: f32,
        y: f32,
        buffers: &mut VertexBuffers,
    ) -> Result<usize, GlyphError> {
        emit_pixel_glyph(self.table, ch, x, y, &self.style, buffers)
    }
}

/// Line-mode emitter over a stroke table
#[derive(Debug, Clone, Copy)]
pub struct LineEmitter<'a> {
    table: &'a StrokeTable,
    style: LineStyle,
}

impl<'a> LineEmitter<'a> {
    pub fn new(table: &'a StrokeTable, style: LineStyle) -> Self {
        Self { table, style }
    }
}

impl GlyphEmitter for LineEmitter<'_> {
    fn scale(&self) -> u32 {
        self.style.scale
    }

    // Missing stroke glyphs are a no-op, never an error
    fn emit_glyph(
        &self,
        ch: char,
        x: f32,
        y: f32,
        buffers: &mut VertexBuffers,
    ) -> Result<usize, GlyphError> {
        Ok(emit_line_glyph(self.table, ch, x, y, &self.style, buffers))
    }
}
