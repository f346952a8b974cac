//! The text context: font tables plus one output buffer set per pipeline.

use std::path::Path;
use std::sync::Arc;

use asciimesh_config::RenderMode;
use asciimesh_fonts::{BitmapTable, FontTableLoadError, StrokeTable};

use crate::emitter::{LineEmitter, PixelEmitter};
use crate::error::GlyphError;
use crate::layout::{LayoutParams, LayoutSummary, layout_text};
use crate::style::{LineStyle, PixelStyle};
use crate::vertex::VertexBuffers;

/// Owns the font tables and the vertex buffers that draws append to.
///
/// Draw methods take `&mut self`; a context is not meant to be shared between
/// threads while drawing. Tables are held in an `Arc` so several contexts can
/// share one loaded font.
#[derive(Debug, Default)]
pub struct TextContext {
    pixel_table: Option<Arc<BitmapTable>>,
    line_table: Option<Arc<StrokeTable>>,
    pixel_buffers: VertexBuffers,
    line_buffers: VertexBuffers,
}

impl TextContext {
    /// Create a context with no tables loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with both embedded fonts loaded
    pub fn with_embedded_fonts() -> Result<Self, FontTableLoadError> {
        let mut context = Self::new();
        context.set_pixel_table(Arc::new(BitmapTable::embedded()?));
        context.set_line_table(Arc::new(StrokeTable::embedded()?));
        Ok(context)
    }

    /// Load the pixel-mode table from a resource file, replacing any current one
    pub fn load_pixel_table(&mut self, path: impl AsRef<Path>) -> Result<(), FontTableLoadError> {
        let table = asciimesh_fonts::load_pixel_table(path)?;
        self.set_pixel_table(Arc::new(table));
        Ok(())
    }

    /// Load the line-mode table from a resource file, replacing any current one
    pub fn load_line_table(&mut self, path: impl AsRef<Path>) -> Result<(), FontTableLoadError> {
        let table = asciimesh_fonts::load_line_table(path)?;
        self.set_line_table(Arc::new(table));
        Ok(())
    }

    pub fn set_pixel_table(&mut self, table: Arc<BitmapTable>) {
        self.pixel_table = Some(table);
    }

    pub fn set_line_table(&mut self, table: Arc<StrokeTable>) {
        self.line_table = Some(table);
    }

    pub fn pixel_table(&self) -> Option<&Arc<BitmapTable>> {
        self.pixel_table.as_ref()
    }

    pub fn line_table(&self) -> Option<&Arc<StrokeTable>> {
        self.line_table.as_ref()
    }

    /// Lay out `text` with pixel glyphs into the pixel buffers.
    ///
    /// Fails with [`GlyphError::TableNotLoaded`] before appending anything when
    /// no pixel table has been loaded.
    pub fn draw_pixel_text(
        &mut self,
        text: &str,
        params: &LayoutParams,
        style: &PixelStyle,
    ) -> Result<LayoutSummary, GlyphError> {
        let table = self
            .pixel_table
            .as_deref()
            .ok_or(GlyphError::TableNotLoaded(RenderMode::Pixel))?;
        let emitter = PixelEmitter::new(table, *style);
        let summary = layout_text(&emitter, text, params, &mut self.pixel_buffers);
        log::debug!(
            "Pixel text {:?}: {} glyphs, {} vertices",
            text,
            summary.glyphs,
            summary.vertices
        );
        Ok(summary)
    }

    /// Lay out `text` with stroke glyphs into the line buffers.
    pub fn draw_line_text(
        &mut self,
        text: &str,
        params: &LayoutParams,
        style: &LineStyle,
    ) -> Result<LayoutSummary, GlyphError> {
        let table = self
            .line_table
            .as_deref()
            .ok_or(GlyphError::TableNotLoaded(RenderMode::Line))?;
        let emitter = LineEmitter::new(table, *style);
        let summary = layout_text(&emitter, text, params, &mut self.line_buffers);
        log::debug!(
            "Line text {:?}: {} glyphs, {} vertices",
            text,
            summary.glyphs,
            summary.vertices
        );
        Ok(summary)
    }

    pub fn pixel_buffers(&self) -> &VertexBuffers {
        &self.pixel_buffers
    }

    pub fn line_buffers(&self) -> &VertexBuffers {
        &self.line_buffers
    }

    /// Output buffers of the given pipeline
    pub fn buffers(&self, mode: RenderMode) -> &VertexBuffers {
        match mode {
            RenderMode::Pixel => &self.pixel_buffers,
            RenderMode::Line => &self.line_buffers,
        }
    }

    /// Empty both buffer sets, typically at the start of a frame
    pub fn clear_buffers(&mut self) {
        self.pixel_buffers.clear();
        self.line_buffers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_without_tables() {
        let mut context = TextContext::new();
        assert_eq!(
            context.draw_pixel_text("A", &LayoutParams::default(), &PixelStyle::default()),
            Err(GlyphError::TableNotLoaded(RenderMode::Pixel))
        );
        assert_eq!(
            context.draw_line_text("A", &LayoutParams::default(), &LineStyle::default()),
            Err(GlyphError::TableNotLoaded(RenderMode::Line))
        );
        assert!(context.pixel_buffers().is_empty());
        assert!(context.line_buffers().is_empty());
    }

    #[test]
    fn test_pipelines_use_separate_buffers() {
        let mut context = TextContext::with_embedded_fonts().unwrap();
        context
            .draw_pixel_text("A", &LayoutParams::default(), &PixelStyle::default())
            .unwrap();
        assert_eq!(context.pixel_buffers().vertex_count(), 18);
        assert!(context.line_buffers().is_empty());

        context
            .draw_line_text("A", &LayoutParams::default(), &LineStyle::default())
            .unwrap();
        assert_eq!(context.line_buffers().vertex_count(), 8);
        assert_eq!(context.buffers(RenderMode::Pixel).vertex_count(), 18);
    }

    #[test]
    fn test_draws_accumulate_until_cleared() {
        let mut context = TextContext::with_embedded_fonts().unwrap();
        let params = LayoutParams::default();
        let style = PixelStyle::default();
        context.draw_pixel_text("A", &params, &style).unwrap();
        context.draw_pixel_text("A", &params, &style).unwrap();
        assert_eq!(context.pixel_buffers().vertex_count(), 36);

        context.clear_buffers();
        assert!(context.pixel_buffers().is_empty());
        assert!(context.line_buffers().is_empty());
    }

    #[test]
    fn test_contexts_share_tables() {
        let shared = Arc::new(BitmapTable::embedded().unwrap());
        let mut first = TextContext::new();
        let mut second = TextContext::new();
        first.set_pixel_table(Arc::clone(&shared));
        second.set_pixel_table(Arc::clone(&shared));

        first
            .draw_pixel_text("AB", &LayoutParams::default(), &PixelStyle::default())
            .unwrap();
        assert!(second.pixel_buffers().is_empty());
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
