//! Config-driven text renderer.
//!
//! `TextRenderer` loads the font tables named by a [`Config`] (or the embedded
//! fonts when no path is set) and draws text with the configured pipeline,
//! style and placement.

use std::sync::Arc;

use anyhow::{Context, Result};
use asciimesh_config::{Config, RenderMode};
use asciimesh_fonts::{BitmapTable, StrokeTable};
use asciimesh_render::{
    LayoutParams, LayoutSummary, LineStyle, PixelStyle, TextContext, VertexBuffers, text_width,
};

pub struct TextRenderer {
    config: Config,
    context: TextContext,
}

impl TextRenderer {
    /// Build a renderer from the config file in the platform config directory
    pub fn load() -> Result<Self> {
        let config = Config::load().context("Failed to load asciimesh config")?;
        Self::from_config(config)
    }

    /// Build a renderer and load both font tables for `config`
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate().context("Invalid text renderer config")?;

        let mut context = TextContext::new();

        match &config.pixel_font_path {
            Some(path) => context
                .load_pixel_table(path)
                .with_context(|| format!("Failed to load pixel font {:?}", path))?,
            None => {
                log::info!("No pixel font configured, using embedded font");
                context.set_pixel_table(Arc::new(BitmapTable::embedded()?));
            }
        }

        match &config.line_font_path {
            Some(path) => context
                .load_line_table(path)
                .with_context(|| format!("Failed to load line font {:?}", path))?,
            None => {
                log::info!("No line font configured, using embedded font");
                context.set_line_table(Arc::new(StrokeTable::embedded()?));
            }
        }

        Ok(Self { config, context })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &TextContext {
        &self.context
    }

    pub fn pixel_style(&self) -> PixelStyle {
        PixelStyle::from(&self.config)
    }

    pub fn line_style(&self) -> LineStyle {
        LineStyle::from(&self.config)
    }

    /// Placement for a draw at `(x_offset, y_offset)` with the configured spacing and cutoff
    pub fn layout_params(&self, x_offset: f32, y_offset: f32) -> LayoutParams {
        LayoutParams {
            x_offset,
            y_offset,
            spacing: self.config.spacing,
            max_chars: self.config.max_chars,
        }
    }

    /// Draw `text` at the configured offset
    pub fn draw(&mut self, text: &str) -> Result<LayoutSummary> {
        self.draw_at(text, self.config.x_offset, self.config.y_offset)
    }

    /// Draw `text` with its first glyph at `(x_offset, y_offset)`
    pub fn draw_at(&mut self, text: &str, x_offset: f32, y_offset: f32) -> Result<LayoutSummary> {
        let params = self.layout_params(x_offset, y_offset);
        let summary = match self.config.mode {
            RenderMode::Pixel => {
                let style = self.pixel_style();
                self.context.draw_pixel_text(text, &params, &style)?
            }
            RenderMode::Line => {
                let style = self.line_style();
                self.context.draw_line_text(text, &params, &style)?
            }
        };
        if !summary.skipped.is_empty() {
            log::warn!(
                "{} character(s) without a glyph in {:?}",
                summary.skipped.len(),
                text
            );
        }
        Ok(summary)
    }

    /// Output buffers of the configured pipeline
    pub fn buffers(&self) -> &VertexBuffers {
        self.context.buffers(self.config.mode)
    }

    /// Empty the output buffers before the next frame
    pub fn clear(&mut self) {
        self.context.clear_buffers();
    }

    /// Horizontal space `text` occupies when drawn with this renderer
    pub fn text_width(&self, text: &str) -> f32 {
        text_width(
            text,
            self.config.spacing,
            self.config.scale,
            self.config.max_chars,
        )
    }
}
