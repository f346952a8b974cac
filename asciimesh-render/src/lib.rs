//! Glyph geometry generation for the asciimesh text renderer.
//!
//! This crate turns text into vertex data for an immediate-mode renderer:
//!
//! - Pixel-mode rasterization of 7×9 bitmap glyphs with outline treatments
//! - Line-mode tracing of stroke glyphs with an optional overdraw outline
//! - A text layout walker shared by both pipelines through [`GlyphEmitter`]
//! - [`TextContext`], which owns the font tables and output buffers
//!
//! # Buffers
//!
//! Output goes into [`VertexBuffers`]: two floats of position and three floats
//! of RGB color per vertex, appended in lockstep. Appending requires `&mut`
//! access, so one buffer set is never written from two threads at once; use a
//! separate [`TextContext`] per thread for parallel layouts.

pub mod context;
pub mod emitter;
pub mod error;
pub mod layout;
pub mod line_glyph;
pub mod pixel_glyph;
pub mod style;
pub mod vertex;

// Re-export main public types
pub use context::TextContext;
pub use emitter::{GlyphEmitter, LineEmitter, PixelEmitter};
pub use error::GlyphError;
pub use layout::{LayoutParams, LayoutSummary, layout_text, text_width};
pub use line_glyph::{emit_line_glyph, emit_line_glyph_at};
pub use pixel_glyph::emit_pixel_glyph;
pub use style::{LineStyle, PixelStyle};
pub use vertex::{BLACK, Color, Vertex, VertexBuffers, WHITE};

// Re-export shared types from dependencies for convenience
pub use asciimesh_config::{OutlineMode, RenderMode};
