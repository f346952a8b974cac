//! Typed error types for asciimesh-render.

use asciimesh_config::RenderMode;
use thiserror::Error;

/// Errors raised while emitting glyph geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The character has no glyph in the pixel table: it is outside
    /// `' '..='~'` or its grid lies past the end of a short table.
    #[error("No glyph for {ch:?} (U+{code:04X}) in the pixel font table")]
    GlyphIndexOutOfRange {
        /// The character that was requested.
        ch: char,
        /// Its Unicode scalar value.
        code: u32,
    },

    /// A draw was requested through a pipeline whose font table was never loaded.
    #[error("{0:?} font table not loaded")]
    TableNotLoaded(RenderMode),
}
