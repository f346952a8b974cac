//! Glyph tables for the asciimesh text geometry generator.
//!
//! This crate provides:
//! - The pixel-mode [`BitmapTable`]: a 7×9 cell grid per printable ASCII character
//! - The line-mode [`StrokeTable`]: ordered stroke endpoints per character
//! - Loaders that read both from their plain-text resource formats
//! - Embedded default resources for both tables
//! - The shared character → glyph index mapping used by both pipelines
//!
//! Tables are immutable once loaded and contain only plain data, so they can be
//! shared freely between threads (e.g. behind an `Arc`).

pub mod bitmap_table;
pub mod error;
pub mod glyph_index;
pub mod loader;
pub mod stroke_table;

// Re-export main types for convenience
pub use bitmap_table::{BitmapTable, CELLS_PER_GLYPH, CellValue, GLYPH_COLUMNS, GLYPH_ROWS};
pub use error::FontTableLoadError;
pub use glyph_index::{FIRST_PRINTABLE, GLYPH_COUNT, LAST_PRINTABLE, glyph_index};
pub use loader::{load_line_table, load_pixel_table};
pub use stroke_table::{StrokePoint, StrokeTable};
