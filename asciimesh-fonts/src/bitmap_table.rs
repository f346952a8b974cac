//! Pixel-mode glyph table.
//!
//! Each printable character owns a 7 column × 9 row grid of cells stored in one
//! flat sequence. The cell for `(column, row)` of glyph `g` lives at
//! `column + 7 * row + 63 * g`.

use crate::error::FontTableLoadError;
use crate::glyph_index::glyph_index;

/// Columns per glyph grid
pub const GLYPH_COLUMNS: usize = 7;
/// Rows per glyph grid
pub const GLYPH_ROWS: usize = 9;
/// Cells per glyph grid
pub const CELLS_PER_GLYPH: usize = GLYPH_COLUMNS * GLYPH_ROWS;

/// Every line whose 0-based index is a multiple of this is a header, not data.
pub(crate) const HEADER_INTERVAL: usize = 10;

const EMBEDDED_PIXEL_FONT: &str = include_str!("../fonts/ascii_pixel.txt");

/// Value of one glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// Empty cell (0)
    Background,
    /// Glyph body (1)
    Fill,
    /// Border around the glyph body (2)
    Outline,
}

impl CellValue {
    /// Interpret a raw table value; anything other than 1 or 2 is background.
    pub fn from_raw(value: u8) -> Self {
        match value {
            1 => CellValue::Fill,
            2 => CellValue::Outline,
            _ => CellValue::Background,
        }
    }
}

/// Flat table of glyph cells for the pixel pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapTable {
    cells: Vec<u8>,
}

impl BitmapTable {
    /// Parse a pixel font resource held in memory.
    ///
    /// Header lines (0, 10, 20, ...) are skipped; every other character must be
    /// a digit in `0..=2` and is appended to the table by numeric value.
    pub fn parse(source: &str) -> Result<Self, FontTableLoadError> {
        Self::parse_named(source, "<memory>")
    }

    /// The pixel font bundled with this crate, covering `' '..='~'`.
    pub fn embedded() -> Result<Self, FontTableLoadError> {
        Self::parse_named(EMBEDDED_PIXEL_FONT, "<embedded pixel font>")
    }

    pub(crate) fn parse_named(source: &str, source_name: &str) -> Result<Self, FontTableLoadError> {
        let mut cells = Vec::new();

        for (line_idx, line) in source.lines().enumerate() {
            if line_idx % HEADER_INTERVAL == 0 {
                continue;
            }
            for (col_idx, ch) in line.trim_end().chars().enumerate() {
                let value = ch
                    .to_digit(10)
                    .filter(|v| *v <= 2)
                    .ok_or(FontTableLoadError::InvalidCell {
                        line: line_idx + 1,
                        column: col_idx + 1,
                        found: ch,
                    })?;
                cells.push(value as u8);
            }
        }

        if cells.is_empty() {
            return Err(FontTableLoadError::Empty {
                source_name: source_name.to_string(),
            });
        }

        if cells.len() % CELLS_PER_GLYPH != 0 {
            log::warn!(
                "Pixel font '{}' has {} trailing cells that do not form a full glyph",
                source_name,
                cells.len() % CELLS_PER_GLYPH
            );
        }

        Ok(Self { cells })
    }

    /// Number of complete glyphs in the table
    pub fn glyph_count(&self) -> usize {
        self.cells.len() / CELLS_PER_GLYPH
    }

    /// Total number of cells, including any incomplete trailing glyph
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw cell values of the glyph for `ch`, row-major.
    ///
    /// Returns `None` when `ch` has no glyph index or its grid extends past the
    /// end of the table.
    pub fn glyph(&self, ch: char) -> Option<&[u8]> {
        let start = glyph_index(ch)? * CELLS_PER_GLYPH;
        self.cells.get(start..start + CELLS_PER_GLYPH)
    }

    /// Value of a single cell of the glyph for `ch`.
    pub fn cell(&self, ch: char, column: usize, row: usize) -> Option<CellValue> {
        if column >= GLYPH_COLUMNS || row >= GLYPH_ROWS {
            return None;
        }
        self.glyph(ch)
            .map(|cells| CellValue::from_raw(cells[column + GLYPH_COLUMNS * row]))
    }
}
