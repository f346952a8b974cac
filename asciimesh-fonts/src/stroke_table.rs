//! Line-mode glyph table.
//!
//! The resource alternates header and data lines. Each data line (odd 0-based
//! index) holds the digits `x0 y0 x1 y1 ...` of one glyph, in ascending
//! character order starting from space. Consecutive point pairs are the
//! endpoints of one line segment.

use crate::error::FontTableLoadError;
use crate::glyph_index::glyph_index;

const EMBEDDED_LINE_FONT: &str = include_str!("../fonts/ascii_line.txt");

/// One stroke endpoint in glyph grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokePoint {
    pub x: u8,
    pub y: u8,
}

impl StrokePoint {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Per-glyph stroke lists for the line pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeTable {
    glyphs: Vec<Vec<StrokePoint>>,
}

impl StrokeTable {
    /// Parse a line font resource held in memory.
    pub fn parse(source: &str) -> Result<Self, FontTableLoadError> {
        Self::parse_named(source, "<memory>")
    }

    /// The stroke font bundled with this crate, covering `' '..='~'`.
    pub fn embedded() -> Result<Self, FontTableLoadError> {
        Self::parse_named(EMBEDDED_LINE_FONT, "<embedded line font>")
    }

    pub(crate) fn parse_named(source: &str, source_name: &str) -> Result<Self, FontTableLoadError> {
        let mut glyphs = Vec::new();

        for (line_idx, line) in source.lines().enumerate() {
            if line_idx % 2 == 0 {
                continue;
            }
            let line = line.trim_end();

            let mut digits = Vec::with_capacity(line.len());
            for (col_idx, ch) in line.chars().enumerate() {
                let digit = ch.to_digit(10).ok_or(FontTableLoadError::InvalidCell {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    found: ch,
                })?;
                digits.push(digit as u8);
            }

            if digits.len() % 2 != 0 {
                return Err(FontTableLoadError::OddCoordinateCount {
                    line: line_idx + 1,
                    count: digits.len(),
                });
            }

            glyphs.push(
                digits
                    .chunks_exact(2)
                    .map(|pair| StrokePoint::new(pair[0], pair[1]))
                    .collect(),
            );
        }

        if glyphs.is_empty() {
            return Err(FontTableLoadError::Empty {
                source_name: source_name.to_string(),
            });
        }

        Ok(Self { glyphs })
    }

    /// Number of glyphs in the table
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Stroke points of the glyph for `ch`.
    ///
    /// Characters without a glyph in this table get an empty list.
    pub fn strokes(&self, ch: char) -> &[StrokePoint] {
        match glyph_index(ch) {
            Some(index) => self.strokes_at(index),
            None => &[],
        }
    }

    /// Stroke points by glyph index; empty when the index is past the table.
    pub fn strokes_at(&self, index: usize) -> &[StrokePoint] {
        self.glyphs
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GLYPHS: &str = "# 32 ' '\n\n# 33 '!'\n31353737\n";

    #[test]
    fn test_parse_pairs_by_sequence() {
        let table = StrokeTable::parse(TWO_GLYPHS).unwrap();
        assert_eq!(table.glyph_count(), 2);
        assert!(table.strokes(' ').is_empty());
        assert_eq!(
            table.strokes('!'),
            &[
                StrokePoint::new(3, 1),
                StrokePoint::new(3, 5),
                StrokePoint::new(3, 7),
                StrokePoint::new(3, 7),
            ]
        );
    }

    #[test]
    fn test_missing_glyph_is_empty() {
        let table = StrokeTable::parse(TWO_GLYPHS).unwrap();
        assert!(table.strokes('A').is_empty());
        assert!(table.strokes('\n').is_empty());
        assert!(table.strokes_at(500).is_empty());
    }

    #[test]
    fn test_odd_digit_count() {
        let err = StrokeTable::parse("# 32\n123\n").unwrap_err();
        assert!(matches!(
            err,
            FontTableLoadError::OddCoordinateCount { line: 2, count: 3 }
        ));
    }

    #[test]
    fn test_non_digit() {
        let err = StrokeTable::parse("# 32\n12a4\n").unwrap_err();
        assert!(matches!(
            err,
            FontTableLoadError::InvalidCell {
                line: 2,
                column: 3,
                found: 'a'
            }
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(
            StrokeTable::parse("# 32 ' '"),
            Err(FontTableLoadError::Empty { .. })
        ));
    }

    #[test]
    fn test_embedded_covers_printable_ascii() {
        let table = StrokeTable::embedded().unwrap();
        assert_eq!(table.glyph_count(), crate::GLYPH_COUNT);
        assert!(table.strokes(' ').is_empty());
        assert_eq!(table.strokes('A').len(), 8);
        let inside = |p: &StrokePoint| {
            (p.x as usize) < crate::GLYPH_COLUMNS && (p.y as usize) < crate::GLYPH_ROWS
        };
        assert!(
            table.strokes('~').iter().all(inside),
            "Strokes should stay inside the glyph grid"
        );
    }
}
