//! Typed error variants for font table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a bitmap or stroke font table.
///
/// A missing resource is reported here rather than producing an empty table,
/// so callers fail at load time instead of on the first glyph lookup.
#[derive(Debug, Error)]
pub enum FontTableLoadError {
    /// The font resource could not be opened or read.
    #[error("Font table read failed for '{}': {source}", .path.display())]
    Io {
        /// Path of the resource that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The resource was readable but contained no glyph data.
    #[error("Font table '{source_name}' contains no glyph data")]
    Empty {
        /// Path or name of the resource.
        source_name: String,
    },

    /// A data character was not a valid cell value or coordinate digit.
    #[error("Invalid font data at line {line}, column {column}: {found:?}")]
    InvalidCell {
        /// 1-based line number in the resource.
        line: usize,
        /// 1-based column within the line.
        column: usize,
        /// The offending character.
        found: char,
    },

    /// A stroke line holds an odd number of digits and cannot form coordinate pairs.
    #[error("Stroke data at line {line} has {count} digits, expected an even count")]
    OddCoordinateCount {
        /// 1-based line number in the resource.
        line: usize,
        /// Number of digits found on the line.
        count: usize,
    },
}
