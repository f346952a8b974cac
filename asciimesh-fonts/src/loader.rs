//! Loading font tables from resource files.

use std::fs;
use std::path::Path;

use crate::bitmap_table::BitmapTable;
use crate::error::FontTableLoadError;
use crate::stroke_table::StrokeTable;

/// Load a pixel-mode bitmap table from a resource file.
pub fn load_pixel_table(path: impl AsRef<Path>) -> Result<BitmapTable, FontTableLoadError> {
    let path = path.as_ref();
    let source = read_resource(path)?;
    let table = BitmapTable::parse_named(&source, &path.display().to_string())?;
    log::info!(
        "Loaded pixel font {:?}: {} glyphs",
        path,
        table.glyph_count()
    );
    Ok(table)
}

/// Load a line-mode stroke table from a resource file.
pub fn load_line_table(path: impl AsRef<Path>) -> Result<StrokeTable, FontTableLoadError> {
    let path = path.as_ref();
    let source = read_resource(path)?;
    let table = StrokeTable::parse_named(&source, &path.display().to_string())?;
    log::info!(
        "Loaded line font {:?}: {} glyphs",
        path,
        table.glyph_count()
    );
    Ok(table)
}

/// Read the whole resource; the file handle is closed before this returns.
fn read_resource(path: &Path) -> Result<String, FontTableLoadError> {
    fs::read_to_string(path).map_err(|source| {
        log::warn!("Failed to read font table {:?}: {}", path, source);
        FontTableLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}
