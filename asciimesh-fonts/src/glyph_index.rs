//! Character to glyph index mapping shared by the pixel and line pipelines.

/// First character with a glyph (space).
pub const FIRST_PRINTABLE: char = ' ';

/// Last character with a glyph (tilde).
pub const LAST_PRINTABLE: char = '~';

/// Number of glyphs in a complete table (`' '..='~'`).
pub const GLYPH_COUNT: usize = LAST_PRINTABLE as usize - FIRST_PRINTABLE as usize + 1;

/// Map a character to its space-relative glyph index.
///
/// Returns `None` for anything outside the printable ASCII range, including
/// control characters that would otherwise produce a negative index.
pub fn glyph_index(ch: char) -> Option<usize> {
    if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&ch) {
        Some(ch as usize - FIRST_PRINTABLE as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_range() {
        assert_eq!(glyph_index(' '), Some(0));
        assert_eq!(glyph_index('!'), Some(1));
        assert_eq!(glyph_index('A'), Some(33));
        assert_eq!(glyph_index('~'), Some(GLYPH_COUNT - 1));
        assert_eq!(GLYPH_COUNT, 95);
    }

    #[test]
    fn test_outside_range() {
        assert_eq!(glyph_index('\n'), None);
        assert_eq!(glyph_index('\u{1F}'), None);
        assert_eq!(glyph_index('\u{7F}'), None);
        assert_eq!(glyph_index('é'), None);
    }
}
