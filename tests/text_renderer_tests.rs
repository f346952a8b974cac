use asciimesh::TextRenderer;
use asciimesh::config::{Config, OutlineMode, RenderMode};
use asciimesh::fonts::{CELLS_PER_GLYPH, FontTableLoadError};
use asciimesh::render::{BLACK, GlyphError, WHITE};

#[test]
fn test_default_config_uses_embedded_fonts() {
    let renderer = TextRenderer::from_config(Config::default()).unwrap();
    assert!(renderer.context().pixel_table().is_some());
    assert!(renderer.context().line_table().is_some());
    assert!(renderer.buffers().is_empty());
}

#[test]
fn test_draw_pixel_text_with_config_style() {
    let config = Config::new()
        .with_scale(1)
        .with_outline(OutlineMode::SolidBackground)
        .with_offset(4.0, 8.0);
    let mut renderer = TextRenderer::from_config(config).unwrap();

    let summary = renderer.draw("Hi").unwrap();
    assert_eq!(summary.glyphs, 2);
    assert_eq!(summary.vertices, 2 * CELLS_PER_GLYPH);
    assert_eq!(renderer.buffers().vertex_count(), 2 * CELLS_PER_GLYPH);
    assert_eq!(renderer.buffers().position(0), Some([4.0, 8.0]));
}

#[test]
fn test_invert_polarity() {
    let config = Config::new()
        .with_scale(1)
        .with_outline(OutlineMode::SolidBackground)
        .with_invert(true);
    let mut renderer = TextRenderer::from_config(config).unwrap();
    renderer.draw(" ").unwrap();
    let buffers = renderer.buffers();
    assert!(
        (0..buffers.vertex_count()).all(|i| buffers.color(i) == Some(WHITE)),
        "Inverted background should be white"
    );

    renderer.clear();
    renderer.draw("I").unwrap();
    let buffers = renderer.buffers();
    assert!((0..buffers.vertex_count()).any(|i| buffers.color(i) == Some(BLACK)));
}

#[test]
fn test_line_mode_draws_into_line_buffers() {
    let config = Config::new()
        .with_mode(RenderMode::Line)
        .with_line_outline(true);
    let mut renderer = TextRenderer::from_config(config).unwrap();
    let summary = renderer.draw("A").unwrap();
    assert_eq!(summary.vertices, 5 * 8);
    assert_eq!(renderer.buffers().vertex_count(), 40);
    assert!(renderer.context().pixel_buffers().is_empty());
}

#[test]
fn test_max_chars_from_config() {
    let config = Config::new().with_max_chars(2);
    let mut renderer = TextRenderer::from_config(config).unwrap();
    let summary = renderer.draw("ABCDE").unwrap();
    assert_eq!(summary.glyphs, 2);
    assert!(summary.truncated);
    assert_eq!(renderer.text_width("ABCDE"), 2.0 * 7.0 * 2.0);
}

#[test]
fn test_draw_at_overrides_offset() {
    let config = Config::new().with_scale(1).with_offset(100.0, 100.0);
    let mut renderer = TextRenderer::from_config(config).unwrap();
    renderer.draw_at("!", 0.0, 0.0).unwrap();
    let [x, y] = renderer.buffers().position(0).unwrap();
    assert!(x < 7.0 && y < 9.0);
}

#[test]
fn test_clear_empties_buffers() {
    let mut renderer = TextRenderer::from_config(Config::default()).unwrap();
    renderer.draw("text").unwrap();
    assert!(!renderer.buffers().is_empty());
    renderer.clear();
    assert!(renderer.buffers().is_empty());
}

#[test]
fn test_custom_font_paths() {
    let dir = tempfile::tempdir().unwrap();
    let pixel_path = dir.path().join("pixel.txt");
    let line_path = dir.path().join("line.txt");

    let mut pixel = String::from("# space\n");
    pixel.push_str(&"1111111\n".repeat(9));
    std::fs::write(&pixel_path, pixel).unwrap();
    std::fs::write(&line_path, "# space\n0060\n").unwrap();

    let config = Config::new()
        .with_scale(1)
        .with_pixel_font_path(&pixel_path)
        .with_line_font_path(&line_path);
    let mut renderer = TextRenderer::from_config(config).unwrap();

    assert_eq!(renderer.draw(" ").unwrap().vertices, CELLS_PER_GLYPH);
    let summary = renderer.draw("!").unwrap();
    assert_eq!(summary.skipped, vec!['!'], "Custom font only has a space glyph");
}

#[test]
fn test_missing_font_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new().with_pixel_font_path(dir.path().join("missing.txt"));
    let err = TextRenderer::from_config(config).err().unwrap();
    assert!(err.to_string().contains("Failed to load pixel font"));
    assert!(matches!(
        err.downcast_ref::<FontTableLoadError>(),
        Some(FontTableLoadError::Io { .. })
    ));
}

#[test]
fn test_invalid_config_rejected() {
    let result = TextRenderer::from_config(Config::new().with_scale(0));
    assert!(result.is_err());
}

#[test]
fn test_config_file_roundtrip_into_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    Config::new()
        .with_mode(RenderMode::Line)
        .with_scale(4)
        .save_to(&path)
        .unwrap();

    let renderer = TextRenderer::from_config(Config::load_from(&path).unwrap()).unwrap();
    assert_eq!(renderer.config().mode, RenderMode::Line);
    assert_eq!(renderer.line_style().scale, 4);
}

#[test]
fn test_glyph_error_display() {
    let err = GlyphError::GlyphIndexOutOfRange {
        ch: '\u{7}',
        code: 7,
    };
    assert!(err.to_string().contains("U+0007"));
    let err = GlyphError::TableNotLoaded(RenderMode::Line);
    assert_eq!(err.to_string(), "Line font table not loaded");
}
