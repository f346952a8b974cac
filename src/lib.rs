// Library exports for asciimesh.
//
// The workspace is split the same way the geometry flows:
//
//   - `asciimesh-config`  — `Config`, YAML persistence and shared style enums
//   - `asciimesh-fonts`   — bitmap and stroke tables and their loaders
//   - `asciimesh-render`  — glyph emitters, layout walker, `TextContext`
//
// This crate re-exports all three and adds `TextRenderer`, which wires a
// `Config` to a loaded `TextContext`.

/// Library version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config {
    //! Configuration re-exports from asciimesh-config crate.
    pub use asciimesh_config::{Config, ConfigError, OutlineMode, RenderMode, defaults};
}
pub mod fonts {
    //! Font table re-exports from asciimesh-fonts crate.
    pub use asciimesh_fonts::*;
}
pub mod render {
    //! Geometry re-exports from asciimesh-render crate.
    pub use asciimesh_render::*;
}
pub mod text_renderer;

pub use text_renderer::TextRenderer;
