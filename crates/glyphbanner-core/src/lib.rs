//! # GlyphBanner Core
//!
//! The banner rendering engine for GlyphBanner.
//!
//! This crate provides:
//! - Glyph table parsing for 8-row, 95-glyph banner fonts
//! - Input validation (emptiness, line limits, printable ASCII)
//! - Row-by-row banner composition
//! - A shared, lazily loaded registry of the named fonts
//!
//! ```text
//!  _
//! | |__     __ _   _ __    _ __     ___   _ __
//! | '_ \   / _` | | '_ \  | '_ \   / _ \ | '__|
//! | |_) | | (_| | | | | | | | | | |  __/ | |
//! |_.__/   \__,_| |_| |_| |_| |_|  \___| |_|
//! ```

pub mod error;
pub mod font;
pub mod glyph;
pub mod registry;
pub mod render;

pub use error::{BannerError, ErrorKind, Result};
pub use font::{DirectorySource, FontName, FontSource, MemorySource};
pub use glyph::{Glyph, GlyphTable, GLYPH_COUNT, GLYPH_HEIGHT};
pub use registry::FontRegistry;
pub use render::{normalize, render, RenderRequest, MAX_SEGMENTS};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a font resource and render `text` with it in one step
pub fn render_with_resource(text: &str, resource: &str) -> Result<String> {
    let table = GlyphTable::parse(resource)?;
    render(text, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_resource() {
        let out = render_with_resource("ok", &glyph::testing::font()).unwrap();
        assert_eq!(out.lines().count(), GLYPH_HEIGHT);

        let err = render_with_resource("ok", "\nnot a font").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedFont);
    }
}
