//! Font registry
//!
//! Holds the glyph tables of every [`FontName`] variant. Tables are loaded
//! lazily on first use and then shared read-only, so one registry can serve
//! any number of concurrent render calls.

use crate::error::{BannerError, Result};
use crate::font::{FontName, FontSource};
use crate::glyph::GlyphTable;
use crate::render::{render, RenderRequest};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the named fonts
pub struct FontRegistry {
    source: Box<dyn FontSource>,
    cache: bool,
    tables: HashMap<FontName, OnceCell<Arc<GlyphTable>>>,
}

impl FontRegistry {
    /// Create a registry over `source`.
    ///
    /// With `cache` off every call reads and parses the resource again.
    pub fn new(source: impl FontSource + 'static, cache: bool) -> Self {
        let tables = FontName::all()
            .iter()
            .map(|&font| (font, OnceCell::new()))
            .collect();

        Self {
            source: Box::new(source),
            cache,
            tables,
        }
    }

    /// Read and parse one font, bypassing the cache
    pub fn load(&self, font: FontName) -> Result<GlyphTable> {
        let resource = self.source.read(font)?;
        let table = GlyphTable::parse(&resource)?;
        tracing::debug!("Loaded font {} ({} glyphs)", font, table.len());
        Ok(table)
    }

    /// Glyph table for `font`.
    ///
    /// Failed loads are not remembered, so a repaired resource is picked up
    /// by the next call.
    pub fn table(&self, font: FontName) -> Result<Arc<GlyphTable>> {
        let cell = match self.tables.get(&font) {
            Some(cell) if self.cache => cell,
            _ => return self.load(font).map(Arc::new),
        };

        cell.get_or_try_init(|| {
            let table = self.load(font)?;
            tracing::debug!("Cached font {}", font);
            Ok::<_, BannerError>(Arc::new(table))
        })
        .cloned()
    }

    /// Load every font up front, stopping at the first failure
    pub fn preload(&self) -> Result<()> {
        for &font in FontName::all() {
            self.table(font)?;
        }
        Ok(())
    }

    /// Whether `font` is already cached
    pub fn is_loaded(&self, font: FontName) -> bool {
        self.tables
            .get(&font)
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Where `font` is read from
    pub fn locate(&self, font: FontName) -> String {
        self.source.locate(font)
    }

    /// Render `text` with `font`
    pub fn render(&self, text: &str, font: FontName) -> Result<String> {
        let table = self.table(font)?;
        render(text, &table)
    }

    pub fn render_request(&self, request: &RenderRequest) -> Result<String> {
        self.render(&request.text, request.font)
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("cache", &self.cache)
            .field(
                "loaded",
                &FontName::all()
                    .iter()
                    .filter(|&&font| self.is_loaded(font))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
