//! Views that replace a page's glyphs without touching the page.

use super::{Glyph, Graphic, Page, PageView};
use crate::extract::WordCache;

/// A page whose glyph sequence has been replaced.
///
/// Holds a borrowed base page and an owned glyph list. Dimensions, rotation,
/// and graphics come from the base; text extraction sees only the replacement
/// glyphs. Deriving from a `DerivedPage` delegates to the same base page.
#[derive(Debug, Clone)]
pub struct DerivedPage<'a> {
    base: &'a Page,
    glyphs: Vec<Glyph>,
    cache: WordCache,
}

impl<'a> DerivedPage<'a> {
    /// Wrap `base` with a replacement glyph sequence.
    pub fn new(base: &'a Page, glyphs: Vec<Glyph>) -> Self {
        Self {
            base,
            glyphs,
            cache: WordCache::default(),
        }
    }

    /// The wrapped page.
    pub fn base(&self) -> &'a Page {
        self.base
    }

    /// Take the replacement glyphs out of the view.
    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }
}

impl PageView for DerivedPage<'_> {
    fn number(&self) -> u32 {
        self.base.number()
    }

    fn width(&self) -> f64 {
        self.base.width()
    }

    fn height(&self) -> f64 {
        self.base.height()
    }

    fn rotation(&self) -> u16 {
        self.base.rotation()
    }

    fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn graphics(&self) -> &[Graphic] {
        self.base.graphics()
    }

    fn base_page(&self) -> &Page {
        self.base
    }

    fn word_cache(&self) -> &WordCache {
        &self.cache
    }
}
