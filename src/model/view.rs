//! Read interface shared by pages and derived pages.

use std::sync::Arc;

use super::{BBox, DerivedPage, Glyph, Graphic, Page, TextLine, Word};
use crate::error::Result;
use crate::extract::{
    cluster_words_into_lines, dedupe_glyphs, extract_words, words_to_text, DedupeOptions,
    TextOptions, WordCache, WordOptions,
};

/// A page-like view over a glyph sequence.
///
/// Both [`Page`] and [`DerivedPage`] implement this trait, so every
/// extraction method works the same on an original page and on any view
/// derived from it. Extraction only ever reads [`PageView::glyphs`].
pub trait PageView {
    /// Page number (1-indexed).
    fn number(&self) -> u32;

    /// Page width in points.
    fn width(&self) -> f64;

    /// Page height in points.
    fn height(&self) -> f64;

    /// Page rotation in degrees.
    fn rotation(&self) -> u16;

    /// Glyphs seen by this view.
    fn glyphs(&self) -> &[Glyph];

    /// Non-text content.
    fn graphics(&self) -> &[Graphic];

    /// The page that owns the non-text state.
    fn base_page(&self) -> &Page;

    /// Memo of word results for this view's glyph sequence.
    fn word_cache(&self) -> &WordCache;

    /// Page bounds as a box anchored at the origin.
    fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width(), self.height())
    }

    /// Check if the page is in landscape orientation.
    fn is_landscape(&self) -> bool {
        self.width() > self.height()
    }

    /// Cluster the view's glyphs into words.
    fn extract_words(&self, options: &WordOptions) -> Result<Vec<Word>> {
        extract_words(self.glyphs(), options)
    }

    /// Words for `options`, computed once per view and then shared.
    fn words(&self, options: &WordOptions) -> Result<Arc<Vec<Word>>> {
        self.word_cache()
            .get_or_try_insert(options, || self.extract_words(options))
    }

    /// Cluster the view's words into lines.
    fn extract_lines(&self, options: &WordOptions) -> Result<Vec<TextLine>> {
        let words = self.words(options)?;
        Ok(cluster_words_into_lines(&words, options.y_tolerance))
    }

    /// Reconstruct the view's text.
    fn extract_text(&self, options: &TextOptions) -> Result<String> {
        options.validate()?;
        let words = self.words(&options.words)?;
        Ok(words_to_text(&words, options))
    }

    /// A view with the same page state but a different glyph sequence.
    fn with_glyphs(&self, glyphs: Vec<Glyph>) -> DerivedPage<'_> {
        DerivedPage::new(self.base_page(), glyphs)
    }

    /// A view with duplicate paints removed.
    fn dedupe_glyphs(&self, options: &DedupeOptions) -> Result<DerivedPage<'_>> {
        let glyphs = dedupe_glyphs(self.glyphs(), options)?;
        Ok(self.with_glyphs(glyphs))
    }

    /// A view keeping only the glyphs accepted by `predicate`.
    fn filter_glyphs<F>(&self, predicate: F) -> DerivedPage<'_>
    where
        F: Fn(&Glyph) -> bool,
        Self: Sized,
    {
        let glyphs = self.glyphs().iter().filter(|g| predicate(g)).cloned().collect();
        self.with_glyphs(glyphs)
    }
}

impl PageView for Page {
    fn number(&self) -> u32 {
        self.number
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn rotation(&self) -> u16 {
        self.rotation
    }

    fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    fn base_page(&self) -> &Page {
        self
    }

    fn word_cache(&self) -> &WordCache {
        &self.cache
    }
}
