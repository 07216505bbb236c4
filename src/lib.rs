//! # glyphweave
//!
//! Duplicate-glyph removal and spatial text reconstruction for PDF pages.
//!
//! Some PDF producers fake bold text by painting each glyph several times at
//! almost the same position. This library collapses those repeated paints
//! and rebuilds words, lines, and page text from positioned glyphs using
//! configurable tolerances.
//!
//! ## Quick Start
//!
//! ```
//! use glyphweave::{DedupeOptions, Glyph, Page, PageView, TextOptions};
//!
//! let mut page = Page::letter(1);
//! for (i, c) in "Hi".chars().enumerate() {
//!     let x = 72.0 + i as f64 * 6.0;
//!     // Every glyph painted twice, slightly offset.
//!     page.push_glyph(Glyph::new(c.to_string(), x, 72.0, x + 6.0, 84.0));
//!     page.push_glyph(Glyph::new(c.to_string(), x + 0.3, 72.0, x + 6.3, 84.0));
//! }
//!
//! let text = TextOptions::default();
//! assert_eq!(page.extract_text(&text)?, "HHii");
//!
//! let deduped = page.dedupe_glyphs(&DedupeOptions::default())?;
//! assert_eq!(deduped.extract_text(&text)?, "Hi");
//! # Ok::<(), glyphweave::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Duplicate detection**: tolerance-based, attribute-aware, idempotent
//! - **Derived pages**: non-mutating views with replaced glyphs, chainable
//! - **Word clustering**: orientation-aware, with extra-attribute splitting
//! - **Text assembly**: plain or layout-preserving output
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod error;
pub mod extract;
pub mod model;
pub mod render;

use rayon::prelude::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    cluster_words_into_lines, dedupe_glyphs, extract_lines, extract_text, extract_words,
    group_duplicates, words_to_text, DedupeOptions, DuplicateGroup, TextOptions, WordExtractor,
    WordOptions,
};
pub use model::{
    AttrValue, BBox, DerivedPage, Document, Glyph, Graphic, Page, PageView, TextBlock, TextLine,
    Word,
};
pub use render::{to_json, JsonFormat};

/// Builder for running the dedupe and extraction pipeline over documents.
///
/// # Example
///
/// ```
/// use glyphweave::{DedupeOptions, Document, Glyphweave, Page};
///
/// let doc: Document = (1..=3).map(Page::letter).collect();
/// let texts = Glyphweave::new()
///     .dedupe(DedupeOptions::new().require_attr("fontname"))
///     .extract_text(&doc)?;
/// assert_eq!(texts.len(), 3);
/// # Ok::<(), glyphweave::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Glyphweave {
    dedupe: Option<DedupeOptions>,
    text_options: TextOptions,
    parallel: bool,
}

impl Glyphweave {
    /// Create a new builder: no dedupe, default tolerances, parallel pages.
    pub fn new() -> Self {
        Self {
            dedupe: None,
            text_options: TextOptions::default(),
            parallel: true,
        }
    }

    /// Remove duplicate glyphs before extraction.
    pub fn dedupe(mut self, options: DedupeOptions) -> Self {
        self.dedupe = Some(options);
        self
    }

    /// Set text assembly options.
    pub fn with_text_options(mut self, options: TextOptions) -> Self {
        self.text_options = options;
        self
    }

    /// Set word clustering options.
    pub fn with_word_options(mut self, options: WordOptions) -> Self {
        self.text_options.words = options;
        self
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check every configured option.
    pub fn validate(&self) -> Result<()> {
        if let Some(dedupe) = &self.dedupe {
            dedupe.validate()?;
        }
        self.text_options.validate()
    }

    /// Reconstruct the text of one page or view.
    pub fn extract_page_text<P: PageView>(&self, page: &P) -> Result<String> {
        match &self.dedupe {
            Some(options) => page.dedupe_glyphs(options)?.extract_text(&self.text_options),
            None => page.extract_text(&self.text_options),
        }
    }

    /// Cluster the glyphs of one page or view into words.
    pub fn extract_page_words<P: PageView>(&self, page: &P) -> Result<Vec<Word>> {
        let options = &self.text_options.words;
        match &self.dedupe {
            Some(dedupe) => page.dedupe_glyphs(dedupe)?.extract_words(options),
            None => page.extract_words(options),
        }
    }

    /// Reconstruct the text of every page, in page order.
    pub fn extract_text(&self, doc: &Document) -> Result<Vec<String>> {
        self.map_pages(doc, |page| self.extract_page_text(page))
    }

    /// Cluster every page into words, in page order.
    pub fn extract_words(&self, doc: &Document) -> Result<Vec<Vec<Word>>> {
        self.map_pages(doc, |page| self.extract_page_words(page))
    }

    fn map_pages<T, F>(&self, doc: &Document, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Page) -> Result<T> + Sync + Send,
    {
        self.validate()?;
        log::debug!(
            "Processing {} pages, {} glyphs ({}, dedupe={})",
            doc.len(),
            doc.glyph_count(),
            if self.parallel { "parallel" } else { "sequential" },
            self.dedupe.is_some()
        );

        if self.parallel {
            doc.pages.par_iter().map(f).collect()
        } else {
            doc.pages.iter().map(f).collect()
        }
    }
}

impl Default for Glyphweave {
    fn default() -> Self {
        Self::new()
    }
}
