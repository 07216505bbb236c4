//! Batches of pages processed together.

use super::{Page, PageView};
use serde::{Deserialize, Serialize};

/// Pages handed over together by the upstream parser, in processing order.
///
/// Page numbers come from the pages themselves, so a batch may hold any
/// subset of a file's pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in processing order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages in the batch.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the batch has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find a page by its own page number.
    pub fn page(&self, number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.number() == number)
    }

    /// Total glyphs across all pages.
    pub fn glyph_count(&self) -> usize {
        self.pages.iter().map(|p| p.glyphs().len()).sum()
    }
}

impl FromIterator<Page> for Document {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl Extend<Page> for Document {
    fn extend<I: IntoIterator<Item = Page>>(&mut self, iter: I) {
        self.pages.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glyph;

    #[test]
    fn test_lookup_by_page_number() {
        let doc: Document = [7, 3, 12].into_iter().map(Page::letter).collect();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.page(3).map(|p| p.number()), Some(3));
        assert_eq!(doc.page(12).map(|p| p.number()), Some(12));
        assert!(doc.page(1).is_none());
        assert!(doc.page(0).is_none());
    }

    #[test]
    fn test_extend_and_glyph_count() {
        let mut doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.glyph_count(), 0);

        let mut page = Page::a4(1);
        page.push_glyph(Glyph::new("a", 0.0, 0.0, 5.0, 10.0));
        page.push_glyph(Glyph::new("b", 5.0, 0.0, 10.0, 10.0));
        doc.extend([page, Page::letter(2)]);

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.glyph_count(), 2);
    }
}
