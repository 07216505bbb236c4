//! Page-level types.

use super::{BBox, Glyph};
use crate::extract::WordCache;
use serde::{Deserialize, Serialize};

/// A single page as handed over by the upstream parser.
///
/// The glyph sequence is read-only from the point of view of the text core.
/// Derived views are created with [`PageView::with_glyphs`](super::PageView::with_glyphs)
/// and [`PageView::dedupe_glyphs`](super::PageView::dedupe_glyphs) instead of
/// editing the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub(crate) number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub(crate) width: f64,

    /// Page height in points
    pub(crate) height: f64,

    /// Page rotation in degrees (0, 90, 180, 270)
    #[serde(default)]
    pub(crate) rotation: u16,

    /// Glyphs in content-stream order
    #[serde(default)]
    pub(crate) glyphs: Vec<Glyph>,

    /// Non-text content
    #[serde(default)]
    pub(crate) graphics: Vec<Graphic>,

    #[serde(skip)]
    pub(crate) cache: WordCache,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(number: u32, width: f64, height: f64) -> Self {
        Self {
            number,
            width,
            height,
            rotation: 0,
            glyphs: Vec::new(),
            graphics: Vec::new(),
            cache: WordCache::default(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0) // 210mm * 2.834, 297mm * 2.834
    }

    /// Set the page rotation.
    pub fn with_rotation(mut self, rotation: u16) -> Self {
        self.rotation = rotation % 360;
        self
    }

    /// Replace the glyph sequence.
    pub fn with_glyph_list(mut self, glyphs: Vec<Glyph>) -> Self {
        self.glyphs = glyphs;
        self.cache.clear();
        self
    }

    /// Append a glyph while the page is being built.
    pub fn push_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
        self.cache.clear();
    }

    /// Append a non-text object while the page is being built.
    pub fn push_graphic(&mut self, graphic: Graphic) {
        self.graphics.push(graphic);
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}

/// Non-text page content.
///
/// The text core never interprets these; they are carried so that derived
/// views expose the same geometry as their base page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Graphic {
    /// A straight stroked segment
    Line {
        /// Bounding box of the segment
        bbox: BBox,
    },

    /// A rectangle
    Rect {
        /// Bounding box of the rectangle
        bbox: BBox,
        /// Whether the rectangle is filled
        #[serde(default)]
        fill: bool,
    },

    /// A Bezier path
    Curve {
        /// Bounding box of the path
        bbox: BBox,
    },

    /// An image placement
    Image {
        /// Resource name of the image
        name: String,
        /// Placement box
        bbox: BBox,
    },
}

impl Graphic {
    /// Bounding box of the object.
    pub fn bbox(&self) -> BBox {
        match self {
            Graphic::Line { bbox }
            | Graphic::Rect { bbox, .. }
            | Graphic::Curve { bbox }
            | Graphic::Image { bbox, .. } => *bbox,
        }
    }

    /// Check if this object is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Graphic::Image { .. })
    }
}
