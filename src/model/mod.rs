//! Data model for positioned glyphs and the text reconstructed from them.
//!
//! Glyphs and pages come from an upstream PDF parser and are treated as
//! read-only. Words, lines, and derived pages are computed on demand.

mod derived;
mod document;
mod geometry;
mod glyph;
mod page;
mod view;
mod word;

pub use derived::DerivedPage;
pub use document::Document;
pub use geometry::BBox;
pub use glyph::{AttrValue, Glyph, FONTNAME, SIZE};
pub use page::{Graphic, Page};
pub use view::PageView;
pub use word::{TextBlock, TextLine, Word};
