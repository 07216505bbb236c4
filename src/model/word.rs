//! Words, lines, and text blocks reconstructed from glyphs.

use super::{AttrValue, BBox, Glyph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A run of adjacent glyphs merged into one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Concatenated glyph text, in reading order
    pub text: String,

    /// Left edge (min over member glyphs)
    pub x0: f64,

    /// Right edge (max over member glyphs)
    pub x1: f64,

    /// Top edge (min over member glyphs)
    pub top: f64,

    /// Bottom edge (max over member glyphs)
    pub bottom: f64,

    /// Reading orientation shared by all member glyphs
    pub upright: bool,

    /// Values of the requested extra attributes, taken from the first glyph
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, AttrValue>,

    /// Member glyphs, only kept when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glyphs: Vec<Glyph>,
}

impl Word {
    /// Start a word from its first glyph.
    pub(crate) fn start<S: AsRef<str>>(glyph: &Glyph, extra_attrs: &[S], keep_glyphs: bool) -> Self {
        let attrs = extra_attrs
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                glyph.attr(name).map(|v| (name.to_string(), v.clone()))
            })
            .collect();

        Self {
            text: glyph.text.clone(),
            x0: glyph.x0,
            x1: glyph.x1,
            top: glyph.top,
            bottom: glyph.bottom,
            upright: glyph.upright,
            attrs,
            glyphs: if keep_glyphs {
                vec![glyph.clone()]
            } else {
                Vec::new()
            },
        }
    }

    /// Append a glyph, growing the box to cover it.
    pub(crate) fn push(&mut self, glyph: &Glyph, keep_glyphs: bool) {
        self.text.push_str(&glyph.text);
        self.x0 = self.x0.min(glyph.x0);
        self.x1 = self.x1.max(glyph.x1);
        self.top = self.top.min(glyph.top);
        self.bottom = self.bottom.max(glyph.bottom);
        if keep_glyphs {
            self.glyphs.push(glyph.clone());
        }
    }

    /// Bounding box of the word.
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// Words sharing a band, in reading order.
///
/// Upright lines read left to right; rotated lines read top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Words in reading order
    pub words: Vec<Word>,
    /// Union of the member word boxes
    pub bbox: BBox,
}

impl TextLine {
    /// Build a line from words of one orientation, sorting them in reading
    /// order: by `x0` when the first word is upright, by `top` otherwise.
    ///
    /// Returns `None` for an empty word list.
    pub fn from_words(mut words: Vec<Word>) -> Option<Self> {
        let first = words.first()?;
        let (bbox, upright) = (first.bbox(), first.upright);
        if upright {
            words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
        } else {
            words.sort_by(|a, b| a.top.total_cmp(&b.top));
        }
        let bbox = words.iter().fold(bbox, |acc, w| acc.union(&w.bbox()));
        Some(Self { words, bbox })
    }

    /// Check if the line holds upright text.
    pub fn is_upright(&self) -> bool {
        self.words.first().map_or(true, |w| w.upright)
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A page's lines in reading order.
///
/// Upright lines come first, top to bottom, followed by rotated lines, left
/// to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in reading order
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Build a block, sorting lines into reading order.
    pub fn from_lines(mut lines: Vec<TextLine>) -> Self {
        lines.sort_by(|a, b| {
            b.is_upright()
                .cmp(&a.is_upright())
                .then_with(|| line_position(a).total_cmp(&line_position(b)))
        });
        Self { lines }
    }

    /// Lines joined by newlines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn line_position(line: &TextLine) -> f64 {
    if line.is_upright() {
        line.bbox.top
    } else {
        line.bbox.x0
    }
}
