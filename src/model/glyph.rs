//! Positioned glyph records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute key conventionally holding the font name.
pub const FONTNAME: &str = "fontname";

/// Attribute key conventionally holding the font size in points.
pub const SIZE: &str = "size";

/// A value in a glyph's attribute bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value, compared exactly
    Number(f64),
    /// String value
    Text(String),
}

impl AttrValue {
    /// Get the value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a number, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// One visible text unit (character or ligature) as resolved by a PDF parser.
///
/// Coordinates are in page points. `top` and `bottom` are measured downward
/// from the top edge of the page, so `top <= bottom` for well-formed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The decoded text (may hold more than one char for ligatures)
    pub text: String,

    /// Left edge
    pub x0: f64,

    /// Right edge
    pub x1: f64,

    /// Top edge, distance from the top of the page
    pub top: f64,

    /// Bottom edge, distance from the top of the page
    pub bottom: f64,

    /// Whether the glyph reads left-to-right (false for rotated/vertical text)
    #[serde(default = "default_upright")]
    pub upright: bool,

    /// Auxiliary render attributes (fontname, size, colors, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, AttrValue>,
}

fn default_upright() -> bool {
    true
}

impl Glyph {
    /// Create an upright glyph with no attributes.
    pub fn new(text: impl Into<String>, x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
            upright: true,
            attrs: BTreeMap::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the font name attribute.
    pub fn with_fontname(self, fontname: impl Into<String>) -> Self {
        self.with_attr(FONTNAME, AttrValue::Text(fontname.into()))
    }

    /// Set the font size attribute.
    pub fn with_size(self, size: f64) -> Self {
        self.with_attr(SIZE, AttrValue::Number(size))
    }

    /// Set the reading orientation.
    pub fn with_upright(mut self, upright: bool) -> Self {
        self.upright = upright;
        self
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Font name, if present.
    pub fn fontname(&self) -> Option<&str> {
        self.attr(FONTNAME).and_then(AttrValue::as_str)
    }

    /// Font size, if present.
    pub fn size(&self) -> Option<f64> {
        self.attr(SIZE).and_then(AttrValue::as_f64)
    }

    /// Width of the glyph box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the glyph box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Check if the glyph's text is empty or consists only of whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Compare the named attributes of two glyphs.
    ///
    /// An attribute missing on either side is a mismatch, so two glyphs
    /// lacking the same attribute never compare equal.
    pub fn attrs_match<S: AsRef<str>>(&self, other: &Glyph, names: &[S]) -> bool {
        names.iter().all(|name| {
            let name = name.as_ref();
            match (self.attr(name), other.attr(name)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        })
    }
}
