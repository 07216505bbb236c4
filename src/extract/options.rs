//! Extraction options and configuration.

use crate::error::{check_density, check_tolerance, Result};

/// Default positional tolerance for duplicate detection, in points.
pub const DEFAULT_DEDUPE_TOLERANCE: f64 = 1.0;

/// Default horizontal and vertical tolerance for word clustering, in points.
pub const DEFAULT_WORD_TOLERANCE: f64 = 3.0;

/// Default points per character column in layout mode.
pub const DEFAULT_X_DENSITY: f64 = 7.25;

/// Default points per text row in layout mode.
pub const DEFAULT_Y_DENSITY: f64 = 13.0;

/// Options for duplicate glyph detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupeOptions {
    /// Maximum distance (inclusive) between the `x0` and the `top` of two
    /// glyphs for them to count as the same paint
    pub tolerance: f64,

    /// Attributes that must be present and equal on both glyphs
    pub required_attrs: Vec<String>,

    /// Only compare against this many of the most recent representatives
    /// (`None` = all of them)
    pub lookback: Option<usize>,

    /// Whether whitespace-only glyphs take part in matching
    pub match_whitespace: bool,
}

impl DedupeOptions {
    /// Create new dedupe options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positional tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Require an attribute to match.
    pub fn require_attr(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required_attrs.contains(&name) {
            self.required_attrs.push(name);
        }
        self
    }

    /// Replace the set of required attributes.
    pub fn with_required_attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_attrs.clear();
        for name in names {
            self = self.require_attr(name);
        }
        self
    }

    /// Bound the representative scan to the most recent `n` representatives.
    ///
    /// Duplicates whose earlier paint lies further back than `n`
    /// representatives are kept.
    pub fn with_lookback(mut self, n: usize) -> Self {
        self.lookback = Some(n);
        self
    }

    /// Let whitespace glyphs be collapsed like any other glyph.
    pub fn match_whitespace(mut self, enabled: bool) -> Self {
        self.match_whitespace = enabled;
        self
    }

    /// Check the options before any scan.
    pub fn validate(&self) -> Result<()> {
        check_tolerance("tolerance", self.tolerance)
    }
}

impl Default for DedupeOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_DEDUPE_TOLERANCE,
            required_attrs: Vec::new(),
            lookback: None,
            match_whitespace: false,
        }
    }
}

/// Options for clustering glyphs into words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOptions {
    /// Maximum horizontal gap between consecutive glyphs of a word
    pub x_tolerance: f64,

    /// Maximum vertical misalignment between consecutive glyphs of a word
    pub y_tolerance: f64,

    /// Attributes whose values must match across a word (and are copied onto it)
    pub extra_attrs: Vec<String>,

    /// Keep whitespace glyphs inside words instead of splitting on them
    pub keep_blank_glyphs: bool,

    /// Follow the input order instead of sorting into reading order
    pub use_text_flow: bool,

    /// Characters that always form a word of their own
    pub split_at_punctuation: Option<String>,

    /// Attach the member glyphs to each word
    pub keep_glyphs: bool,
}

impl WordOptions {
    /// Create new word options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal tolerance.
    pub fn with_x_tolerance(mut self, tolerance: f64) -> Self {
        self.x_tolerance = tolerance;
        self
    }

    /// Set the vertical tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f64) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Replace the set of extra attributes.
    pub fn with_extra_attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_attrs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Keep whitespace glyphs inside words.
    pub fn keep_blank_glyphs(mut self, keep: bool) -> Self {
        self.keep_blank_glyphs = keep;
        self
    }

    /// Use the input order as the reading order.
    pub fn use_text_flow(mut self, enabled: bool) -> Self {
        self.use_text_flow = enabled;
        self
    }

    /// Split words at the given punctuation characters.
    pub fn split_at_punctuation(mut self, chars: impl Into<String>) -> Self {
        self.split_at_punctuation = Some(chars.into());
        self
    }

    /// Attach member glyphs to the extracted words.
    pub fn keep_glyphs(mut self, keep: bool) -> Self {
        self.keep_glyphs = keep;
        self
    }

    /// Check the options before any scan.
    pub fn validate(&self) -> Result<()> {
        check_tolerance("x_tolerance", self.x_tolerance)?;
        check_tolerance("y_tolerance", self.y_tolerance)
    }
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            x_tolerance: DEFAULT_WORD_TOLERANCE,
            y_tolerance: DEFAULT_WORD_TOLERANCE,
            extra_attrs: Vec::new(),
            keep_blank_glyphs: false,
            use_text_flow: false,
            split_at_punctuation: None,
            keep_glyphs: false,
        }
    }
}

/// Options for assembling page text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Word clustering options; `y_tolerance` also bands words into lines
    pub words: WordOptions,

    /// Reproduce the page layout with spaces and blank lines
    pub layout: bool,

    /// Points per character column in layout mode
    pub x_density: f64,

    /// Points per text row in layout mode
    pub y_density: f64,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both word tolerances.
    pub fn with_tolerances(mut self, x_tolerance: f64, y_tolerance: f64) -> Self {
        self.words.x_tolerance = x_tolerance;
        self.words.y_tolerance = y_tolerance;
        self
    }

    /// Set the vertical tolerance used for words and lines.
    pub fn with_y_tolerance(mut self, y_tolerance: f64) -> Self {
        self.words.y_tolerance = y_tolerance;
        self
    }

    /// Set the word options.
    pub fn with_word_options(mut self, words: WordOptions) -> Self {
        self.words = words;
        self
    }

    /// Enable or disable layout mode.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    /// Set the layout densities.
    pub fn with_density(mut self, x_density: f64, y_density: f64) -> Self {
        self.x_density = x_density;
        self.y_density = y_density;
        self
    }

    /// Check the options before any scan.
    pub fn validate(&self) -> Result<()> {
        self.words.validate()?;
        if self.layout {
            check_density("x_density", self.x_density)?;
            check_density("y_density", self.y_density)?;
        }
        Ok(())
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            words: WordOptions::default(),
            layout: false,
            x_density: DEFAULT_X_DENSITY,
            y_density: DEFAULT_Y_DENSITY,
        }
    }
}
