//! Word clustering.
//!
//! Glyphs are split by orientation, put into reading order, and merged while
//! consecutive glyphs stay within the horizontal and vertical tolerances.

use crate::error::Result;
use crate::model::{Glyph, Word};

use super::cluster::cluster_by;
use super::WordOptions;

/// Reusable word extractor holding validated options.
#[derive(Debug, Clone)]
pub struct WordExtractor {
    options: WordOptions,
}

impl WordExtractor {
    /// Create an extractor, rejecting invalid tolerances.
    pub fn new(options: WordOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &WordOptions {
        &self.options
    }

    /// Cluster glyphs into words.
    ///
    /// Upright words come first, then rotated ones, each in reading order.
    pub fn extract(&self, glyphs: &[Glyph]) -> Vec<Word> {
        let (upright, rotated): (Vec<&Glyph>, Vec<&Glyph>) =
            glyphs.iter().partition(|g| g.upright);

        let mut words = Vec::new();
        let mut band_count = 0;
        for group in [upright, rotated] {
            for band in self.reading_order(group) {
                band_count += 1;
                self.merge_band(&band, &mut words);
            }
        }

        log::debug!(
            "WordExtractor: {} glyphs, {} bands, {} words",
            glyphs.len(),
            band_count,
            words.len()
        );

        words
    }

    /// Split one orientation group into bands and sort each band.
    ///
    /// Upright text bands on `top` and reads by `x0`; rotated text bands on
    /// `x0` and reads by `top`. With text flow the input order is one band.
    fn reading_order<'g>(&self, glyphs: Vec<&'g Glyph>) -> Vec<Vec<&'g Glyph>> {
        if glyphs.is_empty() {
            return Vec::new();
        }
        if self.options.use_text_flow {
            return vec![glyphs];
        }

        let upright = glyphs[0].upright;
        let (band_tolerance, band_key, read_key): (f64, fn(&Glyph) -> f64, fn(&Glyph) -> f64) =
            if upright {
                (self.options.y_tolerance, top_of, x0_of)
            } else {
                (self.options.x_tolerance, x0_of, top_of)
            };

        cluster_by(&glyphs, |g| band_key(g), band_tolerance)
            .into_iter()
            .map(|band| {
                let mut band: Vec<&Glyph> = band.into_iter().map(|i| glyphs[i]).collect();
                band.sort_by(|a, b| read_key(a).total_cmp(&read_key(b)));
                band
            })
            .collect()
    }

    /// Merge one ordered band into words.
    fn merge_band(&self, band: &[&Glyph], words: &mut Vec<Word>) {
        let options = &self.options;
        let mut current: Option<Word> = None;
        let mut prev: Option<&Glyph> = None;

        for &glyph in band {
            if !options.keep_blank_glyphs && glyph.is_whitespace() {
                words.extend(current.take());
                prev = None;
                continue;
            }

            if self.is_punctuation(glyph) {
                words.extend(current.take());
                words.push(Word::start(glyph, &options.extra_attrs, options.keep_glyphs));
                prev = None;
                continue;
            }

            let extend = prev.is_some_and(|p| !self.begins_new_word(p, glyph));
            if !extend {
                words.extend(current.take());
                current = Some(Word::start(glyph, &options.extra_attrs, options.keep_glyphs));
            } else if let Some(word) = current.as_mut() {
                word.push(glyph, options.keep_glyphs);
            }
            prev = Some(glyph);
        }

        words.extend(current);
    }

    /// Check whether `curr` cannot continue the word that ends with `prev`.
    fn begins_new_word(&self, prev: &Glyph, curr: &Glyph) -> bool {
        let o = &self.options;

        if prev.upright != curr.upright || !prev.attrs_match(curr, &o.extra_attrs) {
            return true;
        }

        let split = if curr.upright {
            curr.x0 - prev.x1 > o.x_tolerance
                || curr.x0 < prev.x0 - o.x_tolerance
                || (curr.top - prev.top).abs() > o.y_tolerance
        } else {
            curr.top - prev.bottom > o.y_tolerance
                || curr.top < prev.top - o.y_tolerance
                || (curr.x0 - prev.x0).abs() > o.x_tolerance
        };

        if split {
            log::trace!("word break before {:?} after {:?}", curr.text, prev.text);
        }
        split
    }

    fn is_punctuation(&self, glyph: &Glyph) -> bool {
        match &self.options.split_at_punctuation {
            Some(set) => !glyph.text.is_empty() && glyph.text.chars().all(|c| set.contains(c)),
            None => false,
        }
    }
}

fn top_of(glyph: &Glyph) -> f64 {
    glyph.top
}

fn x0_of(glyph: &Glyph) -> f64 {
    glyph.x0
}

/// Cluster glyphs into words.
///
/// Fails only when the options hold an invalid tolerance; empty input gives
/// an empty list.
pub fn extract_words(glyphs: &[Glyph], options: &WordOptions) -> Result<Vec<Word>> {
    Ok(WordExtractor::new(options.clone())?.extract(glyphs))
}
