//! Glyph deduplication and text reconstruction.

mod cache;
mod cluster;
mod dedupe;
mod lines;
mod options;
mod words;

pub use cache::WordCache;
pub use dedupe::{dedupe_glyphs, group_duplicates, is_duplicate, DuplicateGroup};
pub use lines::{cluster_words_into_lines, extract_lines, extract_text, words_to_text};
pub use options::{
    DedupeOptions, TextOptions, WordOptions, DEFAULT_DEDUPE_TOLERANCE, DEFAULT_WORD_TOLERANCE,
    DEFAULT_X_DENSITY, DEFAULT_Y_DENSITY,
};
pub use words::{extract_words, WordExtractor};
