//! Rendering extracted words, lines, and pages to output formats.

mod json;

pub use json::{to_json, JsonFormat};
