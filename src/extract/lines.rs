//! Line and page text assembly.

use crate::error::Result;
use crate::model::{Glyph, TextBlock, TextLine, Word};

use super::cluster::cluster_by;
use super::{extract_words, TextOptions, WordOptions};

/// Group words into lines, keeping upright and rotated text apart.
///
/// Upright words band on their `top` edge: a line is opened by its highest
/// word and later words join while their `top` is within `y_tolerance` of
/// the opener. Rotated words band the same way on `x0`. Upright lines come
/// first, top to bottom, with words left to right; rotated lines follow,
/// left to right, with words top to bottom.
pub fn cluster_words_into_lines(words: &[Word], y_tolerance: f64) -> Vec<TextLine> {
    let (upright, rotated): (Vec<Word>, Vec<Word>) = words.iter().cloned().partition(|w| w.upright);

    let mut lines = bands_to_lines(&upright, |w| w.top, y_tolerance);
    lines.extend(bands_to_lines(&rotated, |w| w.x0, y_tolerance));
    lines
}

fn bands_to_lines(words: &[Word], key: fn(&Word) -> f64, tolerance: f64) -> Vec<TextLine> {
    cluster_by(words, key, tolerance)
        .into_iter()
        .filter_map(|band| TextLine::from_words(band.into_iter().map(|i| words[i].clone()).collect()))
        .collect()
}

/// Assemble already extracted words into page text.
///
/// Words in a line are joined by one space and lines by `\n`. In layout mode
/// the absolute positions are approximated with padding instead.
pub fn words_to_text(words: &[Word], options: &TextOptions) -> String {
    let block = TextBlock::from_lines(cluster_words_into_lines(words, options.words.y_tolerance));
    log::debug!(
        "words_to_text: {} words, {} lines, layout={}",
        words.len(),
        block.lines.len(),
        options.layout
    );

    if options.layout {
        layout_text(&block, options.x_density, options.y_density)
    } else {
        block.text()
    }
}

/// Cluster glyphs into words and the words into lines.
pub fn extract_lines(glyphs: &[Glyph], options: &WordOptions) -> Result<Vec<TextLine>> {
    let words = extract_words(glyphs, options)?;
    Ok(cluster_words_into_lines(&words, options.y_tolerance))
}

/// Reconstruct the text of a glyph sequence.
pub fn extract_text(glyphs: &[Glyph], options: &TextOptions) -> Result<String> {
    options.validate()?;
    let words = extract_words(glyphs, &options.words)?;
    Ok(words_to_text(&words, options))
}

/// Render lines on a character grid.
///
/// A word starting at `x0` is placed at column `round(x0 / x_density)` and a
/// line with top edge `top` at row `round(top / y_density)`. Words and lines
/// that would collide are pushed one column or row further.
fn layout_text(block: &TextBlock, x_density: f64, y_density: f64) -> String {
    let mut out = String::new();
    let mut row = 0usize;

    for (i, line) in block.lines.iter().enumerate() {
        let target_row = grid_cell(line.bbox.top, y_density);
        let breaks = if i == 0 {
            target_row
        } else {
            target_row.saturating_sub(row).max(1)
        };
        out.extend(std::iter::repeat('\n').take(breaks));
        row += breaks;

        let mut col = 0usize;
        for (j, word) in line.words.iter().enumerate() {
            let target_col = grid_cell(word.x0, x_density);
            let pad = if j == 0 {
                target_col
            } else {
                target_col.saturating_sub(col).max(1)
            };
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(&word.text);
            col += pad + word.text.chars().count();
        }
    }

    out
}

fn grid_cell(coord: f64, density: f64) -> usize {
    (coord / density).round().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f64, top: f64) -> Word {
        let mut glyphs = text.chars().enumerate().map(|(i, c)| {
            let x = x0 + i as f64 * 5.0;
            Glyph::new(c.to_string(), x, top, x + 5.0, top + 10.0)
        });
        let first = glyphs.next().unwrap();
        let mut w = Word::start(&first, &[] as &[&str], false);
        for g in glyphs {
            w.push(&g, false);
        }
        w
    }

    #[test]
    fn test_cluster_words_into_lines() {
        let words = vec![
            word("second", 0.0, 40.0),
            word("world", 40.0, 10.5),
            word("hello", 0.0, 10.0),
        ];
        let lines = cluster_words_into_lines(&words, 3.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "hello world");
        assert_eq!(lines[1].text(), "second");
    }

    #[test]
    fn test_words_to_text() {
        let words = vec![word("b", 10.0, 30.0), word("a", 0.0, 0.0)];
        assert_eq!(words_to_text(&words, &TextOptions::default()), "a\nb");
    }

    #[test]
    fn test_line_band_uses_y_tolerance() {
        let words = vec![word("a", 0.0, 0.0), word("b", 20.0, 5.0)];
        assert_eq!(words_to_text(&words, &TextOptions::default()), "a\nb");

        let wide = TextOptions::new().with_y_tolerance(6.0);
        assert_eq!(words_to_text(&words, &wide), "a b");
    }

    #[test]
    fn test_layout_mode() {
        let words = vec![
            word("a", 0.0, 0.0),
            word("b", 72.5, 0.0),
            word("c", 0.0, 39.0),
        ];
        let options = TextOptions::new().with_layout(true);
        assert_eq!(words_to_text(&words, &options), "a         b\n\n\nc");
    }

    #[test]
    fn test_layout_keeps_words_apart() {
        // Both words round to column 0; the second is pushed one column on.
        let words = vec![word("ab", 0.0, 0.0), word("cd", 3.0, 0.0)];
        let options = TextOptions::new().with_layout(true).with_density(100.0, 13.0);
        assert_eq!(words_to_text(&words, &options), "ab cd");
    }

    #[test]
    fn test_extract_text_from_glyphs() {
        let glyphs: Vec<Glyph> = "hi you"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let x = i as f64 * 5.0;
                Glyph::new(c.to_string(), x, 0.0, x + 5.0, 10.0)
            })
            .collect();
        assert_eq!(extract_text(&glyphs, &TextOptions::default()).unwrap(), "hi you");

        let lines = extract_lines(&glyphs, &WordOptions::default()).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words.len(), 2);
    }

    #[test]
    fn test_rotated_words_get_their_own_lines() {
        let mut glyphs: Vec<Glyph> = "ab"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let x = i as f64 * 5.0;
                Glyph::new(c.to_string(), x, 10.0, x + 5.0, 20.0)
            })
            .collect();
        // A margin note running down the page, sharing the body line's band.
        for (text, top) in [("z", 40.0), ("w", 50.0), ("x", 9.0), ("y", 19.0)] {
            glyphs.push(Glyph::new(text, 100.0, top, 110.0, top + 10.0).with_upright(false));
        }

        let text = extract_text(&glyphs, &TextOptions::default()).unwrap();
        assert_eq!(text, "ab\nxy zw");

        let lines = extract_lines(&glyphs, &WordOptions::default()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].is_upright());
        assert!(!lines[1].is_upright());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text(&[], &TextOptions::default()).unwrap(), "");
        assert!(cluster_words_into_lines(&[], 3.0).is_empty());
    }

    #[test]
    fn test_invalid_density_in_layout_mode() {
        let options = TextOptions::new().with_layout(true).with_density(-1.0, 13.0);
        assert!(extract_text(&[], &options).is_err());
    }
}
