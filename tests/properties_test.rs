//! Property-based tests for duplicate glyph removal.
//!
//! Two input shapes are used:
//! - arbitrary glyphs crowded into a small area, for properties that must
//!   hold for any input (idempotence, determinism, order preservation)
//! - realistic double paints: distinct glyph sites far apart, each painted
//!   one to three times with sub-point jitter, for the monotonicity
//!   properties

use glyphweave::{dedupe_glyphs, extract_text, DedupeOptions, Glyph, TextOptions};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Glyph ids record the input position so survivors can be traced back.
fn id_of(glyph: &Glyph) -> f64 {
    glyph.attr("id").and_then(|v| v.as_f64()).unwrap_or(-1.0)
}

/// Crowded glyphs: few texts, positions on a 0.5pt grid within 5pt.
fn crowded_glyphs() -> impl Strategy<Value = Vec<Glyph>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["a", "b", " ", "fi"]),
            0u32..10,
            0u32..10,
            0u8..3,
            prop::option::of(0u8..2),
        ),
        0..60,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(id, (text, x, y, font, size))| {
                let x0 = f64::from(x) * 0.5;
                let top = f64::from(y) * 0.5;
                let mut g = Glyph::new(text, x0, top, x0 + 5.0, top + 10.0)
                    .with_fontname(format!("F{}", font))
                    .with_attr("id", id as f64);
                if let Some(size) = size {
                    g = g.with_size(10.0 + f64::from(size));
                }
                g
            })
            .collect()
    })
}

/// One paint of a site: x jitter, top jitter, font index, optional size index.
type Paint = (f64, f64, u8, Option<u8>);

/// Realistic double paints: sites 20pt apart, paints within 0.4pt of each other.
fn double_painted_glyphs() -> impl Strategy<Value = Vec<Glyph>> {
    let paint = (0.0..=0.4f64, 0.0..=0.4f64, 0u8..2, prop::option::of(0u8..2));
    let site = (
        prop::sample::select(vec!["a", "l", "微", "软"]),
        prop::collection::vec(paint, 1..4),
    );

    prop::collection::vec(site, 0..30).prop_map(|sites: Vec<(&str, Vec<Paint>)>| {
        let mut glyphs = Vec::new();
        for (i, (text, paints)) in sites.into_iter().enumerate() {
            let x = 20.0 * (i % 10) as f64;
            let top = 30.0 * (i / 10) as f64;
            for (dx, dy, font, size) in paints {
                let mut g = Glyph::new(text, x + dx, top + dy, x + dx + 8.0, top + dy + 10.0)
                    .with_fontname(format!("F{}", font))
                    .with_attr("id", glyphs.len() as f64);
                if let Some(size) = size {
                    g = g.with_size(10.0 + f64::from(size));
                }
                glyphs.push(g);
            }
        }
        glyphs
    })
}

fn attr_subset() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(vec!["fontname".to_string(), "size".to_string()], 0..=2)
}

fn removed(glyphs: &[Glyph], options: &DedupeOptions) -> usize {
    glyphs.len() - dedupe_glyphs(glyphs, options).unwrap().len()
}

// ============================================================================
// Properties on arbitrary input
// ============================================================================

/// Property: deduplicating twice is the same as deduplicating once
#[test]
fn proptest_dedupe_idempotent() {
    proptest!(|(
        glyphs in crowded_glyphs(),
        tolerance in 0.0..3.0f64,
        attrs in attr_subset(),
        lookback in prop::option::of(1usize..8)
    )| {
        let mut options = DedupeOptions::new()
            .with_tolerance(tolerance)
            .with_required_attrs(attrs);
        options.lookback = lookback;

        let once = dedupe_glyphs(&glyphs, &options).unwrap();
        let twice = dedupe_glyphs(&once, &options).unwrap();
        prop_assert_eq!(once, twice);
    });
}

/// Property: identical input and options give identical output
#[test]
fn proptest_dedupe_deterministic() {
    proptest!(|(glyphs in crowded_glyphs(), tolerance in 0.0..3.0f64)| {
        let options = DedupeOptions::new().with_tolerance(tolerance);
        prop_assert_eq!(
            dedupe_glyphs(&glyphs, &options).unwrap(),
            dedupe_glyphs(&glyphs, &options).unwrap()
        );
    });
}

/// Property: survivors are unmodified input glyphs in their original order
#[test]
fn proptest_dedupe_preserves_order_and_attributes() {
    proptest!(|(glyphs in crowded_glyphs(), tolerance in 0.0..3.0f64, attrs in attr_subset())| {
        let options = DedupeOptions::new()
            .with_tolerance(tolerance)
            .with_required_attrs(attrs);
        let kept = dedupe_glyphs(&glyphs, &options).unwrap();

        let ids: Vec<f64> = kept.iter().map(id_of).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "survivors out of order: {:?}", ids);

        for glyph in &kept {
            let original = &glyphs[id_of(glyph) as usize];
            prop_assert_eq!(glyph, original);
        }
    });
}

/// Property: no two survivors match each other (unbounded scan)
#[test]
fn proptest_survivors_are_pairwise_distinct() {
    proptest!(|(glyphs in crowded_glyphs(), tolerance in 0.0..3.0f64, attrs in attr_subset())| {
        let options = DedupeOptions::new()
            .with_tolerance(tolerance)
            .with_required_attrs(attrs);
        let kept = dedupe_glyphs(&glyphs, &options).unwrap();

        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                if !a.is_whitespace() {
                    prop_assert!(!glyphweave::extract::is_duplicate(a, b, &options));
                }
            }
        }
    });
}

/// Property: whitespace glyphs are never removed by default
#[test]
fn proptest_whitespace_survives() {
    proptest!(|(glyphs in crowded_glyphs(), tolerance in 0.0..3.0f64)| {
        let options = DedupeOptions::new().with_tolerance(tolerance);
        let kept = dedupe_glyphs(&glyphs, &options).unwrap();

        let spaces_in = glyphs.iter().filter(|g| g.is_whitespace()).count();
        let spaces_out = kept.iter().filter(|g| g.is_whitespace()).count();
        prop_assert_eq!(spaces_in, spaces_out);
    });
}

// ============================================================================
// Properties on realistic double paints
// ============================================================================

/// Property: a larger tolerance never removes fewer glyphs
#[test]
fn proptest_tolerance_monotonic() {
    proptest!(|(
        glyphs in double_painted_glyphs(),
        low in 0.5..4.0f64,
        extra in 0.0..4.0f64,
        attrs in attr_subset()
    )| {
        let base = DedupeOptions::new().with_required_attrs(attrs);
        let exact = removed(&glyphs, &base.clone().with_tolerance(0.0));
        let small = removed(&glyphs, &base.clone().with_tolerance(low));
        let large = removed(&glyphs, &base.with_tolerance(low + extra));

        prop_assert!(exact <= small);
        prop_assert!(small <= large);
    });
}

/// Property: requiring another attribute never removes more glyphs
#[test]
fn proptest_required_attrs_monotonic() {
    proptest!(|(glyphs in double_painted_glyphs(), tolerance in 0.5..8.0f64)| {
        let options = DedupeOptions::new().with_tolerance(tolerance);
        let none = removed(&glyphs, &options);
        let font = removed(&glyphs, &options.clone().require_attr("fontname"));
        let size = removed(&glyphs, &options.clone().require_attr("size"));
        let both = removed(
            &glyphs,
            &options.require_attr("fontname").require_attr("size"),
        );

        prop_assert!(font <= none);
        prop_assert!(size <= none);
        prop_assert!(both <= font);
        prop_assert!(both <= size);
    });
}

/// Property: deduplicated text never gets longer
#[test]
fn proptest_dedupe_never_lengthens_text() {
    proptest!(ProptestConfig::with_cases(64), |(glyphs in double_painted_glyphs())| {
        let text_options = TextOptions::default();
        let raw = extract_text(&glyphs, &text_options).unwrap();
        let deduped = dedupe_glyphs(&glyphs, &DedupeOptions::default()).unwrap();
        let clean = extract_text(&deduped, &text_options).unwrap();

        prop_assert!(clean.chars().count() <= raw.chars().count());
    });
}
