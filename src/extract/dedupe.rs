//! Duplicate glyph detection.
//!
//! Some PDF producers fake bold text by painting every glyph two or more
//! times at almost the same position. Left alone, those paints show up as
//! doubled characters ("HHeelllloo") in extracted words and text.
//!
//! Glyphs are grouped greedily in input order: each glyph is compared
//! against the representatives kept so far and either joins the first one
//! it matches or becomes a new representative. The earliest paint of every
//! group is the one that survives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Glyph;

use super::DedupeOptions;

/// A set of glyphs judged to be paints of the same character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Index of the surviving glyph in the input sequence
    pub representative: usize,
    /// Indices of all members, representative first, in input order
    pub members: Vec<usize>,
}

impl DuplicateGroup {
    fn single(index: usize) -> Self {
        Self {
            representative: index,
            members: vec![index],
        }
    }

    /// Number of glyphs in the group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members.
    ///
    /// Groups built by [`group_duplicates`] always hold their representative.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if the group collapsed at least one extra paint.
    pub fn has_duplicates(&self) -> bool {
        self.members.len() > 1
    }

    /// Indices of the discarded paints.
    pub fn duplicates(&self) -> &[usize] {
        self.members.get(1..).unwrap_or(&[])
    }
}

/// Check whether two glyphs are paints of the same character.
///
/// Text must be identical, `x0` and `top` must each be within the
/// tolerance (inclusive), and every required attribute must be present and
/// equal on both glyphs.
pub fn is_duplicate(a: &Glyph, b: &Glyph, options: &DedupeOptions) -> bool {
    a.text == b.text
        && (a.x0 - b.x0).abs() <= options.tolerance
        && (a.top - b.top).abs() <= options.tolerance
        && a.attrs_match(b, &options.required_attrs)
}

/// Partition glyphs into duplicate groups.
///
/// Groups are returned in order of their representative, which is always
/// the earliest member. Whitespace glyphs form singleton groups unless
/// [`DedupeOptions::match_whitespace`] is set.
pub fn group_duplicates(glyphs: &[Glyph], options: &DedupeOptions) -> Result<Vec<DuplicateGroup>> {
    options.validate()?;

    let mut groups: Vec<DuplicateGroup> = Vec::with_capacity(glyphs.len());
    // Group indices per text, ascending. Only same-text representatives can match.
    let mut by_text: HashMap<&str, Vec<usize>> = HashMap::new();

    for (index, glyph) in glyphs.iter().enumerate() {
        if !options.match_whitespace && glyph.is_whitespace() {
            groups.push(DuplicateGroup::single(index));
            continue;
        }

        let floor = options
            .lookback
            .map_or(0, |n| groups.len().saturating_sub(n));
        let candidates = by_text.entry(glyph.text.as_str()).or_default();
        let start = candidates.partition_point(|&g| g < floor);

        let hit = candidates[start..]
            .iter()
            .copied()
            .find(|&g| is_duplicate(&glyphs[groups[g].representative], glyph, options));

        match hit {
            Some(g) => {
                log::trace!(
                    "dedupe: glyph {} {:?} joins representative {}",
                    index,
                    glyph.text,
                    groups[g].representative
                );
                groups[g].members.push(index);
            }
            None => {
                candidates.push(groups.len());
                groups.push(DuplicateGroup::single(index));
            }
        }
    }

    Ok(groups)
}

/// Remove duplicate paints, keeping the first glyph of every group.
///
/// Surviving glyphs keep their relative order and all of their attributes.
/// Running the result through this function again returns it unchanged.
pub fn dedupe_glyphs(glyphs: &[Glyph], options: &DedupeOptions) -> Result<Vec<Glyph>> {
    let groups = group_duplicates(glyphs, options)?;

    let kept: Vec<Glyph> = groups
        .iter()
        .map(|g| glyphs[g.representative].clone())
        .collect();

    log::debug!(
        "dedupe: {} glyphs in, {} kept, {} removed (tolerance={}, required_attrs={:?})",
        glyphs.len(),
        kept.len(),
        glyphs.len() - kept.len(),
        options.tolerance,
        options.required_attrs
    );

    Ok(kept)
}
