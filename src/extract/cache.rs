//! Per-view memo of word extraction results.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::model::Word;

use super::WordOptions;

type Entry = (WordOptions, Arc<Vec<Word>>);

/// Word results memoized per distinct [`WordOptions`].
///
/// Each page or derived view owns its own cache, so entries are tied to one
/// glyph sequence. [`Page`](crate::model::Page) clears it whenever its glyphs
/// change; cloning a view starts from an empty cache.
#[derive(Debug, Default)]
pub struct WordCache {
    entries: Mutex<Vec<Entry>>,
}

impl WordCache {
    /// Return the cached words for `options`, computing them on first use.
    ///
    /// Errors from `compute` are returned as-is and nothing is stored.
    pub fn get_or_try_insert<F>(&self, options: &WordOptions, compute: F) -> Result<Arc<Vec<Word>>>
    where
        F: FnOnce() -> Result<Vec<Word>>,
    {
        if let Some(hit) = self.find(options) {
            log::trace!("WordCache: hit");
            return Ok(hit);
        }

        let words = Arc::new(compute()?);

        let mut entries = self.lock();
        // Another thread may have filled the slot while we computed.
        if let Some((_, existing)) = entries.iter().find(|(o, _)| o == options) {
            return Ok(Arc::clone(existing));
        }
        entries.push((options.clone(), Arc::clone(&words)));
        Ok(words)
    }

    /// Number of memoized option sets.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every memoized result.
    pub fn clear(&mut self) {
        match self.entries.get_mut() {
            Ok(entries) => entries.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn find(&self, options: &WordOptions) -> Option<Arc<Vec<Word>>> {
        self.lock()
            .iter()
            .find(|(o, _)| o == options)
            .map(|(_, words)| Arc::clone(words))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        // Entries are only ever pushed whole, so a poisoned lock still holds
        // consistent data.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clone for WordCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}
