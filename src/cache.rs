//! Index from a set of required letters to the words containing all of them.
//!
//! A required-letters mask is always a subset of a single word's presence
//! mask, so it holds at most [`crate::WORD_LENGTH`] letters. Indexing every letter
//! subset of every word therefore covers every key a search can ask for, and
//! a missing key means no word contains those letters.

use rustc_hash::FxHashMap;

use crate::alphabet::LetterMask;
use crate::corpus::Corpus;

#[derive(Debug, Clone, Default)]
pub struct ConsistencyCache {
    entries: FxHashMap<LetterMask, Vec<u32>>,
}

impl ConsistencyCache {
    /// Indexes every word of `corpus` under each subset of its letters.
    pub fn build(corpus: &Corpus) -> Self {
        let mut entries: FxHashMap<LetterMask, Vec<u32>> = FxHashMap::default();
        for (index, &presence) in corpus.presence_masks().iter().enumerate() {
            // Walk the submasks of `presence` from largest down to zero.
            let mut subset = presence;
            loop {
                entries.entry(subset).or_default().push(index as u32);
                if subset == 0 {
                    break;
                }
                subset = (subset - 1) & presence;
            }
        }
        Self { entries }
    }

    /// Ascending corpus indices of the words containing every letter of
    /// `required`.
    pub fn candidates(&self, required: LetterMask) -> &[u32] {
        self.entries.get(&required).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
