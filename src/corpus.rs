//! The encoded dictionary.
//!
//! Words are stored column-wise: one contiguous positional matrix (a row of
//! [`WORD_LENGTH`] codes per word) and one contiguous vector of presence masks,
//! so the search can sweep the whole dictionary with plain bitwise loops.
//! The first `num_solutions` words are the possible answers; every word is a
//! valid guess. A word is identified only by its index.

use std::io::BufRead;

use crate::alphabet::LetterMask;
use crate::error::{Error, Result};
use crate::word::EncodedWord;
use crate::WORD_LENGTH;

#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<String>,
    positions: Vec<[LetterMask; WORD_LENGTH]>,
    presence: Vec<LetterMask>,
    num_solutions: usize,
}

impl Corpus {
    /// Encodes `words`, treating the first `num_solutions` as the answer set.
    pub fn new(words: Vec<String>, num_solutions: usize) -> Result<Self> {
        if num_solutions == 0 || num_solutions > words.len() {
            return Err(Error::SolutionCount {
                solutions: num_solutions,
                words: words.len(),
            });
        }
        let mut positions = Vec::with_capacity(words.len());
        let mut presence = Vec::with_capacity(words.len());
        for word in &words {
            let encoded = EncodedWord::encode(word)?;
            positions.push(*encoded.positions());
            presence.push(encoded.presence());
        }
        Ok(Self {
            words,
            positions,
            presence,
            num_solutions,
        })
    }

    /// Loads a dictionary with [`crate::load_dictionary`] and encodes it.
    pub fn from_reader<R: BufRead>(reader: R, num_solutions: usize) -> Result<Self> {
        Self::new(crate::load_dictionary(reader)?, num_solutions)
    }

    /// Number of words, solutions included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of leading words that are possible answers.
    pub fn num_solutions(&self) -> usize {
        self.num_solutions
    }

    pub fn word(&self, index: usize) -> Result<EncodedWord> {
        self.check(index)?;
        Ok(EncodedWord::from_positions(self.positions[index]))
    }

    pub fn presence(&self, index: usize) -> Result<LetterMask> {
        self.check(index)?;
        Ok(self.presence[index])
    }

    /// The word as it was loaded.
    pub fn text(&self, index: usize) -> Result<&str> {
        self.check(index)?;
        Ok(&self.words[index])
    }

    /// One row of letter codes per word, in corpus order.
    pub fn positional_matrix(&self) -> &[[LetterMask; WORD_LENGTH]] {
        &self.positions
    }

    /// One presence mask per word, in corpus order.
    pub fn presence_masks(&self) -> &[LetterMask] {
        &self.presence
    }

    /// Finds the first word with the same letters in the same positions.
    pub fn find(&self, word: &str) -> Result<Option<usize>> {
        let target = EncodedWord::encode(&word.to_uppercase())?;
        Ok(self
            .positions
            .iter()
            .position(|positions| positions == target.positions()))
    }

    /// Combines the words at `indices` into one aggregate guess.
    pub fn aggregate(&self, indices: &[usize]) -> Result<EncodedWord> {
        let words = indices
            .iter()
            .map(|&index| self.word(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(EncodedWord::aggregate(&words))
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.words.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
        }
    }
}
