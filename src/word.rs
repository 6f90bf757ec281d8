//! Bitmask encoding of single words and of combined guesses.

use crate::alphabet::{self, LetterMask};
use crate::error::{Error, Result};
use crate::WORD_LENGTH;

/// A word as one letter code per position plus the set of letters it contains.
///
/// An encoded word can also hold the combination of several guesses, in which
/// case a position may carry more than one letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodedWord {
    positions: [LetterMask; WORD_LENGTH],
    presence: LetterMask,
}

impl EncodedWord {
    /// Encodes an uppercase word.
    ///
    /// The word is expected to already be [`WORD_LENGTH`] letters long; only
    /// the characters themselves are checked. Extra characters are ignored and
    /// missing ones leave their position empty.
    pub fn encode(word: &str) -> Result<Self> {
        let mut encoded = Self::default();
        for (position, character) in word.chars().take(WORD_LENGTH).enumerate() {
            let code = alphabet::encode(character).ok_or_else(|| Error::InvalidCharacter {
                character,
                word: word.to_string(),
            })?;
            encoded.positions[position] = code;
            encoded.presence |= code;
        }
        Ok(encoded)
    }

    /// Builds a word directly from its positional codes.
    pub fn from_positions(positions: [LetterMask; WORD_LENGTH]) -> Self {
        let presence = positions.iter().fold(0, |acc, code| acc | code);
        Self { positions, presence }
    }

    /// The letter code at each position.
    pub fn positions(&self) -> &[LetterMask; WORD_LENGTH] {
        &self.positions
    }

    /// Every letter that occurs anywhere in the word.
    pub fn presence(&self) -> LetterMask {
        self.presence
    }

    /// Merges several words into one, OR-ing each position and the presence
    /// masks. An empty iterator yields the empty word.
    pub fn aggregate<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a EncodedWord>,
    {
        words.into_iter().fold(Self::default(), |mut acc, word| {
            for (merged, code) in acc.positions.iter_mut().zip(word.positions) {
                *merged |= code;
            }
            acc.presence |= word.presence;
            acc
        })
    }
}

impl std::fmt::Display for EncodedWord {
    /// Single letters print as-is; a position holding several letters prints
    /// as `[ABC]` and an empty position as `_`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &code in &self.positions {
            match code.count_ones() {
                0 => write!(f, "_")?,
                1 => write!(f, "{}", alphabet::mask_to_string(code))?,
                _ => write!(f, "[{}]", alphabet::mask_to_string(code))?,
            }
        }
        Ok(())
    }
}
