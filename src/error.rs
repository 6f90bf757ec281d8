//! Error types shared by the encoder, corpus and search.

use thiserror::Error;

/// Errors raised while building a corpus or evaluating guesses.
#[derive(Error, Debug)]
pub enum Error {
    /// A character outside `A..=Z` reached the word encoder.
    #[error("invalid character {character:?} in word {word:?}")]
    InvalidCharacter { character: char, word: String },

    /// A guess or solution index does not refer to a corpus word.
    #[error("index {index} is out of range for a corpus of {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    /// The solution prefix is empty or longer than the word list.
    #[error("cannot take {solutions} solutions from a corpus of {words} words")]
    SolutionCount { solutions: usize, words: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
