//! # Wordle Worst Case
//!
//! A multithreaded worst-case scorer for Wordle opening guesses.
//!
//! Every word is encoded as bitmasks, one bit per letter. For each candidate
//! guess the scorer plays it against every possible solution, simulates the
//! letter feedback, and counts how many dictionary words remain consistent.
//! A guess is scored by its worst solution: the one that leaves the most
//! words standing.

pub mod alphabet;
pub mod cache;
pub mod corpus;
pub mod error;
pub mod feedback;
pub mod search;
pub mod word;

use std::io::BufRead;

use regex::Regex;

pub use alphabet::LetterMask;
pub use cache::ConsistencyCache;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use feedback::Constraint;
pub use search::{WorstCase, WorstCaseSearch};
pub use word::EncodedWord;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of possible answers at the start of the standard word list.
pub const N_SOLUTIONS: usize = 2315;

/// Read a dictionary, one word per line.
///
/// Lines that are not exactly [`WORD_LENGTH`] ASCII letters are skipped; the
/// rest are upper-cased and returned in file order.
pub fn load_dictionary<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let pattern = format!("^[A-Za-z]{{{}}}$", WORD_LENGTH);
    let valid = Regex::new(&pattern).map_err(|err| {
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, err))
    })?;
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if valid.is_match(line) {
            words.push(line.to_uppercase());
        }
    }
    Ok(words)
}
