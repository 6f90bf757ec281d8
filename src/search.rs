//! Worst-case scoring of guesses.
//!
//! For a guess set, every possible solution is tried in turn; the number of
//! dictionary words still consistent with the resulting feedback is the size
//! of the search space an adversarial answer-picker would leave the player
//! with. A guess is scored by the largest such count.

use rayon::prelude::*;

use crate::cache::ConsistencyCache;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::feedback::Constraint;
use crate::word::EncodedWord;

/// The score of a guess set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WorstCase {
    /// Largest number of words left consistent, over all solutions.
    pub remaining: usize,
    /// Index of the first solution that leaves `remaining` words.
    pub solution: usize,
}

/// Scores guesses against a corpus, optionally through a [`ConsistencyCache`].
#[derive(Debug, Clone, Copy)]
pub struct WorstCaseSearch<'a> {
    corpus: &'a Corpus,
    cache: Option<&'a ConsistencyCache>,
}

impl<'a> WorstCaseSearch<'a> {
    /// Counts by scanning the whole corpus for every query.
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            cache: None,
        }
    }

    /// Counts only over the cached words that hold the required letters.
    ///
    /// `cache` must have been built from `corpus`.
    pub fn with_cache(corpus: &'a Corpus, cache: &'a ConsistencyCache) -> Self {
        Self {
            corpus,
            cache: Some(cache),
        }
    }

    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// The feedback the guess set `guesses` gets when `solution` is the answer.
    pub fn constraint(&self, guesses: &[usize], solution: usize) -> Result<Constraint> {
        let guess = self.corpus.aggregate(guesses)?;
        let solution = self.corpus.word(solution)?;
        Ok(Constraint::compute(&guess, &solution))
    }

    /// Scores a guess set.
    ///
    /// Fails with [`crate::Error::IndexOutOfRange`] if any index is outside the corpus.
    /// An empty guess set learns nothing, so every word stays consistent.
    pub fn evaluate(&self, guesses: &[usize]) -> Result<WorstCase> {
        let guess = self.corpus.aggregate(guesses)?;
        Ok(self.evaluate_aggregate(&guess))
    }

    /// Scores each of the first `limit` words (or all of them) as a single
    /// opening guess. Results are in guess-index order.
    pub fn evaluate_all(&self, limit: Option<usize>) -> Vec<WorstCase> {
        let count = limit.map_or(self.corpus.len(), |limit| limit.min(self.corpus.len()));
        let positions = self.corpus.positional_matrix();
        (0..count)
            .into_par_iter()
            .map(|index| self.evaluate_aggregate(&EncodedWord::from_positions(positions[index])))
            .collect()
    }

    /// Scores `prefix ++ [candidate]` for every candidate, in candidate order.
    pub fn evaluate_extensions(&self, prefix: &[usize], candidates: &[usize]) -> Result<Vec<WorstCase>> {
        let opening = self.corpus.aggregate(prefix)?;
        candidates
            .par_iter()
            .map(|&candidate| -> Result<WorstCase> {
                let word = self.corpus.word(candidate)?;
                Ok(self.evaluate_aggregate(&EncodedWord::aggregate([&opening, &word])))
            })
            .collect()
    }

    /// Number of corpus words that satisfy `constraint`.
    pub fn count_consistent(&self, constraint: &Constraint) -> usize {
        let positions = self.corpus.positional_matrix();
        let presence = self.corpus.presence_masks();
        match self.cache {
            Some(cache) => cache
                .candidates(constraint.required())
                .iter()
                .filter(|&&index| {
                    let index = index as usize;
                    constraint.is_satisfied_by(&positions[index], presence[index])
                })
                .count(),
            None => positions
                .iter()
                .zip(presence)
                .filter(|&(word, &letters)| constraint.is_satisfied_by(word, letters))
                .count(),
        }
    }

    fn evaluate_aggregate(&self, guess: &EncodedWord) -> WorstCase {
        let positions = self.corpus.positional_matrix();
        let mut worst = WorstCase::default();
        for (solution, word) in positions[..self.corpus.num_solutions()].iter().enumerate() {
            let constraint = Constraint::compute(guess, &EncodedWord::from_positions(*word));
            let remaining = self.count_consistent(&constraint);
            if remaining > worst.remaining {
                worst = WorstCase { remaining, solution };
            }
        }
        worst
    }
}
