//! Feedback simulation.
//!
//! This module turns a guess (or the aggregate of several guesses) and a
//! hypothetical solution into the letter constraints the player would learn.
//!
//! The model is letters-only: a played letter is either required (it occurs
//! somewhere in the solution) or absent. On top of that, each position bans
//! the played letters that missed there, and a positional hit bans every other
//! letter at that position. Letter multiplicity is not tracked, so a guess
//! with a repeated letter learns nothing extra about how many copies the
//! solution holds.

use crate::alphabet::{LetterMask, ALL_LETTERS};
use crate::word::EncodedWord;
use crate::WORD_LENGTH;

/// What a player knows after a guess against one solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constraint {
    required: LetterMask,
    absent: LetterMask,
    banned: [LetterMask; WORD_LENGTH],
}

impl Constraint {
    /// Computes the feedback `guess` receives when `solution` is the answer.
    ///
    /// `guess` may be an aggregate of several guesses, in which case their
    /// information is merged.
    pub fn compute(guess: &EncodedWord, solution: &EncodedWord) -> Self {
        let played = guess.presence();
        let required = played & solution.presence();
        let absent = played & !solution.presence();

        let mut banned = [absent; WORD_LENGTH];
        for ((bans, &guessed), &actual) in banned
            .iter_mut()
            .zip(guess.positions())
            .zip(solution.positions())
        {
            *bans |= guessed & !actual;
            let hit = guessed & actual;
            // Branchless: `!hit` when there is a hit, zero otherwise.
            *bans |= (!hit & ALL_LETTERS) * LetterMask::from(hit != 0);
        }

        Self {
            required,
            absent,
            banned,
        }
    }

    /// Letters that must occur somewhere in a consistent word.
    pub fn required(&self) -> LetterMask {
        self.required
    }

    /// Letters that must not occur anywhere in a consistent word.
    pub fn absent(&self) -> LetterMask {
        self.absent
    }

    /// Letters that must not occur at each position.
    pub fn banned(&self) -> &[LetterMask; WORD_LENGTH] {
        &self.banned
    }

    /// Returns `true` if a word with these codes could still be the answer.
    #[inline]
    pub fn is_satisfied_by(&self, positions: &[LetterMask; WORD_LENGTH], presence: LetterMask) -> bool {
        let mut conflicts = 0;
        for (code, bans) in positions.iter().zip(&self.banned) {
            conflicts |= code & bans;
        }
        conflicts == 0 && presence & self.required == self.required
    }
}
