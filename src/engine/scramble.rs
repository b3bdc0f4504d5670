//! Letter scrambling
//!
//! Produces a uniformly drawn permutation of a word's letters that differs
//! from the word itself, with a documented fallback for words that have no
//! distinct permutation.

use super::{WordEngine, WordNotFoundError, normalize};
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

impl WordEngine<'_> {
    /// Scramble a dictionary word's letters into a different ordering
    ///
    /// The input is normalized (trimmed, lower-cased) first. Words of length
    /// one or less are returned unchanged, without a dictionary lookup.
    ///
    /// Words whose letters are all identical (e.g. "aaa") cannot satisfy the
    /// "differs from input" contract; they are returned unchanged. For every
    /// other word the retry loop terminates, since a reshuffle differs from
    /// the input with probability at least 1/2.
    ///
    /// # Errors
    ///
    /// Returns [`WordNotFoundError`] when the normalized word is absent from
    /// the dictionary.
    pub fn scramble(&self, word: &str) -> Result<String, WordNotFoundError> {
        let normalized = normalize(word);
        if normalized.chars().count() <= 1 {
            return Ok(normalized);
        }
        if !self.index().contains(&normalized) {
            return Err(WordNotFoundError {
                word: word.trim().to_string(),
            });
        }
        Ok(shuffle_letters(&normalized))
    }
}

/// Reshuffle `word`'s letters until the result differs from `word`
///
/// Falls back to returning `word` unchanged when its letters admit no
/// distinct ordering (fewer than two distinct letters).
pub(crate) fn shuffle_letters(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    let distinct: FxHashSet<char> = letters.iter().copied().collect();
    if distinct.len() < 2 {
        return word.to_string();
    }

    let mut rng = rand::rng();
    loop {
        letters.shuffle(&mut rng);
        let shuffled: String = letters.iter().collect();
        if shuffled != word {
            return shuffled;
        }
    }
}
