//! Sub-word derivation
//!
//! A sub-word is a dictionary word strictly shorter than a seed word that
//! can be spelled using no more of each letter than the seed contains.

use super::{WordEngine, is_letters, normalize};
use crate::dictionary::DictionaryEntry;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

impl<'a> WordEngine<'a> {
    /// All dictionary words hidden inside `word`, in load order
    ///
    /// A candidate qualifies when its length lies in
    /// `[min_length, len(word) - 1]` and its letter-frequency multiset is
    /// dominated, letter by letter, by the seed's.
    ///
    /// Returns an empty result when the seed is blank or contains a
    /// non-letter character, when `min_length` is zero, or when `min_length`
    /// is not strictly below the seed's length.
    #[must_use]
    pub fn sub_words(&self, word: &str, min_length: usize) -> Vec<&'a str> {
        let seed = normalize(word);
        if !is_letters(&seed) {
            return Vec::new();
        }
        let seed_len = seed.chars().count();
        if min_length == 0 || min_length >= seed_len {
            return Vec::new();
        }

        let seed_freq = letter_frequency(&seed);

        self.index()
            .all()
            .par_iter()
            .filter(|e| e.length() >= min_length && e.length() < seed_len)
            .filter(|e| is_dominated(&letter_frequency(e.value()), &seed_freq))
            .map(DictionaryEntry::value)
            .collect()
    }
}

/// Letter occurrence counts for an already-normalized string
fn letter_frequency(word: &str) -> FxHashMap<char, u32> {
    let mut freq = FxHashMap::default();
    for c in word.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Whether every letter count in `candidate` is covered by `available`
fn is_dominated(candidate: &FxHashMap<char, u32>, available: &FxHashMap<char, u32>) -> bool {
    candidate
        .iter()
        .all(|(c, &count)| available.get(c).copied().unwrap_or(0) >= count)
}
