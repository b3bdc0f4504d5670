//! Word engine
//!
//! Stateless query operations over a [`DictionaryIndex`]: existence and
//! range search, prefix matching, palindrome retrieval, random selection,
//! scrambling, and sub-word derivation.
//!
//! Every operation normalizes its input (trim, lower-case). Input containing
//! a non-letter character yields the operation's empty/"not found" result
//! rather than an error; only [`WordEngine::scramble`] can fail.

mod scramble;
mod search;
mod subwords;

pub(crate) use scramble::shuffle_letters;

use crate::dictionary::{DictionaryEntry, DictionaryIndex};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Error type for a scramble request on a word absent from the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNotFoundError {
    pub word: String,
}

impl fmt::Display for WordNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word not found in dictionary: {}", self.word)
    }
}

impl std::error::Error for WordNotFoundError {}

/// Trim and lower-case an input word for case-insensitive comparison
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether a normalized string is non-empty and letters only
pub(crate) fn is_letters(input: &str) -> bool {
    !input.is_empty() && input.chars().all(char::is_alphabetic)
}

/// Stateless word operations over a shared dictionary index
pub struct WordEngine<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> WordEngine<'a> {
    /// Create an engine over the given index
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// The backing dictionary index
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Check whether `word` exists in the dictionary
    ///
    /// Matching is case insensitive. Blank input or input containing a
    /// non-letter character is never considered present.
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        let normalized = normalize(word);
        if !is_letters(&normalized) {
            return false;
        }
        self.index.contains(&normalized)
    }

    /// Pick one word uniformly at random
    ///
    /// When `length` is given, draws among entries of exactly that length.
    /// Returns `None` when no entry matches.
    #[must_use]
    pub fn random_word(&self, length: Option<usize>) -> Option<&'a str> {
        let mut rng = rand::rng();
        match length {
            Some(n) => {
                let candidates: Vec<&DictionaryEntry> = self.index.by_length(n).collect();
                candidates.choose(&mut rng).copied().map(DictionaryEntry::value)
            }
            None => self.index.all().choose(&mut rng).map(DictionaryEntry::value),
        }
    }

    /// All palindrome words, in dictionary load order
    ///
    /// Single-letter words are not valid palindromes.
    #[must_use]
    pub fn palindromes(&self) -> Vec<&'a str> {
        self.index.palindromes().map(DictionaryEntry::value).collect()
    }
}
