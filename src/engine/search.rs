//! Prefix and criteria search

use super::{WordEngine, is_letters, normalize};
use crate::dictionary::DictionaryEntry;

impl<'a> WordEngine<'a> {
    /// All dictionary words beginning with `prefix`, in load order
    ///
    /// Matching is case insensitive. A blank prefix or one containing a
    /// non-letter character yields an empty result.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&'a str> {
        let normalized = normalize(prefix);
        if !is_letters(&normalized) {
            return Vec::new();
        }
        self.index()
            .all()
            .iter()
            .filter(|e| e.value().starts_with(&normalized))
            .map(DictionaryEntry::value)
            .collect()
    }

    /// Search words by first character, last character, and/or length
    ///
    /// A character filter is valid when it is a letter; the length filter
    /// when it is at least one. At least one filter must be valid, else the
    /// result is empty. Valid filters compose as a conjunction, applied in
    /// the order first-char, last-char, length.
    #[must_use]
    pub fn search(
        &self,
        start_char: Option<char>,
        end_char: Option<char>,
        length: Option<usize>,
    ) -> Vec<&'a str> {
        let start = start_char
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase());
        let end = end_char
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase());
        let length = length.filter(|&n| n >= 1);

        if start.is_none() && end.is_none() && length.is_none() {
            return Vec::new();
        }

        self.index()
            .all()
            .iter()
            .filter(|e| start.is_none_or(|c| e.first_char() == c))
            .filter(|e| end.is_none_or(|c| e.last_char() == c))
            .filter(|e| length.is_none_or(|n| e.length() == n))
            .map(DictionaryEntry::value)
            .collect()
    }
}
