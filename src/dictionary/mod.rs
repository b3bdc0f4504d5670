//! Dictionary index
//!
//! Owns every [`DictionaryEntry`] in load order plus eager lookup structures
//! for exact-match and by-length queries. Built once at start-up and
//! read-only afterwards, so it is safe to share across any number of
//! concurrent readers.

pub mod entry;
pub mod loader;

pub use entry::DictionaryEntry;
pub use loader::LoadError;

use rustc_hash::{FxHashMap, FxHashSet};

/// Read-only index over a loaded word list
#[derive(Debug)]
pub struct DictionaryIndex {
    entries: Vec<DictionaryEntry>,
    values: FxHashSet<String>,
    lengths: FxHashMap<usize, Vec<usize>>,
}

impl DictionaryIndex {
    /// Build the index and its lookup structures from loaded entries
    pub(crate) fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut values = FxHashSet::default();
        let mut lengths: FxHashMap<usize, Vec<usize>> = FxHashMap::default();

        for (i, entry) in entries.iter().enumerate() {
            values.insert(entry.value().to_string());
            lengths.entry(entry.length()).or_default().push(i);
        }

        Self {
            entries,
            values,
            lengths,
        }
    }

    /// All entries in load order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Number of entries in the index
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    ///
    /// Never true for an index produced by [`loader::from_lines`], which
    /// rejects empty sources.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of exactly the given length, in load order
    pub fn by_length(&self, length: usize) -> impl Iterator<Item = &DictionaryEntry> {
        self.lengths
            .get(&length)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// Exact membership test
    ///
    /// The caller must pre-normalize `word` (trimmed, lower-cased); no
    /// normalization happens here.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.values.contains(word)
    }

    /// Entries whose value reads identically reversed, in load order
    pub fn palindromes(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter().filter(|e| e.is_palindrome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DictionaryIndex {
        loader::from_lines(["yellow", "low", "owl", "eye", "deed", "yell"]).unwrap()
    }

    #[test]
    fn all_returns_load_order() {
        let index = fixture();
        let values: Vec<&str> = index.all().iter().map(DictionaryEntry::value).collect();
        assert_eq!(values, ["yellow", "low", "owl", "eye", "deed", "yell"]);
    }

    #[test]
    fn by_length_buckets() {
        let index = fixture();
        let three: Vec<&str> = index.by_length(3).map(DictionaryEntry::value).collect();
        assert_eq!(three, ["low", "owl", "eye"]);

        let six: Vec<&str> = index.by_length(6).map(DictionaryEntry::value).collect();
        assert_eq!(six, ["yellow"]);
    }

    #[test]
    fn by_length_no_match_is_empty() {
        let index = fixture();
        assert_eq!(index.by_length(12).count(), 0);
    }

    #[test]
    fn contains_is_exact() {
        let index = fixture();
        assert!(index.contains("yellow"));
        assert!(!index.contains("Yellow")); // caller normalizes
        assert!(!index.contains("yellows"));
        assert!(!index.contains(""));
    }

    #[test]
    fn palindromes_filtered() {
        let index = fixture();
        let pals: Vec<&str> = index.palindromes().map(DictionaryEntry::value).collect();
        assert_eq!(pals, ["eye", "deed"]);
    }

    #[test]
    fn len_counts_entries() {
        let index = fixture();
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
    }
}
