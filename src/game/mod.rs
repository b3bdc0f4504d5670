//! Game state machine
//!
//! Owns one puzzle instance: the chosen word, its current scramble, and the
//! guessed/unguessed status of every discoverable sub-word. A game is
//! `Active` until every sub-word is guessed, then `Complete`; there is no
//! other state.

use crate::engine::{WordEngine, shuffle_letters};
use std::collections::BTreeMap;
use std::fmt;

/// Error type for malformed game-creation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A creation parameter is out of range
    InvalidParameter(String),
    /// No dictionary entry satisfies the requested word length
    NoWordAvailable(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::NoWordAvailable(length) => {
                write!(f, "no dictionary word of length {length} available")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Outcome of a single guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A new sub-word was guessed
    Correct,
    /// Wrong, blank, or already-guessed word
    Incorrect,
    /// The guess completed the puzzle
    AllGuessed,
}

/// One active puzzle: chosen word, current scramble, sub-word progress
///
/// Sub-word keys are held in a `BTreeMap`, so enumeration is always
/// lexicographic. A guessed flag flips from false to true exactly once.
#[derive(Debug, Clone)]
pub struct GameState {
    original: String,
    scramble: String,
    sub_words: BTreeMap<String, bool>,
}

/// Create a new puzzle from a random word of exactly `word_length`
///
/// # Errors
///
/// Returns [`GameError::InvalidParameter`] when `word_length < 3`,
/// `min_sub_length == 0`, or `min_sub_length > word_length`, and
/// [`GameError::NoWordAvailable`] when the dictionary has no word of the
/// requested length.
///
/// A puzzle whose word hides no sub-words at all is legal; it simply can
/// never transition to complete by guessing.
pub fn new_game(
    engine: &WordEngine<'_>,
    word_length: usize,
    min_sub_length: usize,
) -> Result<GameState, GameError> {
    if word_length < 3 {
        return Err(GameError::InvalidParameter(format!(
            "word length {word_length}, expected at least 3"
        )));
    }
    if min_sub_length == 0 {
        return Err(GameError::InvalidParameter(
            "minimum sub-word length must be positive".to_string(),
        ));
    }
    if min_sub_length > word_length {
        return Err(GameError::InvalidParameter(format!(
            "minimum sub-word length {min_sub_length} exceeds word length {word_length}"
        )));
    }

    let original = engine
        .random_word(Some(word_length))
        .ok_or(GameError::NoWordAvailable(word_length))?
        .to_string();
    let scramble = shuffle_letters(&original);
    let sub_words = engine
        .sub_words(&original, min_sub_length)
        .into_iter()
        .map(|w| (w.to_string(), false))
        .collect();

    Ok(GameState {
        original,
        scramble,
        sub_words,
    })
}

impl GameState {
    /// The word this puzzle was built from
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current display scramble of the original word
    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// Submit one guess and update progress
    ///
    /// The candidate is trimmed; no other normalization happens, so casing
    /// must already match the dictionary's lower-case form. Blank, unknown,
    /// and repeated words are ordinary incorrect outcomes, never errors.
    ///
    /// Every call replaces the display scramble with a fresh permutation of
    /// the original word, whatever the outcome. The sub-word set itself is
    /// never affected by rescrambling.
    pub fn guess(&mut self, candidate: &str) -> GuessOutcome {
        self.scramble = shuffle_letters(&self.original);

        let candidate = candidate.trim();
        if candidate.is_empty() {
            return GuessOutcome::Incorrect;
        }

        match self.sub_words.get_mut(candidate) {
            Some(guessed) if !*guessed => {
                *guessed = true;
                if self.remaining_words() == 0 {
                    GuessOutcome::AllGuessed
                } else {
                    GuessOutcome::Correct
                }
            }
            // Unknown word, or credit already granted for this one
            _ => GuessOutcome::Incorrect,
        }
    }

    /// Total number of discoverable sub-words
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.sub_words.len()
    }

    /// Number of sub-words guessed so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.sub_words.values().filter(|&&guessed| guessed).count()
    }

    /// Number of sub-words still to find
    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.total_words() - self.guessed_count()
    }

    /// Guessed sub-words only, in lexicographic order
    #[must_use]
    pub fn guessed_words(&self) -> Vec<String> {
        self.sub_words
            .iter()
            .filter(|&(_, &guessed)| guessed)
            .map(|(word, _)| word.clone())
            .collect()
    }

    /// Every sub-word with its guessed flag, in lexicographic order
    pub fn sub_words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sub_words
            .iter()
            .map(|(word, &guessed)| (word.as_str(), guessed))
    }

    /// Whether every sub-word has been guessed
    ///
    /// A puzzle with zero sub-words never reports complete; it has nothing
    /// to guess and never transitions.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.sub_words.is_empty() && self.sub_words.values().all(|&guessed| guessed)
    }
}
