//! Stop-word set implementation.

use ahash::AHashSet;

use crate::analysis::tokenizer::{is_valid_word, split_words};
use crate::error::{Result, ShrikeError};

/// The set of words excluded from indexing and query parsing.
///
/// Stop words are validated on insertion: a word containing control
/// characters is rejected with
/// [`InvalidText`](crate::error::ShrikeError::InvalidText). Membership is
/// checked against the raw token, so `-cat` and `cat` are distinct entries.
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Create an empty stop-word set.
    pub fn new() -> Self {
        StopWordSet {
            words: AHashSet::new(),
        }
    }

    /// Build a stop-word set from a space-separated string.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut set = StopWordSet::new();
        set.insert_from_text(text)?;
        Ok(set)
    }

    /// Build a stop-word set from a collection of words.
    ///
    /// Empty elements are skipped; every other element is validated.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = StopWordSet::new();
        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(&word) {
                return Err(ShrikeError::invalid_text(word));
            }
            set.words.insert(word);
        }
        Ok(set)
    }

    /// Split `text` on spaces and add every word to the set.
    ///
    /// Words already present are kept; the set only grows.
    pub fn insert_from_text(&mut self, text: &str) -> Result<()> {
        for word in split_words(text) {
            if !is_valid_word(word) {
                return Err(ShrikeError::invalid_text(word));
            }
            self.words.insert(word.to_string());
        }
        Ok(())
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop-word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
