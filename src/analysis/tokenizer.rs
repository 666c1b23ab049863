//! Word splitting, validation, and plus/minus/stop classification.
//!
//! Splitting is on the ASCII space character only; runs of spaces are
//! discarded. The borrowed [`split_words`] path returns slices of the input
//! buffer and is the single parsing path for queries and documents;
//! [`split_words_owned`] exists for callers whose input does not outlive
//! the result.

use crate::analysis::stop_words::StopWordSet;
use crate::error::{Result, ShrikeError};

/// How a word participates in a query or document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    /// A term that must be scored.
    Plus,
    /// A `-`-prefixed term that excludes documents.
    Minus,
    /// A member of the current stop-word set; dropped.
    Stop,
}

/// A classified word borrowed from the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedWord<'a> {
    /// The word exactly as it appeared in the input.
    pub raw: &'a str,
    /// Classification under the current stop-word set.
    pub kind: WordKind,
}

impl<'a> ParsedWord<'a> {
    /// The searchable term: the raw word, with the leading `-` stripped for
    /// minus words.
    pub fn term(&self) -> &'a str {
        match self.kind {
            WordKind::Minus => &self.raw[1..],
            _ => self.raw,
        }
    }
}

/// Split `text` on spaces into borrowed words, discarding empty runs.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Split `text` on spaces into owned words, discarding empty runs.
pub fn split_words_owned(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// A valid word contains no control characters (bytes `0x00..0x1F`).
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|byte| byte < 0x20)
}

/// Split `text` and classify every word against `stop_words`.
///
/// Classification order: a word starting with `-` is a minus candidate (a
/// bare `-` or a `--` prefix fails with
/// [`InvalidMinus`](ShrikeError::InvalidMinus)), then stop-word membership
/// is checked on the raw word, everything else is a plus word. Control
/// characters anywhere fail with [`InvalidText`](ShrikeError::InvalidText).
pub fn parse_words<'a>(text: &'a str, stop_words: &StopWordSet) -> Result<Vec<ParsedWord<'a>>> {
    let mut words = Vec::new();
    for raw in split_words(text) {
        if !is_valid_word(raw) {
            return Err(ShrikeError::invalid_text(raw));
        }
        let kind = if raw.as_bytes()[0] == b'-' {
            if raw.len() == 1 || raw.as_bytes()[1] == b'-' {
                return Err(ShrikeError::invalid_minus(raw));
            }
            WordKind::Minus
        } else if stop_words.contains(raw) {
            WordKind::Stop
        } else {
            WordKind::Plus
        };
        words.push(ParsedWord { raw, kind });
    }
    Ok(words)
}

/// Split `text`, dropping stop words, keeping the remaining raw words in
/// order with duplicates preserved.
pub fn split_words_no_stop<'a>(text: &'a str, stop_words: &StopWordSet) -> Result<Vec<&'a str>> {
    Ok(parse_words(text, stop_words)?
        .into_iter()
        .filter(|word| word.kind != WordKind::Stop)
        .map(|word| word.raw)
        .collect())
}
