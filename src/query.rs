//! Parsed query representation.

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::{parse_words, WordKind};
use crate::error::Result;

/// A query split into plus and minus terms, borrowing the raw query text.
///
/// Minus terms are stored with the leading `-` stripped. [`Query::parse`]
/// sorts and deduplicates both term lists; [`Query::parse_unsorted`] keeps
/// them in input order for consumers that do their own post-processing,
/// such as the parallel matcher.
///
/// # Examples
///
/// ```
/// use shrike::analysis::StopWordSet;
/// use shrike::query::Query;
///
/// let stop_words = StopWordSet::from_text("the")?;
/// let query = Query::parse("fluffy the cat -collar", &stop_words)?;
/// assert_eq!(query.plus_words, vec!["cat", "fluffy"]);
/// assert_eq!(query.minus_words, vec!["collar"]);
/// # Ok::<(), shrike::error::ShrikeError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Terms that contribute to the relevance score.
    pub plus_words: Vec<&'a str>,
    /// Terms whose presence excludes a document.
    pub minus_words: Vec<&'a str>,
}

impl<'a> Query<'a> {
    /// Parse `text` into sorted, deduplicated plus and minus terms.
    pub fn parse(text: &'a str, stop_words: &StopWordSet) -> Result<Self> {
        let mut query = Self::parse_unsorted(text, stop_words)?;
        query.plus_words.sort_unstable();
        query.plus_words.dedup();
        query.minus_words.sort_unstable();
        query.minus_words.dedup();
        Ok(query)
    }

    /// Parse `text` without the sort and deduplication step.
    pub fn parse_unsorted(text: &'a str, stop_words: &StopWordSet) -> Result<Self> {
        let mut query = Query::default();
        for word in parse_words(text, stop_words)? {
            match word.kind {
                WordKind::Plus => query.plus_words.push(word.raw),
                WordKind::Minus => query.minus_words.push(word.term()),
                WordKind::Stop => {}
            }
        }
        Ok(query)
    }

    /// Check whether the query has no plus and no minus terms.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}
