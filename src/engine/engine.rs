//! Engine construction and index maintenance.

use std::collections::{btree_set, BTreeMap};
use std::iter::Copied;

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::split_words_no_stop;
use crate::document::{DocumentId, DocumentStatus};
use crate::error::{Result, ShrikeError};
use crate::index::inverted::InvertedIndex;

/// An in-memory full-text search engine.
///
/// Documents are added with an id, a status, and a rating vector, then
/// queried with free text whose results are ranked by TF-IDF relevance.
/// Stop words set at construction (or later via
/// [`set_stop_words`](Self::set_stop_words)) are excluded from indexing and
/// query parsing; changing them never rewrites documents that are already
/// indexed.
///
/// # Examples
///
/// ```
/// use shrike::document::DocumentStatus;
/// use shrike::engine::SearchEngine;
///
/// let mut engine = SearchEngine::from_stop_words_text("and the")?;
/// engine.add_document(0, "the fluffy cat", DocumentStatus::Actual, &[5, 3])?;
/// let hits = engine.find_top_documents("fluffy")?;
/// assert_eq!(hits[0].doc_id, 0);
/// # Ok::<(), shrike::error::ShrikeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Create an engine with no stop words.
    pub fn new() -> Self {
        SearchEngine::default()
    }

    /// Create an engine with stop words parsed from a space-separated
    /// string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(SearchEngine {
            stop_words: StopWordSet::from_text(text)?,
            index: InvertedIndex::new(),
        })
    }

    /// Create an engine with stop words taken from a collection, one word
    /// per element. Empty elements are skipped.
    pub fn from_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(SearchEngine {
            stop_words: StopWordSet::from_words(words)?,
            index: InvertedIndex::new(),
        })
    }

    /// Add the words of `text` to the stop-word set.
    ///
    /// The set only grows; existing stop words stay. Documents indexed
    /// before the call keep their postings.
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        self.stop_words.insert_from_text(text)
    }

    /// The current stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Index a document.
    ///
    /// The rating recorded for the document is the truncated mean of
    /// `ratings` (0 when empty). Fails with
    /// [`NegativeId`](ShrikeError::NegativeId),
    /// [`DuplicateId`](ShrikeError::DuplicateId), or a tokenizer error; on
    /// failure the engine is unchanged.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(ShrikeError::NegativeId(id));
        }
        if self.index.contains_id(id) {
            return Err(ShrikeError::DuplicateId(id));
        }
        let words = split_words_no_stop(text, &self.stop_words)?;
        self.index
            .insert_document(id, &words, status, compute_average_rating(ratings));
        Ok(())
    }

    /// Remove a document from the index.
    ///
    /// An unknown id logs a warning and returns.
    pub fn remove_document(&mut self, id: DocumentId) {
        if !self.index.remove_document(id) {
            log::warn!("remove_document: no document with id {id}");
        }
    }

    /// Remove a document, distributing the posting-list erasures across
    /// threads. Semantics are identical to
    /// [`remove_document`](Self::remove_document).
    pub fn remove_document_parallel(&mut self, id: DocumentId) {
        if !self.index.remove_document_parallel(id) {
            log::warn!("remove_document: no document with id {id}");
        }
    }

    /// The term frequencies of one document.
    ///
    /// Fails with [`UnknownId`](ShrikeError::UnknownId).
    pub fn word_frequencies(&self, id: DocumentId) -> Result<&BTreeMap<String, f64>> {
        match self.index.document(id) {
            Some(entry) => Ok(&entry.term_frequencies),
            None => {
                log::warn!("word_frequencies: no document with id {id}");
                Err(ShrikeError::UnknownId(id))
            }
        }
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Iterate over document ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.ids()
    }

    /// The document id at `index` in ascending id order.
    ///
    /// Positional lookup kept for callers that page through ids; fails with
    /// [`OutOfRange`](ShrikeError::OutOfRange).
    pub fn document_id_at(&self, index: usize) -> Result<DocumentId> {
        self.index
            .id_at(index)
            .ok_or(ShrikeError::OutOfRange(index))
    }

    /// Posting-list statistics for the current index contents.
    pub fn stats(&self) -> crate::index::IndexStats {
        self.index.stats()
    }

    pub(crate) fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocumentId;
    type IntoIter = Copied<btree_set::Iter<'a, DocumentId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.id_set().iter().copied()
    }
}

/// Mean of `ratings`, truncated toward zero; 0 for an empty vector.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    ratings.iter().sum::<i32>() / ratings.len() as i32
}
