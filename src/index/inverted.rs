//! In-memory inverted index.
//!
//! The index cross-references two owned maps by value-type keys: posting
//! lists (`term -> {doc_id -> tf}`) and per-document records
//! (`doc_id -> DocumentEntry`). After every public operation, each document
//! id in a posting list has a record, each record's term frequency equals
//! the posting entry for that term, and the term frequencies of a document
//! with at least one word sum to 1.
//!
//! All maps are B-trees so iteration is deterministic: ids ascend, terms
//! are lexicographic. The index itself performs no validation; the engine
//! facade owns the only mutation path and validates before calling in.

use std::collections::{BTreeMap, BTreeSet};

use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::document::{DocumentId, DocumentStatus};

/// Per-document record kept alongside the posting lists.
#[derive(Clone, Debug)]
pub struct DocumentEntry {
    /// Average rating, truncated toward zero; 0 for an empty rating vector.
    pub rating: i32,
    /// Moderation status.
    pub status: DocumentStatus,
    /// Term -> relative frequency within this document.
    pub term_frequencies: BTreeMap<String, f64>,
    /// The tokenized, stop-filtered word sequence, order and duplicates
    /// preserved. Scanned by the parallel matcher.
    pub content: Vec<String>,
}

/// Inverted posting lists plus the document records they reference.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeMap<DocumentId, f64>>,
    documents: BTreeMap<DocumentId, DocumentEntry>,
    document_ids: BTreeSet<DocumentId>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Index `words` under `id`.
    ///
    /// Each occurrence contributes `1 / words.len()` to the term's posting
    /// entry and to the document's own frequency map, so frequencies sum to
    /// one. The caller guarantees the id is fresh.
    pub fn insert_document(
        &mut self,
        id: DocumentId,
        words: &[&str],
        status: DocumentStatus,
        rating: i32,
    ) {
        let tf_unit = 1.0 / words.len() as f64;
        let mut term_frequencies = BTreeMap::new();
        for &word in words {
            *self
                .postings
                .entry(word.to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += tf_unit;
            *term_frequencies.entry(word.to_string()).or_insert(0.0) += tf_unit;
        }
        self.documents.insert(
            id,
            DocumentEntry {
                rating,
                status,
                term_frequencies,
                content: words.iter().map(|word| word.to_string()).collect(),
            },
        );
        self.document_ids.insert(id);
    }

    /// Remove `id` from every posting list it appears in and drop its
    /// record. Returns `false` if the id was not indexed.
    ///
    /// Emptied posting lists are retained; lookups skip them.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let Some(entry) = self.documents.get(&id) else {
            return false;
        };
        for term in entry.term_frequencies.keys() {
            if let Some(posting) = self.postings.get_mut(term) {
                posting.remove(&id);
            }
        }
        self.documents.remove(&id);
        self.document_ids.remove(&id);
        true
    }

    /// Parallel variant of [`remove_document`](Self::remove_document).
    ///
    /// Fans the per-term erasures out across threads. Distinct terms touch
    /// distinct posting lists and the outer map is never resized, so the
    /// erasures need no synchronization beyond the `&mut self` borrow.
    pub fn remove_document_parallel(&mut self, id: DocumentId) -> bool {
        let Some(entry) = self.documents.get(&id) else {
            return false;
        };
        let removed_terms = &entry.term_frequencies;
        self.postings
            .iter_mut()
            .filter(|(term, _)| removed_terms.contains_key(*term))
            .par_bridge()
            .for_each(|(_, posting)| {
                posting.remove(&id);
            });
        self.documents.remove(&id);
        self.document_ids.remove(&id);
        true
    }

    /// The posting list for `term`, if the term was ever indexed.
    pub fn postings(&self, term: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.postings.get(term)
    }

    /// Whether `term`'s posting list currently contains `id`.
    pub fn contains(&self, term: &str, id: DocumentId) -> bool {
        self.postings
            .get(term)
            .is_some_and(|posting| posting.contains_key(&id))
    }

    /// The record for `id`.
    pub fn document(&self, id: DocumentId) -> Option<&DocumentEntry> {
        self.documents.get(&id)
    }

    /// All document records, ascending by id.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &DocumentEntry)> + '_ {
        self.documents.iter().map(|(&id, entry)| (id, entry))
    }

    /// Natural log of `document count / posting list length`.
    ///
    /// The posting list must be non-empty; the ranker skips emptied lists.
    pub fn inverse_document_frequency(&self, posting: &BTreeMap<DocumentId, f64>) -> f64 {
        (self.documents.len() as f64 / posting.len() as f64).ln()
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents are indexed.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Whether `id` is indexed.
    pub fn contains_id(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Iterate over document ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.document_ids.iter().copied()
    }

    pub(crate) fn id_set(&self) -> &BTreeSet<DocumentId> {
        &self.document_ids
    }

    /// The id at `index` in ascending id order, if any.
    pub fn id_at(&self, index: usize) -> Option<DocumentId> {
        self.document_ids.iter().nth(index).copied()
    }

    /// Summarize the posting lists.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            document_count: self.documents.len(),
            term_count: self.postings.len(),
            total_postings: self.postings.values().map(BTreeMap::len).sum(),
            max_posting_len: self.postings.values().map(BTreeMap::len).max().unwrap_or(0),
        }
    }
}

/// Statistics about the posting lists of an [`InvertedIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of indexed documents.
    pub document_count: usize,
    /// Number of distinct terms, emptied posting lists included.
    pub term_count: usize,
    /// Total number of `(term, document)` posting entries.
    pub total_postings: usize,
    /// Length of the largest posting list.
    pub max_posting_len: usize,
}
