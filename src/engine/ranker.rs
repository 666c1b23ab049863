//! TF-IDF ranking pipeline: scoring, filtering, ordering, truncation.
//!
//! The sequential path accumulates scores in a plain ordered map; the
//! parallel path fans plus- and minus-term iteration out over `rayon` into
//! a sharded [`ConcurrentMap`] and sorts the materialized hits in parallel.
//! Both produce the same ranking.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::document::{DocumentId, DocumentStatus, SearchHit};
use crate::engine::{SearchEngine, EPSILON, MAX_RESULT_DOCUMENT_COUNT};
use crate::error::Result;
use crate::query::Query;
use crate::util::concurrent_map::ConcurrentMap;

/// Ranking order: score descending, with scores within [`EPSILON`] of each
/// other broken by rating descending.
///
/// When the near-tied hits also share a rating, score descending still
/// decides; exact ties keep the accumulator's ascending-id order through
/// the stable sort.
pub fn compare_hits(lhs: &SearchHit, rhs: &SearchHit) -> Ordering {
    if (lhs.score - rhs.score).abs() < EPSILON && lhs.rating != rhs.rating {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.score.total_cmp(&lhs.score)
    }
}

impl SearchEngine {
    /// Top documents for `raw_query` with status `Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents for `raw_query` with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents for `raw_query` passing `predicate`.
    ///
    /// The predicate receives `(id, status, rating)` and filters documents
    /// while plus-term contributions accumulate.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<SearchHit>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query, self.stop_words())?;
        let hits = self.find_all_documents(&query, predicate);
        Ok(rank(hits))
    }

    /// Parallel counterpart of [`find_top_documents`](Self::find_top_documents).
    pub fn find_top_documents_parallel(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.find_top_documents_with_status_parallel(raw_query, DocumentStatus::Actual)
    }

    /// Parallel counterpart of
    /// [`find_top_documents_with_status`](Self::find_top_documents_with_status).
    pub fn find_top_documents_with_status_parallel(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by_parallel(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Parallel counterpart of
    /// [`find_top_documents_by`](Self::find_top_documents_by).
    pub fn find_top_documents_by_parallel<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<SearchHit>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = Query::parse(raw_query, self.stop_words())?;
        let mut hits = self.find_all_documents_parallel(&query, predicate);
        hits.par_sort_by(compare_hits);
        hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(hits)
    }

    fn find_all_documents<P>(&self, query: &Query<'_>, predicate: P) -> Vec<SearchHit>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let index = self.index();
        let mut scores: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for &plus_word in &query.plus_words {
            let Some(posting) = index.postings(plus_word) else {
                continue;
            };
            if posting.is_empty() {
                continue;
            }
            let idf = index.inverse_document_frequency(posting);
            for (&id, &tf) in posting {
                let Some(entry) = index.document(id) else {
                    continue;
                };
                if predicate(id, entry.status, entry.rating) {
                    *scores.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for &minus_word in &query.minus_words {
            if let Some(posting) = index.postings(minus_word) {
                for id in posting.keys() {
                    scores.remove(id);
                }
            }
        }

        self.materialize(scores)
    }

    fn find_all_documents_parallel<P>(&self, query: &Query<'_>, predicate: P) -> Vec<SearchHit>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let index = self.index();
        let scores: ConcurrentMap<f64> = ConcurrentMap::new(num_cpus::get());

        query.plus_words.par_iter().for_each(|&plus_word| {
            let Some(posting) = index.postings(plus_word) else {
                return;
            };
            if posting.is_empty() {
                return;
            }
            let idf = index.inverse_document_frequency(posting);
            for (&id, &tf) in posting {
                let Some(entry) = index.document(id) else {
                    continue;
                };
                if predicate(id, entry.status, entry.rating) {
                    *scores.at(id) += tf * idf;
                }
            }
        });

        query.minus_words.par_iter().for_each(|&minus_word| {
            if let Some(posting) = index.postings(minus_word) {
                for &id in posting.keys() {
                    scores.erase(id);
                }
            }
        });

        self.materialize(scores.drain())
    }

    fn materialize(&self, scores: BTreeMap<DocumentId, f64>) -> Vec<SearchHit> {
        let index = self.index();
        scores
            .into_iter()
            .filter_map(|(id, score)| {
                index
                    .document(id)
                    .map(|entry| SearchHit::new(id, score, entry.rating))
            })
            .collect()
    }
}

fn rank(mut hits: Vec<SearchHit>) -> Vec<SearchHit> {
    hits.sort_by(compare_hits);
    hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
    hits
}
