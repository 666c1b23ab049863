//! Per-document query matching.

use rayon::prelude::*;

use crate::document::{DocumentId, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::{Result, ShrikeError};
use crate::query::Query;

impl SearchEngine {
    /// The plus terms of `raw_query` present in document `id`, with the
    /// document's status.
    ///
    /// Returns an empty term list when any minus term matches the
    /// document. The matched terms are slices of `raw_query`, sorted and
    /// deduplicated. Fails with a tokenizer error or with
    /// [`UnknownId`](ShrikeError::UnknownId).
    pub fn match_document<'q>(
        &self,
        raw_query: &'q str,
        id: DocumentId,
    ) -> Result<(Vec<&'q str>, DocumentStatus)> {
        let query = Query::parse(raw_query, self.stop_words())?;
        let index = self.index();
        let entry = index.document(id).ok_or(ShrikeError::UnknownId(id))?;

        let contains_minus = query
            .minus_words
            .iter()
            .any(|&minus_word| index.contains(minus_word, id));
        if contains_minus {
            return Ok((Vec::new(), entry.status));
        }

        let matched = query
            .plus_words
            .iter()
            .copied()
            .filter(|&plus_word| index.contains(plus_word, id))
            .collect();
        Ok((matched, entry.status))
    }

    /// Parallel counterpart of [`match_document`](Self::match_document).
    ///
    /// Scans the document's stored word sequence instead of the posting
    /// lists, checking the query terms in parallel. An unknown id yields an
    /// empty term list with status [`DocumentStatus::Removed`] instead of
    /// an error.
    pub fn match_document_parallel<'q>(
        &self,
        raw_query: &'q str,
        id: DocumentId,
    ) -> Result<(Vec<&'q str>, DocumentStatus)> {
        let query = Query::parse_unsorted(raw_query, self.stop_words())?;
        let Some(entry) = self.index().document(id) else {
            return Ok((Vec::new(), DocumentStatus::Removed));
        };
        let content = &entry.content;

        let contains_minus = query
            .minus_words
            .par_iter()
            .any(|&minus_word| content.iter().any(|word| word.as_str() == minus_word));
        if contains_minus {
            return Ok((Vec::new(), entry.status));
        }

        let mut matched: Vec<&str> = query
            .plus_words
            .par_iter()
            .copied()
            .filter(|&plus_word| content.iter().any(|word| word.as_str() == plus_word))
            .collect();
        matched.par_sort_unstable();
        matched.dedup();
        Ok((matched, entry.status))
    }
}
