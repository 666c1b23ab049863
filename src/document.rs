//! Document value types shared across the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an indexed document.
///
/// Ids are non-negative by contract; [`crate::engine::SearchEngine::add_document`]
/// rejects negative values with [`crate::error::ShrikeError::NegativeId`].
pub type DocumentId = i64;

/// Moderation status of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live document, the default search target.
    Actual,
    /// Indexed but no longer relevant.
    Irrelevant,
    /// Hidden by moderation.
    Banned,
    /// Deleted.
    Removed,
}

/// A single ranked search result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document ID.
    pub doc_id: DocumentId,
    /// TF-IDF relevance score.
    pub score: f64,
    /// Average document rating, truncated toward zero.
    pub rating: i32,
}

impl SearchHit {
    /// Create a new search hit.
    pub fn new(doc_id: DocumentId, score: f64, rating: i32) -> Self {
        SearchHit {
            doc_id,
            score,
            rating,
        }
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.doc_id, self.score, self.rating
        )
    }
}
