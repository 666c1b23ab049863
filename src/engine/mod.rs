//! The search engine facade.
//!
//! [`SearchEngine`] owns the stop-word set and the inverted index and is
//! the only mutation path into them. Queries come in three flavors: the
//! default (status `Actual`), by explicit status, and by arbitrary
//! predicate; each has a sequential and a parallel entry point with
//! identical semantics.
//!
//! The engine permits at most one writer at a time, which `&mut self` on
//! every mutating method enforces at compile time. Parallel read paths fan
//! out internally and need no external synchronization as long as no
//! writer runs.

#[allow(clippy::module_inception)]
mod engine;
mod matcher;
mod ranker;

pub use engine::SearchEngine;
pub use ranker::compare_hits;

/// Upper bound on the number of hits a query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Scores closer than this are treated as tied and broken by rating.
pub const EPSILON: f64 = 1e-6;
