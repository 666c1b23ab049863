//! Sliding window over recent query results.

use std::collections::VecDeque;

use crate::document::{DocumentId, DocumentStatus, SearchHit};
use crate::engine::SearchEngine;
use crate::error::Result;

/// Number of request slots the queue retains, one per minute of a day.
pub const REQUEST_WINDOW: usize = 1440;

#[derive(Clone, Copy, Debug)]
struct QueryRecord {
    hit_count: usize,
}

/// A fixed-capacity window over the most recent query results.
///
/// Every `add_find_request` variant delegates to the corresponding engine
/// query, records the result cardinality, and returns the hits unchanged.
/// Once [`REQUEST_WINDOW`] slots are filled, each new request evicts the
/// oldest. A query that fails to parse propagates its error and occupies
/// no slot.
///
/// The queue borrows the engine, so the engine must outlive it.
///
/// # Examples
///
/// ```
/// use shrike::document::DocumentStatus;
/// use shrike::engine::SearchEngine;
/// use shrike::request_queue::RequestQueue;
///
/// let mut engine = SearchEngine::new();
/// engine.add_document(1, "curly dog", DocumentStatus::Actual, &[4])?;
///
/// let mut queue = RequestQueue::new(&engine);
/// queue.add_find_request("sparrow")?;
/// queue.add_find_request("curly dog")?;
/// assert_eq!(queue.no_result_requests(), 1);
/// # Ok::<(), shrike::error::ShrikeError>(())
/// ```
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<QueryRecord>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create an empty queue over `engine`.
    pub fn new(engine: &'a SearchEngine) -> Self {
        RequestQueue {
            engine,
            requests: VecDeque::new(),
            no_result_count: 0,
        }
    }

    /// Run a query with status `Actual` and record its result count.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<SearchHit>> {
        let hits = self.engine.find_top_documents(raw_query)?;
        self.record(hits.len());
        Ok(hits)
    }

    /// Run a query with the given status and record its result count.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        let hits = self
            .engine
            .find_top_documents_with_status(raw_query, status)?;
        self.record(hits.len());
        Ok(hits)
    }

    /// Run a query with a custom predicate and record its result count.
    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<SearchHit>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let hits = self.engine.find_top_documents_by(raw_query, predicate)?;
        self.record(hits.len());
        Ok(hits)
    }

    /// Number of retained requests that produced no results.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    /// Number of retained requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check whether no requests are retained.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, hit_count: usize) {
        self.requests.push_back(QueryRecord { hit_count });
        if hit_count == 0 {
            self.no_result_count += 1;
        }
        if self.requests.len() > REQUEST_WINDOW {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.hit_count == 0 {
                    self.no_result_count -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_dog() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine
            .add_document(1, "curly dog", DocumentStatus::Actual, &[4])
            .unwrap();
        engine
    }

    #[test]
    fn test_counts_empty_results() {
        let engine = engine_with_dog();
        let mut queue = RequestQueue::new(&engine);
        assert!(queue.add_find_request("sparrow").unwrap().is_empty());
        assert_eq!(queue.add_find_request("dog").unwrap().len(), 1);
        assert_eq!(queue.no_result_requests(), 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_parse_error_occupies_no_slot() {
        let engine = engine_with_dog();
        let mut queue = RequestQueue::new(&engine);
        assert!(queue.add_find_request("--dog").is_err());
        assert!(queue.is_empty());
        assert_eq!(queue.no_result_requests(), 0);
    }

    #[test]
    fn test_window_slides() {
        let engine = engine_with_dog();
        let mut queue = RequestQueue::new(&engine);
        for _ in 0..REQUEST_WINDOW - 1 {
            queue.add_find_request("empty request").unwrap();
        }
        queue.add_find_request("curly dog").unwrap();
        assert_eq!(queue.len(), REQUEST_WINDOW);
        assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 1);

        // Two more matching queries slide the window past two empty slots.
        queue.add_find_request("curly").unwrap();
        queue.add_find_request("dog").unwrap();
        assert_eq!(queue.len(), REQUEST_WINDOW);
        assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 3);
    }
}
