//! Batch query processing.
//!
//! Evaluates many queries against one engine in parallel, preserving input
//! order in the output. The engine is only read, so the fan-out needs no
//! locking.

use rayon::prelude::*;

use crate::document::SearchHit;
use crate::engine::SearchEngine;
use crate::error::Result;

/// Run every query in parallel, returning one result list per query in
/// input order. The first query error aborts the batch.
///
/// # Examples
///
/// ```
/// use shrike::document::DocumentStatus;
/// use shrike::engine::SearchEngine;
/// use shrike::process::process_queries;
///
/// let mut engine = SearchEngine::new();
/// engine.add_document(1, "curly cat", DocumentStatus::Actual, &[3])?;
///
/// let queries = vec!["cat".to_string(), "sparrow".to_string()];
/// let results = process_queries(&engine, &queries)?;
/// assert_eq!(results[0][0].doc_id, 1);
/// assert!(results[1].is_empty());
/// # Ok::<(), shrike::error::ShrikeError>(())
/// ```
pub fn process_queries(
    engine: &SearchEngine,
    queries: &[String],
) -> Result<Vec<Vec<SearchHit>>> {
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query))
        .collect()
}

/// Run every query in parallel and flatten the per-query results in input
/// order.
pub fn process_queries_joined(engine: &SearchEngine, queries: &[String]) -> Result<Vec<SearchHit>> {
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
