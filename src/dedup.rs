//! Duplicate-document detection and removal.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crate::document::DocumentId;
use crate::engine::SearchEngine;
use crate::error::Result;

/// Remove duplicate documents, reporting each to standard output.
///
/// See [`remove_duplicates_to`] for the duplicate rule.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Result<Vec<DocumentId>> {
    remove_duplicates_to(engine, &mut io::stdout())
}

/// Remove documents whose term-sets duplicate an earlier document's.
///
/// Two documents are duplicates when they index the same set of unique
/// terms; frequencies, word order, repetition, and stop-word-only
/// differences are ignored. Within each equivalence class the lowest id
/// survives. One `Found duplicate document id <id>` line per removed
/// document goes to `sink`. Returns the removed ids in ascending order.
///
/// # Examples
///
/// ```
/// use shrike::dedup::remove_duplicates_to;
/// use shrike::document::DocumentStatus;
/// use shrike::engine::SearchEngine;
///
/// let mut engine = SearchEngine::new();
/// engine.add_document(1, "funny pet", DocumentStatus::Actual, &[1])?;
/// engine.add_document(2, "pet funny pet", DocumentStatus::Actual, &[1])?;
///
/// let mut report = Vec::new();
/// let removed = remove_duplicates_to(&mut engine, &mut report)?;
/// assert_eq!(removed, vec![2]);
/// assert_eq!(report, b"Found duplicate document id 2\n");
/// # Ok::<(), shrike::error::ShrikeError>(())
/// ```
pub fn remove_duplicates_to<W: Write>(
    engine: &mut SearchEngine,
    sink: &mut W,
) -> Result<Vec<DocumentId>> {
    let mut marked: BTreeSet<DocumentId> = BTreeSet::new();
    {
        let documents: Vec<(DocumentId, &BTreeMap<String, f64>)> = engine
            .index()
            .documents()
            .map(|(id, entry)| (id, &entry.term_frequencies))
            .collect();

        for (position, &(id, frequencies)) in documents.iter().enumerate() {
            if marked.contains(&id) {
                continue;
            }
            for &(candidate_id, candidate_frequencies) in &documents[position + 1..] {
                if marked.contains(&candidate_id) {
                    continue;
                }
                // Frequency maps are ordered, so equal key sequences mean
                // equal term-sets.
                if frequencies.len() == candidate_frequencies.len()
                    && frequencies.keys().eq(candidate_frequencies.keys())
                {
                    marked.insert(candidate_id);
                    writeln!(sink, "Found duplicate document id {candidate_id}")?;
                }
            }
        }
    }

    for &id in &marked {
        engine.remove_document(id);
    }
    Ok(marked.into_iter().collect())
}
