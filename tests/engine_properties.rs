//! Structural invariants checked over randomized-ish add/remove sequences.

use shrike::document::{DocumentId, DocumentStatus};
use shrike::engine::SearchEngine;

const TEXTS: [&str; 6] = [
    "кот и модный ошейник",
    "пушистый кот пушистый хвост",
    "ухоженный пёс выразительные глаза",
    "скворец евгений и кот",
    "белый пёс и пушистый хвост",
    "модный ухоженный скворец",
];

fn build_engine(ids: &[DocumentId]) -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words_text("и").unwrap();
    for &id in ids {
        engine
            .add_document(
                id,
                TEXTS[id as usize % TEXTS.len()],
                DocumentStatus::Actual,
                &[id as i32, 3],
            )
            .unwrap();
    }
    engine
}

#[test]
fn term_frequencies_sum_to_one() {
    let engine = build_engine(&[0, 1, 2, 3, 4, 5, 11, 17]);
    for id in engine.iter() {
        let total: f64 = engine.word_frequencies(id).unwrap().values().sum();
        assert!((total - 1.0).abs() < 1e-9, "document {id} sums to {total}");
    }
}

#[test]
fn postings_mirror_document_frequencies() {
    let mut engine = build_engine(&[0, 1, 2, 3, 4, 5]);
    engine.remove_document(2);
    engine.remove_document(5);

    for id in engine.iter() {
        for (term, &tf) in engine.word_frequencies(id).unwrap() {
            // Every stored frequency must be discoverable through a query
            // for its term.
            let (matched, _) = engine.match_document(term, id).unwrap();
            assert_eq!(matched, vec![term.as_str()]);
            assert!(tf > 0.0);
        }
    }
}

#[test]
fn removed_document_leaves_no_trace() {
    let mut engine = build_engine(&[0, 1, 2]);
    engine.remove_document(1);

    assert_eq!(engine.document_count(), 2);
    assert_eq!(engine.stats().document_count, 2);
    assert!(engine.iter().all(|id| id != 1));
    assert!(engine.word_frequencies(1).is_err());

    // No query can surface the removed id.
    for text in TEXTS {
        let hits = engine.find_top_documents(text).unwrap();
        assert!(hits.iter().all(|hit| hit.doc_id != 1));
    }
}

#[test]
fn parallel_removal_matches_sequential() {
    let mut sequential = build_engine(&[0, 1, 2, 3, 4, 5]);
    let mut parallel = build_engine(&[0, 1, 2, 3, 4, 5]);
    sequential.remove_document(3);
    parallel.remove_document_parallel(3);

    assert_eq!(
        sequential.iter().collect::<Vec<_>>(),
        parallel.iter().collect::<Vec<_>>()
    );
    for text in TEXTS {
        assert_eq!(
            sequential.find_top_documents(text).unwrap(),
            parallel.find_top_documents(text).unwrap()
        );
    }
}

#[test]
fn matched_terms_are_query_subset() {
    let engine = build_engine(&[0, 1, 2, 3]);
    let query = "пушистый кот евгений -ошейник";
    for id in engine.iter() {
        let Ok((matched, _)) = engine.match_document(query, id) else {
            continue;
        };
        for term in matched {
            assert!(["пушистый", "кот", "евгений"].contains(&term));
        }
    }
}

#[test]
fn stop_word_update_only_affects_new_documents() {
    let mut engine = SearchEngine::new();
    engine
        .add_document(1, "cat in the city", DocumentStatus::Actual, &[1])
        .unwrap();
    engine.set_stop_words("in the").unwrap();
    engine
        .add_document(2, "dog in the town", DocumentStatus::Actual, &[1])
        .unwrap();

    // Document 1 still carries "in"; document 2 never indexed it.
    assert!(engine.word_frequencies(1).unwrap().contains_key("in"));
    assert!(!engine.word_frequencies(2).unwrap().contains_key("in"));

    // The query side sees the new stop words either way.
    assert!(engine.find_top_documents("in").unwrap().is_empty());
}
