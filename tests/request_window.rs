//! The request queue keeps a full day of per-minute slots.

use shrike::document::DocumentStatus;
use shrike::engine::SearchEngine;
use shrike::request_queue::{RequestQueue, REQUEST_WINDOW};

fn engine_with_dog() -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words_text("and in at").unwrap();
    engine
        .add_document(1, "curly dog and big collar", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    engine
}

#[test]
fn window_slides_past_oldest_requests() {
    let engine = engine_with_dog();
    let mut queue = RequestQueue::new(&engine);

    for _ in 0..REQUEST_WINDOW - 1 {
        queue.add_find_request("empty request").unwrap();
    }
    assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 1);

    // The window is full after one more request; nothing is evicted yet.
    let hits = queue.add_find_request("curly dog").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(queue.len(), REQUEST_WINDOW);
    assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 1);

    // Each further matching query evicts one of the old empty slots.
    queue.add_find_request("big collar").unwrap();
    assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 2);
    queue.add_find_request("dog").unwrap();
    assert_eq!(queue.no_result_requests(), REQUEST_WINDOW - 3);
    assert_eq!(queue.len(), REQUEST_WINDOW);
}

#[test]
fn all_request_variants_record_results() {
    let engine = engine_with_dog();
    let mut queue = RequestQueue::new(&engine);

    queue.add_find_request("curly dog").unwrap();
    queue
        .add_find_request_with_status("curly dog", DocumentStatus::Banned)
        .unwrap();
    queue
        .add_find_request_by("curly dog", |_, _, rating| rating > 100)
        .unwrap();

    // The status and predicate variants found nothing.
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.no_result_requests(), 2);
}
