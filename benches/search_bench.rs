//! Criterion benchmarks for the Shrike search engine.
//!
//! Covers the main hot paths:
//! - Document indexing
//! - Sequential vs parallel top-document search
//! - Document matching
//! - Batch query processing

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use shrike::document::DocumentStatus;
use shrike::engine::SearchEngine;
use shrike::process::process_queries;

const WORDS: [&str; 32] = [
    "search", "engine", "full", "text", "index", "query", "document", "field", "term", "phrase",
    "boolean", "vector", "similarity", "relevance", "score", "analysis", "tokenization",
    "stemming", "normalization", "clustering", "machine", "learning", "algorithm", "data",
    "structure", "performance", "optimization", "memory", "storage", "retrieval", "ranking",
    "filtering",
];

/// Generate deterministic variable-length test documents.
fn generate_documents(count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 8 + (i % 24);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(WORDS[(i * 7 + j * 3) % WORDS.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn populated_engine(count: usize) -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words_text("the a of").unwrap();
    for (id, text) in generate_documents(count).iter().enumerate() {
        engine
            .add_document(id as i64, text, DocumentStatus::Actual, &[id as i32 % 10])
            .unwrap();
    }
    engine
}

fn bench_indexing(c: &mut Criterion) {
    let documents = generate_documents(1000);

    let mut group = c.benchmark_group("indexing");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("add_1000_documents", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::from_stop_words_text("the a of").unwrap();
            for (id, text) in documents.iter().enumerate() {
                engine
                    .add_document(id as i64, text, DocumentStatus::Actual, &[1, 2, 3])
                    .unwrap();
            }
            black_box(engine.document_count())
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let engine = populated_engine(1000);
    let query = "search relevance ranking -clustering";

    let mut group = c.benchmark_group("search");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(engine.find_top_documents(black_box(query)).unwrap()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(engine.find_top_documents_parallel(black_box(query)).unwrap()))
    });
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let engine = populated_engine(1000);
    let query = "search relevance ranking memory";

    let mut group = c.benchmark_group("match");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(engine.match_document(black_box(query), 500).unwrap()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(engine.match_document_parallel(black_box(query), 500).unwrap()))
    });
    group.finish();
}

fn bench_batch_queries(c: &mut Criterion) {
    let engine = populated_engine(1000);
    let queries: Vec<String> = (0..64)
        .map(|i| {
            format!(
                "{} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i * 5 + 2) % WORDS.len()]
            )
        })
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("process_queries", |b| {
        b.iter(|| black_box(process_queries(&engine, black_box(&queries)).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_indexing,
    bench_search,
    bench_match,
    bench_batch_queries
);
criterion_main!(benches);
