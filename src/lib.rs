//! # Shrike
//!
//! An in-memory full-text search engine for small-to-medium corpora of
//! short documents.
//!
//! ## Features
//!
//! - Inverted index with per-document term frequencies
//! - TF-IDF ranking with rating tie-breaks and top-K truncation
//! - Plus/minus query terms and stop-word handling
//! - Status- and predicate-based result filtering
//! - Sequential and parallel variants of search, match, and removal
//! - Duplicate-document detection
//! - Sliding-window request statistics
//!
//! ## Example
//!
//! ```
//! use shrike::document::DocumentStatus;
//! use shrike::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::from_stop_words_text("и в на")?;
//! engine.add_document(0, "белый кот и модный ошейник", DocumentStatus::Actual, &[8, -3])?;
//! engine.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7])?;
//!
//! let hits = engine.find_top_documents("пушистый кот -ошейник")?;
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].doc_id, 1);
//! # Ok::<(), shrike::error::ShrikeError>(())
//! ```

pub mod analysis;
pub mod dedup;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod process;
pub mod query;
pub mod request_queue;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
