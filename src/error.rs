//! Error types for the Shrike library.
//!
//! All fallible operations return [`Result`], and every failure is one of
//! the [`ShrikeError`] variants. Parser errors (`InvalidText`,
//! `InvalidMinus`) abort the current operation atomically: no engine state
//! is mutated when they are raised.
//!
//! # Examples
//!
//! ```
//! use shrike::error::{Result, ShrikeError};
//!
//! fn reject(id: i64) -> Result<()> {
//!     Err(ShrikeError::NegativeId(id))
//! }
//!
//! match reject(-1) {
//!     Ok(_) => println!("accepted"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::document::DocumentId;

/// The main error type for Shrike operations.
#[derive(Error, Debug)]
pub enum ShrikeError {
    /// A word contained a control character (bytes `0x00..0x1F`).
    #[error("invalid text: {0}")]
    InvalidText(String),

    /// A query word was a bare `-` or started with `--`.
    #[error("invalid minus word: {0}")]
    InvalidMinus(String),

    /// A document was added with a negative id.
    #[error("negative document id: {0}")]
    NegativeId(DocumentId),

    /// A document was added with an id that is already indexed.
    #[error("document id already exists: {0}")]
    DuplicateId(DocumentId),

    /// The requested document id is not in the index.
    #[error("unknown document id: {0}")]
    UnknownId(DocumentId),

    /// A positional document lookup past the end of the id set.
    #[error("document index out of range: {0}")]
    OutOfRange(usize),

    /// I/O errors from writing diagnostic output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with [`ShrikeError`].
pub type Result<T> = std::result::Result<T, ShrikeError>;

impl ShrikeError {
    /// Create a new invalid-text error.
    pub fn invalid_text<S: Into<String>>(word: S) -> Self {
        ShrikeError::InvalidText(word.into())
    }

    /// Create a new invalid-minus error.
    pub fn invalid_minus<S: Into<String>>(word: S) -> Self {
        ShrikeError::InvalidMinus(word.into())
    }
}
