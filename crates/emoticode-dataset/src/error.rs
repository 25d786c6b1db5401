//! Dataset error types.
//!
//! Only whole-dataset failures are errors:
//! - `Json` / `Cbor`: the bytes do not decode as a record array
//! - `Encode`: a record array could not be written
//! - `Io`: the dataset file could not be read or written
//! - `UnknownFormat`: the file extension names no supported encoding
//! - `Empty`: decoding worked but no record survived validation
//! - `Trie`: the dictionary refused an insert
//!
//! A bad individual record is skipped and logged, not reported here.

use emoticode_core::TrieError;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// JSON decoding failed.
    #[error("JSON decode error: {0}")]
    Json(String),

    /// CBOR decoding failed.
    #[error("CBOR decode error: {0}")]
    Cbor(String),

    /// Encoding records failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Reading or writing the dataset file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The dataset format could not be determined.
    #[error("unknown dataset format: {0}")]
    UnknownFormat(String),

    /// No record passed validation.
    #[error("dataset contains no usable records ({skipped} skipped)")]
    Empty {
        /// Records rejected during validation.
        skipped: usize,
    },

    /// The dictionary refused an insert.
    #[error("trie error: {0}")]
    Trie(#[from] TrieError),
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Json(err.to_string())
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err.to_string())
    }
}
