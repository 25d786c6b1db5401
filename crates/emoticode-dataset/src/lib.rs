//! Emoji dataset loading.
//!
//! Turns a static list of `(shortcode, glyph, synonyms)` records into an
//! [`emoticode_core::EmojiTrie`]. Records are validated at this boundary:
//! a malformed record is skipped and logged, so the dictionary only ever
//! sees well-formed names.
//!
//! # Components
//!
//! - [`EmojiRecord`] / [`Format`]: record schema and its JSON / CBOR encodings
//! - [`build_trie`] / [`load_path`]: validation, synonym expansion, loading
//! - [`default_trie`]: the built-in dataset, built once per process

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod embedded;
mod error;
mod loader;
mod record;

pub use embedded::{DEFAULT_DATASET, default_records, default_trie};
pub use error::DatasetError;
pub use loader::{
    LoadOptions, LoadReport, SkipReason, build_trie, check_name, load_bytes, load_path, read_records,
};
pub use record::{EmojiRecord, Format};
