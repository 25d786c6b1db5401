//! Built-in dataset and the process-wide dictionary.

use std::sync::{Arc, OnceLock};

use emoticode_core::EmojiTrie;

use crate::{DatasetError, EmojiRecord, Format, LoadOptions, build_trie};

/// JSON dataset compiled into the binary.
pub const DEFAULT_DATASET: &str = include_str!("../assets/emojis.json");

/// Records of the built-in dataset.
pub fn default_records() -> Result<Vec<EmojiRecord>, DatasetError> {
    Format::Json.decode(DEFAULT_DATASET.as_bytes())
}

/// Dictionary built from the built-in dataset, shared by the whole process.
///
/// Built on first call; every caller after that receives the same
/// fully-built trie. If the embedded data cannot be loaded the error is
/// logged and an empty dictionary is shared instead, so callers degrade to
/// "no emoji" rather than failing.
pub fn default_trie() -> Arc<EmojiTrie> {
    static TRIE: OnceLock<Arc<EmojiTrie>> = OnceLock::new();

    let trie = TRIE.get_or_init(|| {
        match default_records().and_then(|records| build_trie(&records, &LoadOptions::default())) {
            Ok((trie, _)) => Arc::new(trie),
            Err(err) => {
                tracing::error!(%err, "embedded emoji dataset failed to load");
                Arc::new(EmojiTrie::new())
            },
        }
    });
    Arc::clone(trie)
}
