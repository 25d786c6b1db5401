//! Fuzz target for completion at an arbitrary cursor
//!
//! Cursor positions come from the fuzzer unchecked, so they land past the
//! end of the text and inside wide glyphs.
//!
//! # Invariants
//!
//! - Never panics, whatever the cursor
//! - Never returns more than `limit` suggestions
//! - Every suggestion resolves to its own glyph

#![no_main]

use arbitrary::Arbitrary;
use emoticode_core::{EmojiResolver, FrequencyRanker};
use emoticode_dataset::default_trie;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Query {
    text: String,
    cursor: u16,
    limit: u8,
    weights: Vec<(String, u32)>,
}

fuzz_target!(|query: Query| {
    let resolver = EmojiResolver::new(default_trie());
    let cursor = usize::from(query.cursor);
    let limit = usize::from(query.limit);

    let plain = resolver.suggest_completions(&query.text, cursor, limit);
    assert!(plain.len() <= limit);
    for suggestion in &plain {
        assert_eq!(resolver.trie().is_emoji(&suggestion.name).code(), Some(suggestion.code.as_str()));
    }

    let ranker: FrequencyRanker = query.weights.into_iter().collect();
    let ranked = resolver.suggest_ranked(&query.text, cursor, limit, &ranker);
    assert!(ranked.len() <= limit);
});
