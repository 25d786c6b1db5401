//! Property-based tests for the shortcode dictionary.
//!
//! Checks lookup and completion invariants against a `BTreeMap` model built
//! from the same insert sequence.

use std::collections::BTreeMap;

use emoticode_core::{EmojiTrie, Lookup, Trie};
use proptest::prelude::*;

/// Shortcode-like names over a small alphabet so prefixes collide often.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-e_]{1,6}"
}

fn glyph_strategy() -> impl Strategy<Value = String> {
    "[\u{1F600}-\u{1F64F}]{1,2}"
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((name_strategy(), glyph_strategy()), 0..40)
}

/// Build the trie and the model from the same insert sequence.
fn build(pairs: &[(String, String)]) -> (EmojiTrie, BTreeMap<String, String>) {
    let mut trie = EmojiTrie::new();
    let mut model = BTreeMap::new();
    for (name, glyph) in pairs {
        trie.add(name, glyph).expect("names are non-empty");
        model.insert(name.clone(), glyph.clone());
    }
    (trie, model)
}

proptest! {
    #[test]
    fn prop_inserted_names_resolve_to_last_glyph(pairs in pairs_strategy()) {
        let (trie, model) = build(&pairs);

        for (name, glyph) in &model {
            prop_assert_eq!(trie.is_emoji(name), Lookup::Found { code: glyph.as_str() });
        }
        prop_assert_eq!(trie.len(), model.len());
    }

    #[test]
    fn prop_absent_names_never_resolve(pairs in pairs_strategy(), probe in "[a-f_]{0,7}") {
        let (trie, model) = build(&pairs);

        if !model.contains_key(&probe) {
            prop_assert_eq!(trie.is_emoji(&probe), Lookup::NotFound);
        }
    }

    #[test]
    fn prop_suggest_matches_sorted_model(
        pairs in pairs_strategy(),
        prefix in "[a-e_]{0,3}",
        limit in 0usize..12,
    ) {
        let (trie, model) = build(&pairs);

        let expected: Vec<(&str, &str)> = model
            .iter()
            .filter(|(name, _)| name.starts_with(prefix.as_str()))
            .take(limit)
            .map(|(name, glyph)| (name.as_str(), glyph.as_str()))
            .collect();
        let suggestions = trie.suggest(&prefix, limit);
        let actual: Vec<(&str, &str)> =
            suggestions.iter().map(|s| (s.name.as_str(), s.code.as_str())).collect();

        prop_assert!(actual.len() <= limit);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_overwrite_leaves_other_names_intact(
        pairs in pairs_strategy(),
        target in name_strategy(),
        glyph in glyph_strategy(),
    ) {
        let (mut trie, model) = build(&pairs);
        trie.add(&target, &glyph).expect("non-empty");

        prop_assert_eq!(trie.is_emoji(&target).code(), Some(glyph.as_str()));
        for (name, code) in model.iter().filter(|(name, _)| **name != target) {
            prop_assert_eq!(trie.is_emoji(name).code(), Some(code.as_str()));
        }
    }

    #[test]
    fn prop_word_trie_matches_model(words in prop::collection::vec("[A-Za-z]{1,6}", 0..30)) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word, ()).expect("non-empty");
        }

        let mut expected: Vec<&str> = words.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(trie.matching_words(""), expected);
    }
}

#[test]
fn grinning_family_lookup() {
    let trie =
        EmojiTrie::from_pairs([("grinning", "😀"), ("grin", "😁"), ("joy", "😂"), ("rofl", "🤣")])
            .expect("valid pairs");

    assert_eq!(trie.is_emoji("grinning"), Lookup::Found { code: "😀" });
    assert_eq!(trie.is_emoji("eyes"), Lookup::NotFound);
}

#[test]
fn reinserting_grin_keeps_grinning() {
    let mut trie =
        EmojiTrie::from_pairs([("grinning", "😀"), ("grin", "😁")]).expect("valid pairs");
    trie.add("grin", "😬").expect("add");

    assert_eq!(trie.is_emoji("grinning").code(), Some("😀"));
    assert_eq!(trie.is_emoji("grin").code(), Some("😬"));
}
