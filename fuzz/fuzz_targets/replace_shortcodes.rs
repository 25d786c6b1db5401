//! Fuzz target for EmojiResolver::replace_shortcodes
//!
//! Feeds arbitrary UTF-8 through the shortcode scanner to find:
//! - Panics on byte ranges that split a multi-byte char
//! - Lost or duplicated text around unmatched colons
//!
//! # Invariants
//!
//! - Text without ':' is returned unchanged
//! - Output never contains more ':' than the input

#![no_main]

use emoticode_core::EmojiResolver;
use emoticode_dataset::default_trie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let resolver = EmojiResolver::new(default_trie());
    let replaced = resolver.replace_shortcodes(text);

    if !text.contains(':') {
        assert_eq!(replaced, text);
    }
    assert!(replaced.matches(':').count() <= text.matches(':').count());
});
