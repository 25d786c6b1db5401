//! Emoji shortcode resolution and completion.
//!
//! Turns `:shortcode:` tokens in chat text into emoji and completes partial
//! shortcodes while the user types. Everything here is synchronous and free
//! of I/O; the dictionary is built once and shared read-only.
//!
//! # Components
//!
//! - [`Trie`]: generic arena-backed prefix tree
//! - [`EmojiTrie`]: shortcode to glyph dictionary with synonyms
//! - [`EmojiResolver`]: replacement and completion over raw text
//! - [`Ranker`]: pluggable reordering of completions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use emoticode_core::{EmojiResolver, EmojiTrie};
//!
//! let trie = EmojiTrie::from_pairs([("smile", "😄"), ("smirk", "😏")]).unwrap();
//! let resolver = EmojiResolver::new(Arc::new(trie));
//!
//! assert_eq!(resolver.replace_shortcodes("Hi :smile:"), "Hi 😄");
//! assert_eq!(resolver.suggest_completions("Hi :smi", 7, 5).len(), 2);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod emoji;
mod error;
mod rank;
mod resolver;
pub mod scan;
pub mod trie;

pub use config::ResolverConfig;
pub use emoji::{Emoji, EmojiTrie, Lookup, Suggestion};
pub use error::TrieError;
pub use rank::{Alphabetical, FrequencyRanker, Ranker};
pub use resolver::EmojiResolver;
pub use scan::ActiveToken;
pub use trie::Trie;
