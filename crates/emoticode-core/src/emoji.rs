//! Shortcode dictionary.
//!
//! [`EmojiTrie`] maps shortcode names (`smile`, `raising_hand`) to glyphs.
//! Synonyms share the glyph of a canonical name and report that canonical
//! name when suggested, so typing `:happy` offers `raising_hand`.
//!
//! Names are matched exactly. The dictionary is loaded in one case
//! (lowercase by convention) and callers fold their queries to match.

use std::collections::HashSet;

use crate::{Trie, TrieError};

/// Payload of a complete shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// Rendered emoji substituted for the shortcode.
    pub glyph: String,
    /// Shortcode this entry belongs to. Differs from the path for synonyms.
    pub canonical_name: String,
}

/// Result of an exact shortcode lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Name is a complete shortcode.
    Found {
        /// Glyph for the shortcode.
        code: &'a str,
    },
    /// Name is absent or only a prefix of longer shortcodes.
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Whether the name resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Glyph if found.
    pub fn code(&self) -> Option<&'a str> {
        match *self {
            Self::Found { code } => Some(code),
            Self::NotFound => None,
        }
    }
}

/// A completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    /// Canonical shortcode name, without colons.
    pub name: String,
    /// Glyph for the shortcode.
    pub code: String,
}

impl From<&Emoji> for Suggestion {
    fn from(emoji: &Emoji) -> Self {
        Self { name: emoji.canonical_name.clone(), code: emoji.glyph.clone() }
    }
}

/// Shortcode to glyph dictionary backed by a [`Trie`].
///
/// Built once, then shared read-only (typically behind an `Arc`). All query
/// methods take `&self` and allocate only their results.
#[derive(Debug, Clone, Default)]
pub struct EmojiTrie {
    names: Trie<Emoji>,
}

impl EmojiTrie {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(name, glyph)` pairs.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TrieError> {
        let mut trie = Self::new();
        for (name, glyph) in pairs {
            trie.add(name, glyph)?;
        }
        Ok(trie)
    }

    /// Register `name` as a shortcode for `glyph`.
    ///
    /// Last write wins: re-adding a name replaces its payload only.
    pub fn add(&mut self, name: &str, glyph: &str) -> Result<(), TrieError> {
        let emoji = Emoji { glyph: glyph.to_owned(), canonical_name: name.to_owned() };
        if let Some(previous) = self.names.insert(name, emoji)? {
            if previous.glyph != glyph {
                tracing::debug!(name, old = %previous.glyph, new = glyph, "shortcode overwritten");
            }
        }
        Ok(())
    }

    /// Register `synonym` as an alternate name for `canonical_name`.
    ///
    /// A synonym never replaces a real shortcode spelled the same way.
    /// Returns whether the synonym was stored.
    pub fn add_synonym(
        &mut self,
        synonym: &str,
        canonical_name: &str,
        glyph: &str,
    ) -> Result<bool, TrieError> {
        if self.names.get(synonym).is_some_and(|existing| existing.canonical_name == synonym) {
            return Ok(false);
        }
        let emoji = Emoji { glyph: glyph.to_owned(), canonical_name: canonical_name.to_owned() };
        self.names.insert(synonym, emoji)?;
        Ok(true)
    }

    /// Exact lookup of `name`, in O(`name.len()`).
    pub fn is_emoji(&self, name: &str) -> Lookup<'_> {
        match self.names.get(name) {
            Some(emoji) => Lookup::Found { code: &emoji.glyph },
            None => Lookup::NotFound,
        }
    }

    /// Payload stored for `name`.
    pub fn get(&self, name: &str) -> Option<&Emoji> {
        self.names.get(name)
    }

    /// Up to `limit` shortcodes starting with `prefix`.
    ///
    /// Ordered by the *matched path* in ascending code point order, not by
    /// the reported name. A hit through a synonym sits where the synonym
    /// sorts, so with `happy -> raising_hand` the prefix `h` yields
    /// `raising_hand` before `heart`. A canonical name reached through
    /// several paths is reported once, at its first position. The walk stops
    /// after `limit` results. Callers wanting another order apply a
    /// [`crate::Ranker`].
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.names
            .iter_prefix(prefix)
            .map(|entry| &entry.value)
            .filter(|emoji| seen.insert(emoji.canonical_name.as_str()))
            .take(limit)
            .map(Suggestion::from)
            .collect()
    }

    /// Every stored name (canonical and synonym) with its payload, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Emoji)> {
        self.names.iter().map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Number of stored names, synonyms included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.names.node_count()
    }
}
