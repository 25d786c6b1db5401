//! Shortcode replacement and completion over chat text.
//!
//! [`EmojiResolver`] is the query surface used by the UI layer:
//!
//! - [`EmojiResolver::replace_shortcodes`] when a message is finalized.
//! - [`EmojiResolver::suggest_completions`] on every keystroke while
//!   composing.
//!
//! Both are total: malformed input (empty text, zero limit, cursor past the
//! end) yields an identity or empty result, never an error.

use std::{borrow::Cow, sync::Arc};

use crate::{
    EmojiTrie, Ranker, ResolverConfig, Suggestion,
    scan::{self, ActiveToken},
};

/// Stateless query front-end over a shared [`EmojiTrie`].
///
/// Cloning is cheap; clones share the same dictionary.
#[derive(Debug, Clone)]
pub struct EmojiResolver {
    trie: Arc<EmojiTrie>,
    config: ResolverConfig,
}

impl EmojiResolver {
    /// Create a resolver with default configuration.
    pub fn new(trie: Arc<EmojiTrie>) -> Self {
        Self::with_config(trie, ResolverConfig::default())
    }

    /// Create a resolver with explicit configuration.
    pub fn with_config(trie: Arc<EmojiTrie>, config: ResolverConfig) -> Self {
        Self { trie, config }
    }

    /// Dictionary backing this resolver.
    pub fn trie(&self) -> &EmojiTrie {
        &self.trie
    }

    /// Active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replace every recognized `:shortcode:` in `text` with its glyph.
    ///
    /// Unknown shortcodes are kept verbatim, colons included. Borrows `text`
    /// when nothing was replaced.
    pub fn replace_shortcodes<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut out = String::new();
        let mut copied = 0;

        for candidate in scan::candidates(text) {
            if let Some(code) = self.trie.is_emoji(candidate.name).code() {
                out.push_str(&text[copied..candidate.range.start]);
                out.push_str(code);
                copied = candidate.range.end;
            }
        }

        if copied == 0 {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }

    /// Shortcode being typed at `cursor` (a char offset), if any.
    pub fn active_token<'t>(&self, text: &'t str, cursor: usize) -> Option<ActiveToken<'t>> {
        scan::active_token(text, cursor)
    }

    /// Up to `limit` completions for the shortcode being typed at `cursor`.
    ///
    /// `cursor` is a char offset into `text`. Results come in trie order.
    pub fn suggest_completions(&self, text: &str, cursor: usize, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(token) = scan::active_token(text, cursor) else {
            return Vec::new();
        };

        let prefix = if self.config.fold_case {
            Cow::Owned(token.prefix.to_lowercase())
        } else {
            Cow::Borrowed(token.prefix)
        };
        self.trie.suggest(&prefix, limit)
    }

    /// Like [`Self::suggest_completions`], reordered by `ranker`.
    ///
    /// Fetches at least `config.candidate_pool` candidates so the ranker can
    /// promote entries beyond the first `limit` alphabetically.
    pub fn suggest_ranked(
        &self,
        text: &str,
        cursor: usize,
        limit: usize,
        ranker: &dyn Ranker,
    ) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }
        let pool = limit.max(self.config.candidate_pool);
        let mut ranked = ranker.rank(self.suggest_completions(text, cursor, pool));
        ranked.truncate(limit);
        ranked
    }
}
