//! Trie construction errors.
//!
//! Queries never fail; only inserting into a trie can be refused.

use thiserror::Error;

/// Errors that can occur while building a trie.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The key was empty.
    ///
    /// An empty key would attach a value to the root node, which spells no
    /// word at all.
    #[error("cannot insert empty key into trie")]
    EmptyKey,

    /// The arena ran out of node ids.
    #[error("trie node capacity exceeded ({max} nodes)")]
    CapacityExceeded {
        /// Maximum number of nodes the arena can address.
        max: u64,
    },
}
