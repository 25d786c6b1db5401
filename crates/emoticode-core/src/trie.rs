//! Arena-backed prefix tree.
//!
//! Nodes live in a single `Vec` and refer to their children by [`NodeId`].
//! Each node keeps its children as `(char, NodeId)` pairs sorted by `char`,
//! so a pre-order walk yields keys in ascending code point order without any
//! sorting at query time.
//!
//! # Invariants
//!
//! - The root is always node `0` and never carries an entry.
//! - Every child id points into the arena and has exactly one parent.
//! - Nodes are never removed. Re-inserting a key replaces the value at its
//!   terminal node and leaves every descendant untouched.

use smallvec::SmallVec;

use crate::TrieError;

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node.
    pub const ROOT: Self = Self(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Complete key stored at a terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// Key spelled by the path from the root to this node.
    pub key: String,
    /// Value attached to the key.
    pub value: T,
}

#[derive(Debug, Clone)]
struct Node<T> {
    /// Sorted by `char`.
    children: SmallVec<[(char, NodeId); 4]>,
    entry: Option<Entry<T>>,
}

impl<T> Node<T> {
    fn empty() -> Self {
        Self { children: SmallVec::new(), entry: None }
    }

    fn child(&self, c: char) -> Option<NodeId> {
        self.children.binary_search_by_key(&c, |&(ch, _)| ch).ok().map(|i| self.children[i].1)
    }
}

/// Prefix tree mapping string keys to values.
///
/// Lookups cost O(key length) regardless of how many keys are stored.
/// `Trie<()>` works as a plain word set.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    nodes: Vec<Node<T>>,
    len: usize,
}

impl<T> Trie<T> {
    /// Create a trie holding only the root node.
    pub fn new() -> Self {
        Self { nodes: vec![Node::empty()], len: 0 }
    }

    /// Insert `key` with `value`.
    ///
    /// Returns the previous value if the key was already present. Nodes of
    /// longer keys sharing this prefix are never modified.
    pub fn insert(&mut self, key: &str, value: T) -> Result<Option<T>, TrieError> {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }

        let mut node = NodeId::ROOT;
        for c in key.chars() {
            node = self.child_or_insert(node, c)?;
        }

        let slot = &mut self.nodes[node.index()].entry;
        match slot {
            Some(entry) => Ok(Some(std::mem::replace(&mut entry.value, value))),
            None => {
                *slot = Some(Entry { key: key.to_owned(), value });
                self.len += 1;
                Ok(None)
            },
        }
    }

    /// Value stored for exactly `key`. `None` if `key` is only a prefix or
    /// absent.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entry(key).map(|entry| &entry.value)
    }

    /// Entry stored for exactly `key`.
    pub fn entry(&self, key: &str) -> Option<&Entry<T>> {
        self.find(key).and_then(|id| self.nodes[id.index()].entry.as_ref())
    }

    /// Whether `key` was inserted as a complete key.
    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Node reached by walking `prefix` from the root. `None` if no stored
    /// key starts with `prefix`.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(NodeId::ROOT, |node, c| self.nodes[node.index()].child(c))
    }

    /// Entries whose key starts with `prefix`, in ascending key order.
    ///
    /// The walk is lazy: taking `n` items visits only the nodes between the
    /// prefix node and the `n`th entry.
    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter<'_, T> {
        let stack = self.find(prefix).into_iter().collect();
        PrefixIter { trie: self, stack }
    }

    /// All entries in ascending key order.
    pub fn iter(&self) -> PrefixIter<'_, T> {
        self.iter_prefix("")
    }

    /// Every complete key starting with `prefix`, ascending.
    pub fn matching_words(&self, prefix: &str) -> Vec<&str> {
        self.iter_prefix(prefix).map(|entry| entry.key.as_str()).collect()
    }

    /// Number of complete keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child_or_insert(&mut self, parent: NodeId, c: char) -> Result<NodeId, TrieError> {
        let slot = self.nodes[parent.index()].children.binary_search_by_key(&c, |&(ch, _)| ch);
        match slot {
            Ok(i) => Ok(self.nodes[parent.index()].children[i].1),
            Err(pos) => {
                let id = u32::try_from(self.nodes.len())
                    .map_err(|_| TrieError::CapacityExceeded { max: u64::from(u32::MAX) })?;
                self.nodes.push(Node::empty());
                self.nodes[parent.index()].children.insert(pos, (c, NodeId(id)));
                Ok(NodeId(id))
            },
        }
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order walk over the entries below one node.
///
/// Created by [`Trie::iter_prefix`].
#[derive(Debug, Clone)]
pub struct PrefixIter<'a, T> {
    trie: &'a Trie<T>,
    /// Nodes still to visit; the top of the stack is the next in order.
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for PrefixIter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.trie.nodes[id.index()];
            self.stack.extend(node.children.iter().rev().map(|&(_, child)| child));
            if let Some(entry) = &node.entry {
                return Some(entry);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(keys: &[&str]) -> Trie<()> {
        let mut trie = Trie::new();
        for key in keys {
            trie.insert(key, ()).expect("non-empty key");
        }
        trie
    }

    #[test]
    fn word_trie_membership() {
        let trie = words(&["john", "harry", "James", "Robert"]);

        assert!(trie.contains("James"));
        assert!(!trie.contains("Steven"));
        // Case-sensitive
        assert!(!trie.contains("james"));
    }

    #[test]
    fn value_lookup() {
        let mut trie = Trie::new();
        trie.insert("grinning", "😀").expect("insert");
        trie.insert("grin", "😁").expect("insert");
        trie.insert("joy", "😂").expect("insert");
        trie.insert("rofl", "🤣").expect("insert");

        assert_eq!(trie.get("joy"), Some(&"😂"));
        assert_eq!(trie.get("eyes"), None);
        // Prefix-only node carries nothing
        assert_eq!(trie.get("grinn"), None);
    }

    #[test]
    fn matching_words_under_prefix() {
        let trie = words(&["John", "Robert", "Robertson", "Rock"]);

        assert_eq!(trie.matching_words("Ro"), vec!["Robert", "Robertson", "Rock"]);
        assert_eq!(trie.matching_words("Robert"), vec!["Robert", "Robertson"]);
        assert!(trie.matching_words("X").is_empty());
    }

    #[test]
    fn empty_key_rejected() {
        let mut trie: Trie<()> = Trie::new();
        assert_eq!(trie.insert("", ()), Err(TrieError::EmptyKey));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn reinsert_returns_previous_value() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("grin", 1), Ok(None));
        assert_eq!(trie.insert("grin", 2), Ok(Some(1)));
        assert_eq!(trie.get("grin"), Some(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn overwrite_keeps_descendants() {
        let mut trie = Trie::new();
        trie.insert("grinning", 'a').expect("insert");
        trie.insert("grin", 'b').expect("insert");
        let nodes = trie.node_count();

        trie.insert("grin", 'c').expect("insert");

        assert_eq!(trie.get("grinning"), Some(&'a'));
        assert_eq!(trie.get("grin"), Some(&'c'));
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = words(&["grin", "grinning"]);
        // root + g r i n n i n g
        assert_eq!(trie.node_count(), 9);
    }

    #[test]
    fn iteration_is_ascending_regardless_of_insert_order() {
        let trie = words(&["b", "ab", "a", "abc", "ba", "aa"]);
        let keys: Vec<&str> = trie.iter().map(|entry| entry.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "aa", "ab", "abc", "b", "ba"]);
    }

    #[test]
    fn prefix_walk_is_lazy() {
        let trie = words(&["a", "ab", "abc"]);
        let mut iter = trie.iter_prefix("a");

        assert_eq!(iter.next().map(|e| e.key.as_str()), Some("a"));
        // Only the child of "a" is pending
        assert_eq!(iter.stack.len(), 1);
    }

    #[test]
    fn unicode_keys() {
        let trie = words(&["café", "cafe", "日本"]);
        assert!(trie.contains("café"));
        assert!(trie.contains("日本"));
        assert!(!trie.contains("日"));
        assert_eq!(trie.matching_words("caf"), vec!["cafe", "café"]);
    }
}
