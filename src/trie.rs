//! Counting trie (prefix tree) over `char` sequences.
//!
//! Each node maps a next character to a child node and records how many
//! times a key *terminating* at that node has been inserted. Prefixes
//! that were never inserted as complete keys count zero: inserting
//! `"App"` and `"Apple"` makes `"Ap"` count 0, `"App"` count 1.
//!
//! Children live in a `BTreeMap`, so traversal order is deterministic
//! (lexicographic by `char`). Insertion and lookup are $O(|key|)$ map
//! operations.

use std::collections::BTreeMap;

/// A node in a [`Trie`]. The root represents the empty prefix.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    end_count: usize,
}

impl TrieNode {
    /// Return the child reached by `ch`, or `None` if absent.
    pub fn get_child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Return how many times a key terminating here was inserted.
    pub fn end_count(&self) -> usize {
        self.end_count
    }

    /// Return true if at least one key terminates at this node.
    pub fn is_end(&self) -> bool {
        self.end_count > 0
    }

    /// Iterate over `(char, child)` pairs in key order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    fn traverse_inner<F: FnMut(&str, usize)>(&self, prefix: &mut String, visit: &mut F) {
        if self.end_count > 0 {
            visit(prefix, self.end_count);
        }
        for (&ch, child) in &self.children {
            prefix.push(ch);
            child.traverse_inner(prefix, visit);
            prefix.pop();
        }
    }
}

/// A prefix tree with per-key insertion counts.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    distinct: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, creating one node per character as needed.
    ///
    /// Re-inserting the same key increments its count rather than
    /// no-opping.
    pub fn insert(&mut self, key: &str) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.end_count == 0 {
            self.distinct += 1;
        }
        node.end_count += 1;
    }

    /// Return how many times `key` was inserted as a complete key.
    ///
    /// Zero when any character on the path is missing or the path was
    /// only ever a prefix of inserted keys.
    pub fn count(&self, key: &str) -> usize {
        let mut node = &self.root;
        for ch in key.chars() {
            match node.get_child(ch) {
                Some(child) => node = child,
                None => return 0,
            }
        }
        node.end_count
    }

    /// Return true if `key` was inserted at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.count(key) > 0
    }

    /// Return the root node (the empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Return the number of distinct complete keys held.
    pub fn len(&self) -> usize {
        self.distinct
    }

    /// Return true if no complete key was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Depth-first walk invoking `visit(key, count)` once per distinct
    /// complete key, children in lexicographic order.
    pub fn traverse<F: FnMut(&str, usize)>(&self, mut visit: F) {
        let mut prefix = String::new();
        self.root.traverse_inner(&mut prefix, &mut visit);
    }
}
