// --- File: src/core/trie.rs
use crate::core::types::{rank_by_frequency, NodeId, WordEntry};
use std::collections::HashMap;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: HashMap<char, NodeId>,
    is_terminal: bool,
    frequency: u64,
    canonical: Option<String>,
}

impl TrieNode {
    fn new() -> Self {
        Self::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    fn entry(&self) -> Option<WordEntry> {
        match (&self.canonical, self.is_terminal) {
            (Some(word), true) => Some(WordEntry::new(word.clone(), self.frequency)),
            _ => None,
        }
    }
}

/// A case-folding prefix trie. Keys are always lower-cased; each terminal
/// node remembers the latest original spelling for display.
///
/// Nodes live in a flat arena and refer to their children by index, so every
/// walk below is an explicit-stack loop rather than recursion.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], word_count: 0 }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// `None` for an id this trie never handed out.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id)
    }

    /// Child edges of a node, in no particular order. Unknown ids have none.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.children.iter().map(|(&c, &child)| (c, child)))
    }

    /// Number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Inserts one occurrence of `word`. Empty input is ignored.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node_idx = ROOT;
        for c in word.to_lowercase().chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }

        let node = &mut self.nodes[node_idx];
        if !node.is_terminal {
            self.word_count += 1;
        }
        node.is_terminal = true;
        node.canonical = Some(word.to_string());
        node.frequency += 1;
    }

    /// Case-insensitive exact lookup.
    pub fn search(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.node_for(word)
            .map(|id| self.nodes[id].is_terminal)
            .unwrap_or(false)
    }

    /// True iff some indexed word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.node_for(prefix).is_some()
    }

    /// Follows `prefix` (case-folded) from the root.
    pub fn node_for(&self, prefix: &str) -> Option<NodeId> {
        let mut node_idx = ROOT;
        for c in prefix.to_lowercase().chars() {
            node_idx = *self.nodes[node_idx].children.get(&c)?;
        }
        Some(node_idx)
    }

    /// Every terminal word in the subtree rooted at `id`, including `id` itself.
    /// Output order is unspecified.
    pub fn words_under(&self, id: NodeId) -> Vec<WordEntry> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node_idx) = stack.pop() {
            let Some(node) = self.nodes.get(node_idx) else {
                continue;
            };
            if let Some(entry) = node.entry() {
                out.push(entry);
            }
            stack.extend(node.children.values().copied());
        }
        out
    }

    /// Top `limit` completions of `prefix`, frequency descending with a
    /// lexicographic tiebreak on the canonical form.
    pub fn get_suggestions(&self, prefix: &str, limit: usize) -> Vec<WordEntry> {
        if prefix.is_empty() {
            return vec![];
        }
        let Some(node_idx) = self.node_for(prefix) else {
            return vec![];
        };

        let mut words = self.words_under(node_idx);
        rank_by_frequency(&mut words);
        words.truncate(limit);
        words
    }

    /// Stored frequency of an exact match, 0 when absent.
    pub fn frequency_of(&self, word: &str) -> u64 {
        if word.is_empty() {
            return 0;
        }
        self.node_for(word)
            .map(|id| &self.nodes[id])
            .filter(|node| node.is_terminal)
            .map(|node| node.frequency)
            .unwrap_or(0)
    }
}
