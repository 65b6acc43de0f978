// File: src/fuzzy/edit_distance.rs
use crate::core::trie::PrefixTrie;
use crate::core::types::{rank_by_frequency, NodeId, WordEntry};
use std::collections::HashSet;

/// Bounded Levenshtein search over a `PrefixTrie`.
///
/// Walks the trie once, carrying one row of the edit-distance matrix per
/// visited node: row `v` at a node holds the distance between the path
/// spelled so far and every prefix of the query. Extending the path by one
/// character costs O(len(query)).
///
/// Once the full query is within `max_distance` of a path, every word below
/// that node is collected, however far its own spelling is from the query.
/// This oversamples on purpose; frequency ranking and the caller's limit
/// cut the list back down.
pub struct EditDistanceSearch<'a> {
    trie: &'a PrefixTrie,
    query: Vec<char>,
    max_distance: usize,
}

impl<'a> EditDistanceSearch<'a> {
    pub fn new(trie: &'a PrefixTrie, query: &str, max_distance: usize) -> Self {
        Self {
            trie,
            query: query.to_lowercase().chars().collect(),
            max_distance,
        }
    }

    /// Every candidate within bound, unranked and possibly repeated.
    pub fn candidates(&self) -> Vec<WordEntry> {
        let mut out = Vec::new();
        let first_row: Vec<usize> = (0..=self.query.len()).collect();
        let mut stack: Vec<(NodeId, Vec<usize>)> = vec![(self.trie.root(), first_row)];

        while let Some((node_idx, row)) = stack.pop() {
            let distance = row[self.query.len()];
            if distance <= self.max_distance {
                // The whole subtree is emitted here, so there is nothing left to descend into.
                out.extend(self.trie.words_under(node_idx));
                continue;
            }

            // Row values never decrease along a path, so no descendant can recover.
            if row.iter().copied().min().unwrap_or(0) > self.max_distance {
                continue;
            }

            for (c, child_idx) in self.trie.children(node_idx) {
                stack.push((child_idx, self.next_row(&row, c)));
            }
        }
        out
    }

    fn next_row(&self, prev: &[usize], c: char) -> Vec<usize> {
        let mut row = Vec::with_capacity(prev.len());
        row.push(prev[0] + 1);
        for (j, &q) in self.query.iter().enumerate() {
            let cost = if q == c { 0 } else { 1 };
            let value = (row[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
            row.push(value);
        }
        row
    }

    /// Deduplicated by canonical form, ranked, and cut to `limit`.
    pub fn search(&self, limit: usize) -> Vec<WordEntry> {
        let mut seen = HashSet::new();
        let mut words: Vec<WordEntry> = self
            .candidates()
            .into_iter()
            .filter(|entry| seen.insert(entry.canonical.clone()))
            .collect();
        rank_by_frequency(&mut words);
        words.truncate(limit);
        words
    }
}

/// Convenience wrapper used by the ranker.
pub fn fuzzy_suggestions(
    trie: &PrefixTrie,
    query: &str,
    max_distance: usize,
    limit: usize,
) -> Vec<WordEntry> {
    EditDistanceSearch::new(trie, query, max_distance).search(limit)
}
