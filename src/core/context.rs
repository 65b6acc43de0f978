// File: src/core/context.rs
use crate::core::types::WordEntry;
use std::collections::HashMap;

/// Bigram counts: lower-cased previous word -> next word -> occurrences.
#[derive(Debug, Clone, Default)]
pub struct ContextModel {
    bigrams: HashMap<String, HashMap<String, u64>>,
}

impl ContextModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `prev` followed by `next`. Empty tokens are skipped.
    pub fn add_pair(&mut self, prev: &str, next: &str) {
        if prev.is_empty() || next.is_empty() {
            return;
        }
        *self
            .bigrams
            .entry(prev.to_lowercase())
            .or_default()
            .entry(next.to_string())
            .or_insert(0) += 1;
    }

    /// Counts every adjacent pair in a token sequence.
    pub fn add_sequence<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for pair in tokens.windows(2) {
            self.add_pair(pair[0].as_ref(), pair[1].as_ref());
        }
    }

    /// Words observed after `prev`, if any.
    pub fn next_words(&self, prev: &str) -> Option<&HashMap<String, u64>> {
        self.bigrams.get(&prev.to_lowercase()).filter(|m| !m.is_empty())
    }

    /// How often `next` followed `prev`; 0 when never seen.
    pub fn weight(&self, prev: &str, next: &str) -> u64 {
        self.next_words(prev)
            .and_then(|m| m.get(next).or_else(|| m.get(&next.to_lowercase())))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct previous words with at least one successor.
    pub fn len(&self) -> usize {
        self.bigrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty()
    }

    /// Keeps only candidates that have followed `prev`, ordered by bigram count.
    /// The sort is stable, so equal counts keep the incoming (frequency) order.
    pub fn rank_by_context(&self, prev: &str, candidates: Vec<WordEntry>) -> Vec<(WordEntry, u64)> {
        let mut ranked: Vec<(WordEntry, u64)> = candidates
            .into_iter()
            .filter_map(|entry| {
                let weight = self.weight(prev, &entry.canonical);
                (weight > 0).then_some((entry, weight))
            })
            .collect();
        ranked.sort_by_key(|&(_, weight)| std::cmp::Reverse(weight));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_adjacent_pairs() {
        let mut model = ContextModel::new();
        model.add_sequence(&["the", "cat", "sat", "on", "the", "mat"]);
        assert_eq!(model.weight("the", "cat"), 1);
        assert_eq!(model.weight("the", "mat"), 1);
        assert_eq!(model.weight("on", "the"), 1);
        assert_eq!(model.weight("cat", "the"), 0);
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn previous_word_is_case_folded() {
        let mut model = ContextModel::new();
        model.add_pair("Hello", "world");
        model.add_pair("hello", "world");
        assert_eq!(model.weight("HELLO", "world"), 2);
        assert!(model.next_words("hello").is_some());
        assert!(model.next_words("goodbye").is_none());
    }

    #[test]
    fn next_word_lookup_falls_back_to_lower_case() {
        let mut model = ContextModel::new();
        model.add_pair("eat", "apple");
        assert_eq!(model.weight("eat", "Apple"), 1);
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let mut model = ContextModel::new();
        model.add_pair("", "x");
        model.add_pair("x", "");
        model.add_sequence::<&str>(&[]);
        model.add_sequence(&["lonely"]);
        assert!(model.is_empty());
    }

    #[test]
    fn rank_filters_and_orders_by_weight() {
        let mut model = ContextModel::new();
        for _ in 0..5 {
            model.add_pair("hello", "world");
        }
        model.add_pair("hello", "wander");
        let candidates = vec![
            WordEntry::new("wander", 9),
            WordEntry::new("wax", 4),
            WordEntry::new("world", 1),
        ];
        let ranked: Vec<(String, u64)> = model
            .rank_by_context("hello", candidates)
            .into_iter()
            .map(|(e, w)| (e.canonical, w))
            .collect();
        assert_eq!(
            ranked,
            vec![("world".to_string(), 5), ("wander".to_string(), 1)]
        );
    }
}
