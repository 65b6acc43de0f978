// src/core/types.rs

/// Index of a node inside the trie's node arena. The root is always 0.
pub type NodeId = usize;

/// A terminal word as it is reported back out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Most recently inserted original-casing spelling.
    pub canonical: String,
    /// Number of times the word was inserted (case-insensitive).
    pub frequency: u64,
}

impl WordEntry {
    pub fn new(canonical: impl Into<String>, frequency: u64) -> Self {
        Self {
            canonical: canonical.into(),
            frequency,
        }
    }
}

/// Sorts by frequency descending, then canonical form ascending.
pub fn rank_by_frequency(entries: &mut [WordEntry]) {
    entries.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.canonical.cmp(&b.canonical))
    });
}
