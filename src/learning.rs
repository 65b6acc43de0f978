// File: src/learning.rs
use crate::core::{context::ContextModel, trie::PrefixTrie};

/// Vocabulary used when no dictionary file is supplied.
pub const DEFAULT_DICTIONARY: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "I",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "Apple", "banana", "Cat", "dog", "Elephant",
];

/// Sentences used to seed bigrams when no corpus file is supplied.
pub const DEFAULT_CORPUS: &[&str] = &[
    "the cat sat on the mat",
    "I have a dog and a cat",
    "Apple is a fruit",
    "he is not at home",
    "you do it for me",
];

/// How a corpus line is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenization {
    /// Lower-case, split on whitespace. Every token is indexed.
    #[default]
    Whitespace,
    /// Lower-case, drop everything outside `[a-z ]`, split on whitespace.
    /// Tokens are indexed once per pair they take part in.
    Cleaned,
}

impl Tokenization {
    pub fn tokenize(self, line: &str) -> Vec<String> {
        let lowered = line.to_lowercase();
        match self {
            Tokenization::Whitespace => lowered.split_whitespace().map(String::from).collect(),
            Tokenization::Cleaned => lowered
                .chars()
                .filter(|c| c.is_ascii_lowercase() || *c == ' ')
                .collect::<String>()
                .split_whitespace()
                .map(String::from)
                .collect(),
        }
    }
}

pub struct LearningEngine {
    tokenization: Tokenization,
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new(Tokenization::default())
    }
}

impl LearningEngine {
    pub fn new(tokenization: Tokenization) -> Self {
        Self { tokenization }
    }

    pub fn tokenization(&self) -> Tokenization {
        self.tokenization
    }

    /// Feeds one corpus line into the vocabulary and the bigram table.
    /// Returns the number of pairs counted.
    pub fn learn_line(
        &self,
        trie: &mut PrefixTrie,
        context_model: &mut ContextModel,
        line: &str,
    ) -> usize {
        let tokens = self.tokenization.tokenize(line);
        let pairs = tokens.len().saturating_sub(1);

        match self.tokenization {
            Tokenization::Whitespace => {
                for token in &tokens {
                    trie.insert(token);
                }
            }
            // Both sides of every pair, so interior tokens are counted twice.
            Tokenization::Cleaned => {
                for pair in tokens.windows(2) {
                    trie.insert(&pair[0]);
                    trie.insert(&pair[1]);
                }
            }
        }

        context_model.add_sequence(&tokens);
        pairs
    }

    /// Loads the built-in sentences. Always uses whitespace tokenization.
    pub fn learn_default_corpus(trie: &mut PrefixTrie, context_model: &mut ContextModel) {
        let learner = LearningEngine::new(Tokenization::Whitespace);
        let pairs: usize = DEFAULT_CORPUS
            .iter()
            .map(|sentence| learner.learn_line(trie, context_model, sentence))
            .sum();
        log::info!("seeded {} bigrams from built-in corpus", pairs);
    }
}

pub fn load_default_dictionary(trie: &mut PrefixTrie) {
    for word in DEFAULT_DICTIONARY {
        trie.insert(word);
    }
    log::info!("loaded {} built-in dictionary words", DEFAULT_DICTIONARY.len());
}
