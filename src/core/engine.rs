use crate::config::{SuggestionSettings, MAX_CORRECTIONS};
use crate::core::{context::ContextModel, trie::PrefixTrie, types::WordEntry};
use crate::error::Result;
use crate::fuzzy::{edit_distance::fuzzy_suggestions, phonetic::phonetic_suggestions};
use crate::learning::{load_default_dictionary, LearningEngine, Tokenization};
use crate::persistence::{load_corpus, load_dictionary};
use std::collections::HashSet;
use std::path::PathBuf;

/// Where an engine's vocabulary and bigrams come from. Every field is
/// optional; missing sources fall back to the built-in data.
#[derive(Debug, Clone, Default)]
pub struct EngineSources {
    /// Primary word list. Failing to read it is fatal.
    pub dictionary: Option<PathBuf>,
    /// Words the user added in earlier sessions. Tolerated if missing.
    pub user_dictionary: Option<PathBuf>,
    /// Sentences for bigram counts. Falls back to the built-in corpus on error.
    pub corpus: Option<PathBuf>,
    pub tokenization: Tokenization,
}

/// Ordered, de-duplicated accumulator for merged suggestion lists.
struct Merged {
    words: Vec<String>,
    seen: HashSet<String>,
    cap: usize,
}

impl Merged {
    fn new(cap: usize) -> Self {
        Self { words: Vec::new(), seen: HashSet::new(), cap }
    }

    fn is_full(&self) -> bool {
        self.words.len() >= self.cap
    }

    fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.words.len())
    }

    fn extend(&mut self, entries: Vec<WordEntry>) {
        for entry in entries {
            if self.is_full() {
                break;
            }
            if self.seen.insert(entry.canonical.clone()) {
                self.words.push(entry.canonical);
            }
        }
    }
}

// The engine composes the trie, the bigram model and the approximate matchers.
pub struct AutocompleteEngine {
    pub trie: PrefixTrie,
    pub context_model: ContextModel,
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteEngine {
    /// An empty engine with no vocabulary.
    pub fn new() -> Self {
        Self {
            trie: PrefixTrie::new(),
            context_model: ContextModel::new(),
        }
    }

    /// Built-in dictionary and corpus; usable with zero configuration.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        load_default_dictionary(&mut engine.trie);
        LearningEngine::learn_default_corpus(&mut engine.trie, &mut engine.context_model);
        engine
    }

    pub fn from_sources(sources: &EngineSources) -> Result<Self> {
        let mut engine = Self::new();

        match &sources.dictionary {
            Some(path) => {
                load_dictionary(&mut engine.trie, path)?;
            }
            None => load_default_dictionary(&mut engine.trie),
        }

        if let Some(path) = &sources.user_dictionary {
            if path.exists() {
                if let Err(e) = load_dictionary(&mut engine.trie, path) {
                    log::warn!("skipping user dictionary: {}", e);
                }
            } else {
                log::debug!("no user dictionary at {}", path.display());
            }
        }

        let learner = LearningEngine::new(sources.tokenization);
        let corpus_loaded = match &sources.corpus {
            Some(path) => {
                match load_corpus(&learner, &mut engine.trie, &mut engine.context_model, path) {
                    Ok(_) => true,
                    Err(e) => {
                        log::warn!("falling back to built-in corpus: {}", e);
                        false
                    }
                }
            }
            None => false,
        };
        if !corpus_loaded {
            LearningEngine::learn_default_corpus(&mut engine.trie, &mut engine.context_model);
        }

        log::info!(
            "index ready: {} words, {} bigram heads",
            engine.trie.word_count(),
            engine.context_model.len()
        );
        Ok(engine)
    }

    /// Adds a word to the live index. Returns false for empty input.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.trie.insert(word);
        true
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.trie.search(word)
    }

    /// Ranked suggestions for `prefix`, optionally steered by the previous word.
    pub fn get_suggestions(
        &self,
        prefix: &str,
        context: Option<&str>,
        settings: &SuggestionSettings,
    ) -> Vec<String> {
        if prefix.is_empty() {
            return vec![];
        }

        if let Some(context) = context.filter(|c| !c.is_empty()) {
            let suggestions = self.context_suggestions(prefix, context, settings);
            if !suggestions.is_empty() {
                log::debug!("context path for '{}' after '{}'", prefix, context);
                return suggestions;
            }
        }
        self.regular_suggestions(prefix, settings)
    }

    fn context_suggestions(
        &self,
        prefix: &str,
        context: &str,
        settings: &SuggestionSettings,
    ) -> Vec<String> {
        if self.context_model.next_words(context).is_none() {
            return vec![];
        }

        let exact = self.trie.get_suggestions(prefix, usize::MAX);
        self.context_model
            .rank_by_context(context, exact)
            .into_iter()
            .take(settings.max_suggestions)
            .map(|(entry, _)| entry.canonical)
            .collect()
    }

    /// Exact matches first, topped up with fuzzy and then phonetic matches.
    fn regular_suggestions(&self, prefix: &str, settings: &SuggestionSettings) -> Vec<String> {
        let max = settings.max_suggestions;
        let exact = self.trie.get_suggestions(prefix, max);
        if exact.len() >= max {
            return exact.into_iter().map(|e| e.canonical).collect();
        }

        let mut merged = Merged::new(max);
        merged.extend(exact);

        let fuzzy = fuzzy_suggestions(&self.trie, prefix, settings.fuzzy_distance, merged.remaining());
        merged.extend(fuzzy);

        if !merged.is_full() {
            let phonetic = phonetic_suggestions(&self.trie, prefix, merged.remaining());
            merged.extend(phonetic);
        }

        merged.words
    }

    /// "Did you mean" candidates: fuzzy then phonetic, at most five.
    pub fn get_corrections(&self, prefix: &str, settings: &SuggestionSettings) -> Vec<String> {
        if prefix.is_empty() {
            return vec![];
        }

        let mut merged = Merged::new(MAX_CORRECTIONS);
        merged.extend(fuzzy_suggestions(
            &self.trie,
            prefix,
            settings.fuzzy_distance,
            MAX_CORRECTIONS,
        ));
        merged.extend(phonetic_suggestions(&self.trie, prefix, MAX_CORRECTIONS));
        merged.words
    }
}
