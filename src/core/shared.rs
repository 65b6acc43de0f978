// File: src/core/shared.rs
use crate::config::{ConfigHandle, SuggestionSettings};
use crate::core::engine::AutocompleteEngine;
use crate::persistence::append_user_word;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Thread-safe handle to one engine.
///
/// Queries take the read lock; `add_word` holds the write lock only for the
/// in-memory insert, so any query issued after it returns sees the new word.
/// The user-dictionary append happens after the lock is released.
#[derive(Clone)]
pub struct SharedEngine {
    engine: Arc<RwLock<AutocompleteEngine>>,
    config: Arc<ConfigHandle>,
    user_dictionary: Option<PathBuf>,
}

impl SharedEngine {
    pub fn new(engine: AutocompleteEngine, settings: SuggestionSettings) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            config: Arc::new(ConfigHandle::new(settings)),
            user_dictionary: None,
        }
    }

    /// Words passed to `add_word` are also appended to this file.
    pub fn with_user_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_dictionary = Some(path.into());
        self
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    pub fn query(&self, prefix: &str, context: Option<&str>) -> Vec<String> {
        let settings = self.config.snapshot();
        self.engine.read().get_suggestions(prefix, context, &settings)
    }

    pub fn corrections(&self, prefix: &str) -> Vec<String> {
        let settings = self.config.snapshot();
        self.engine.read().get_corrections(prefix, &settings)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.engine.read().contains_word(word)
    }

    pub fn frequency_of(&self, word: &str) -> u64 {
        self.engine.read().trie.frequency_of(word)
    }

    /// Inserts into the live index, then records the word in the user dictionary.
    /// A failed append is logged; the in-memory insert stands.
    pub fn add_word(&self, word: &str) -> bool {
        let added = self.engine.write().add_word(word);
        if !added {
            return false;
        }

        if let Some(path) = &self.user_dictionary {
            if let Err(e) = append_user_word(path, word) {
                log::warn!("error writing to user dictionary: {}", e);
            }
        }
        true
    }
}
