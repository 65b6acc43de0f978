// src/config.rs
use crate::error::{AutocompleteError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_FUZZY_DISTANCE: usize = 1;
/// Fixed cap of the "did you mean" list.
pub const MAX_CORRECTIONS: usize = 5;

/// Per-query tuning, passed by value into every ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSettings {
    pub max_suggestions: usize,
    pub fuzzy_distance: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            fuzzy_distance: DEFAULT_FUZZY_DISTANCE,
        }
    }
}

/// Which setting a `config <key> <value>` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    MaxSuggestions,
    FuzzyDistance,
}

impl SettingKey {
    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "max" => Ok(Self::MaxSuggestions),
            "fuzzy" => Ok(Self::FuzzyDistance),
            other => Err(AutocompleteError::UnknownConfigKey(other.to_string())),
        }
    }
}

/// Runtime-adjustable settings shared between the command loop and queries.
/// Both fields sit behind one lock, so `snapshot` never mixes an old value
/// of one with a new value of the other.
#[derive(Debug)]
pub struct ConfigHandle {
    settings: RwLock<SuggestionSettings>,
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(SuggestionSettings::default())
    }
}

impl ConfigHandle {
    pub fn new(settings: SuggestionSettings) -> Self {
        Self { settings: RwLock::new(settings) }
    }

    pub fn snapshot(&self) -> SuggestionSettings {
        *self.settings.read()
    }

    pub fn set(&self, key: SettingKey, value: usize) {
        let mut settings = self.settings.write();
        match key {
            SettingKey::MaxSuggestions => settings.max_suggestions = value,
            SettingKey::FuzzyDistance => settings.fuzzy_distance = value,
        }
        log::debug!("setting {:?} = {}", key, value);
    }

    /// Replaces both settings in one step.
    pub fn replace(&self, settings: SuggestionSettings) {
        *self.settings.write() = settings;
    }

    /// Parses and applies a `config` command's arguments, e.g. `["max", "8"]`.
    /// Leaves the settings untouched on any error.
    pub fn apply_command(&self, args: &[&str]) -> Result<(SettingKey, usize)> {
        let [key, raw, ..] = args else {
            return Err(AutocompleteError::MissingConfigValue);
        };
        let key = SettingKey::parse(key)?;
        let value: usize = raw
            .parse()
            .map_err(|_| AutocompleteError::InvalidConfigValue(raw.to_string()))?;
        self.set(key, value);
        Ok((key, value))
    }
}
