// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value: {0}")]
    InvalidConfigValue(String),
    #[error("unknown configuration: {0}")]
    UnknownConfigKey(String),
    #[error("invalid config command")]
    MissingConfigValue,
}

impl AutocompleteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;
