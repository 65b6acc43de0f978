// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;
pub use crate::core::engine::{AutocompleteEngine, EngineSources};
pub use crate::core::shared::SharedEngine;
