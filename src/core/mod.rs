// src/core/mod.rs

pub mod context;
pub mod engine;
pub mod shared;
pub mod trie;
pub mod types;
