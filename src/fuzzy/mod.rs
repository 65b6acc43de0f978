// src/fuzzy/mod.rs

pub mod edit_distance;
pub mod phonetic;
