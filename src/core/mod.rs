// src/core/mod.rs

pub mod alphabet;
pub mod converter;
pub mod engine;
pub mod lexicon;
pub mod numeric;
pub mod text;
pub mod types;
