// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod session;
pub mod terminal;
pub use crate::core::engine::AnalysisEngine;
pub use crate::error::AnalysisError;
