//! Deterministic text utilities and article processing.
//!
//! `article-core` provides slug generation, excerpt truncation,
//! capitalization and word counting, plus a thin layer that applies them to
//! article records and looks records up by slug. Every operation is a pure
//! function: identical inputs always produce identical outputs.

pub mod content;
pub mod text;
pub mod types;
