//! Configuration module for document comparison
//!
//! This module provides the `DiffConfig` struct and its builder for tuning
//! the word-diff primitive and the table alignment limits.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::DiffConfigBuilder;
pub use types::{DiffAlgorithm, DiffConfig};
