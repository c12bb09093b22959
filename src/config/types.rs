//! Core configuration types for document comparison
//!
//! This module contains the main `DiffConfig` struct and the word-diff
//! algorithm selector.

use serde::{Deserialize, Serialize};

use crate::errors::{DiffError, DiffResult};
use crate::utils::DEFAULT_MAX_TABLE_CELLS;

/// Algorithm used by the word-diff primitive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) diff
    #[default]
    Myers,
    /// Patience diff, anchors on unique tokens
    Patience,
    /// Longest common subsequence table
    Lcs,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

/// Main configuration struct for document comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub(crate) algorithm: DiffAlgorithm,

    /// Resolve HTML entities before word diffing.
    ///
    /// Default: true
    pub(crate) decode_entities: bool,

    /// Maximum `max_rows * max_cols` aligned as a grid.
    ///
    /// Table pairs above this limit are diffed as opaque text instead of
    /// cell by cell. `None` disables the guard.
    ///
    /// Default: 100,000 cells
    pub(crate) max_table_cells: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            decode_entities: true,
            max_table_cells: Some(DEFAULT_MAX_TABLE_CELLS),
        }
    }
}

impl DiffConfig {
    /// Load a configuration from JSON, validating it like the builder does.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::Json` on malformed JSON and
    /// `DiffError::InvalidConfig` when a value is out of range.
    pub fn from_json(json: &str) -> DiffResult<Self> {
        let config: DiffConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> DiffResult<()> {
        if self.max_table_cells == Some(0) {
            return Err(DiffError::InvalidConfig(
                "max_table_cells must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
