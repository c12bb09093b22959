//! Fluent builder for `DiffConfig`
//!
//! Every field has a default, so the builder can be finished at any point;
//! `build()` validates the combined values.

use anyhow::{anyhow, Result};

use super::types::{DiffAlgorithm, DiffConfig};

#[derive(Debug, Clone, Default)]
pub struct DiffConfigBuilder {
    pub(crate) config: DiffConfig,
}

impl DiffConfig {
    /// Create a new builder starting from the default configuration
    #[must_use]
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder::default()
    }
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Toggle HTML entity decoding before word diffing.
    ///
    /// With decoding disabled, `&amp;` and `&` are different words.
    #[must_use]
    pub fn decode_entities(mut self, decode: bool) -> Self {
        self.config.decode_entities = decode;
        self
    }

    /// Set the grid size above which a table pair is diffed as text.
    ///
    /// Pass `None` to align tables of any size.
    #[must_use]
    pub fn max_table_cells(mut self, limit: Option<usize>) -> Self {
        self.config.max_table_cells = limit;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_table_cells` is `Some(0)`.
    pub fn build(self) -> Result<DiffConfig> {
        self.config
            .validate()
            .map_err(|e| anyhow!("{e}"))?;
        Ok(self.config)
    }
}
