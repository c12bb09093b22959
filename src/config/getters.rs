//! Getter methods for `DiffConfig`

use super::types::{DiffAlgorithm, DiffConfig};

impl DiffConfig {
    #[must_use]
    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub fn decode_entities(&self) -> bool {
        self.decode_entities
    }

    #[must_use]
    pub fn max_table_cells(&self) -> Option<usize> {
        self.max_table_cells
    }
}
