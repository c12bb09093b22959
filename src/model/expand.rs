//! Caller-owned expand/collapse state.
//!
//! The presentation layer owns this state and toggles it in response to the
//! user; the engine only reads it. Unchanged text chunks are keyed by chunk
//! id. Row groups are keyed by the id of the new table chunk plus the group
//! id, because each table keeps its own set of toggles.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::DiffResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandState {
    sections: BTreeSet<String>,
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl ExpandState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state saved by the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::Json` on malformed input.
    pub fn from_json(json: &str) -> DiffResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_section(mut self, chunk_id: impl Into<String>) -> Self {
        self.sections.insert(chunk_id.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, chunk_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        self.groups
            .entry(chunk_id.into())
            .or_default()
            .insert(group_id.into());
        self
    }

    /// Flip an unchanged text chunk; returns the new expanded flag.
    pub fn toggle_section(&mut self, chunk_id: &str) -> bool {
        if self.sections.remove(chunk_id) {
            false
        } else {
            self.sections.insert(chunk_id.to_string());
            true
        }
    }

    /// Flip a row group of a table chunk; returns the new expanded flag.
    pub fn toggle_group(&mut self, chunk_id: &str, group_id: &str) -> bool {
        let groups = self.groups.entry(chunk_id.to_string()).or_default();
        let expanded = if groups.remove(group_id) {
            false
        } else {
            groups.insert(group_id.to_string());
            true
        };
        if groups.is_empty() {
            self.groups.remove(chunk_id);
        }
        expanded
    }

    #[must_use]
    pub fn is_section_expanded(&self, chunk_id: &str) -> bool {
        self.sections.contains(chunk_id)
    }

    #[must_use]
    pub fn is_group_expanded(&self, chunk_id: &str, group_id: &str) -> bool {
        self.groups
            .get(chunk_id)
            .is_some_and(|groups| groups.contains(group_id))
    }
}
