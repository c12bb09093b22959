//! The diff model handed to the presentation layer.
//!
//! A `DiffModel` lists one node per chunk of the new document, in document
//! order, followed by the old chunks that found no counterpart. It is
//! rebuilt from scratch on every comparison and derives `Serialize` so a
//! renderer can consume it as JSON.

pub mod expand;
pub mod summary;

pub use expand::ExpandState;
pub use summary::DiffSummary;

use serde::Serialize;

use crate::chunking::{Chunk, ChunkKind, MatchAmbiguity};
use crate::errors::DiffResult;
use crate::table::TableDiff;
use crate::text::DiffOp;

/// How a new chunk differs from its paired old chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChunkChange {
    /// Row-aligned table comparison
    Table(TableDiff),
    /// Word diff of a changed or added chunk
    Text { ops: Vec<DiffOp> },
    /// Text identical on both sides, collapsible as a whole.
    ///
    /// `ops` is only filled (a single `Equal` op) when the caller's expand
    /// state marks the chunk as expanded.
    Unchanged {
        expanded: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        ops: Option<Vec<DiffOp>>,
    },
}

/// Diff node for one chunk of the new document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkDiff {
    /// Id of the new chunk
    pub id: String,
    /// Id of the paired old chunk, `None` for a pure addition
    pub old_id: Option<String>,
    pub kind: ChunkKind,
    pub change: ChunkChange,
}

impl ChunkDiff {
    #[must_use]
    pub fn is_addition(&self) -> bool {
        self.old_id.is_none()
    }

    /// True unless the chunk is identical to its counterpart
    #[must_use]
    pub fn has_changes(&self) -> bool {
        match &self.change {
            ChunkChange::Unchanged { .. } => false,
            ChunkChange::Table(table) => self.is_addition() || table.has_changes(),
            ChunkChange::Text { ops } => self.is_addition() || ops.iter().any(DiffOp::is_change),
        }
    }
}

/// Complete comparison of two documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffModel {
    pub chunks: Vec<ChunkDiff>,
    /// Old chunks with no counterpart, in old-document order
    pub removed: Vec<Chunk>,
    /// Chunk kinds whose positional pairing may not reflect intent
    pub ambiguities: Vec<MatchAmbiguity>,
}

impl DiffModel {
    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_model(self)
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.removed.is_empty() || self.chunks.iter().any(ChunkDiff::has_changes)
    }

    /// Serialize the model for a renderer.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::Json` if serialization fails.
    pub fn to_json(&self) -> DiffResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
