//! Per-cell comparison for a changed row.

use serde::Serialize;

use crate::text::{DiffOp, WordDiffer};

/// Outcome for one column of a changed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellDiff {
    /// The new cell is gone; the old content is shown as removed, undiffed
    Removed { content: String },
    /// Word diff of old (empty when absent) against new content
    Diff { ops: Vec<DiffOp> },
}

impl CellDiff {
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, CellDiff::Removed { .. })
    }

    /// Word-diff ops, empty for a removed cell
    #[must_use]
    pub fn ops(&self) -> &[DiffOp] {
        match self {
            CellDiff::Diff { ops } => ops,
            CellDiff::Removed { .. } => &[],
        }
    }
}

/// Compare the cells at one row/column position.
///
/// An absent or empty new cell facing non-empty old content is a removal.
/// Otherwise the cell is word-diffed, with an absent old cell read as
/// empty so the whole new content comes out as an insert.
#[must_use]
pub fn align_cell(old_cell: Option<&str>, new_cell: Option<&str>, differ: &WordDiffer) -> CellDiff {
    let old = old_cell.unwrap_or_default();
    let new = new_cell.unwrap_or_default();

    if new.is_empty() && !old.is_empty() {
        return CellDiff::Removed {
            content: old.to_string(),
        };
    }
    CellDiff::Diff {
        ops: differ.diff_text(old, new),
    }
}
