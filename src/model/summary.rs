//! Counts over a diff model, for headers like "3 rows changed".

use serde::Serialize;

use super::{ChunkChange, DiffModel};
use crate::table::{CellDiff, TableRow};
use crate::text::{DiffKind, DiffOp};

/// Aggregate statistics of one comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added_chunks: usize,
    pub removed_chunks: usize,
    pub changed_chunks: usize,
    pub unchanged_chunks: usize,
    pub changed_rows: usize,
    pub unchanged_rows: usize,
    pub removed_cells: usize,
    /// `Insert` ops across text chunks and table cells
    pub inserted_segments: usize,
    /// `Delete` ops across text chunks and table cells
    pub deleted_segments: usize,
}

impl DiffSummary {
    #[must_use]
    pub fn from_model(model: &DiffModel) -> Self {
        let mut summary = DiffSummary {
            removed_chunks: model.removed.len(),
            ..DiffSummary::default()
        };

        for chunk in &model.chunks {
            if chunk.is_addition() {
                summary.added_chunks += 1;
            } else if chunk.has_changes() {
                summary.changed_chunks += 1;
            } else {
                summary.unchanged_chunks += 1;
            }

            match &chunk.change {
                ChunkChange::Text { ops } => summary.count_ops(ops),
                ChunkChange::Unchanged { .. } => {}
                ChunkChange::Table(table) => {
                    for row in &table.rows {
                        match row {
                            TableRow::Group(group) => summary.unchanged_rows += group.len(),
                            TableRow::Changed(changed) => {
                                summary.changed_rows += 1;
                                for cell in &changed.cells {
                                    match cell {
                                        CellDiff::Removed { .. } => summary.removed_cells += 1,
                                        CellDiff::Diff { ops } => summary.count_ops(ops),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        summary
    }

    fn count_ops(&mut self, ops: &[DiffOp]) {
        for op in ops {
            match op.kind {
                DiffKind::Insert => self.inserted_segments += 1,
                DiffKind::Delete => self.deleted_segments += 1,
                DiffKind::Equal => {}
            }
        }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.added_chunks + self.removed_chunks + self.changed_chunks > 0
    }
}
