//! Table comparison: row extraction, positional row alignment and
//! grouping of unchanged rows.
//!
//! Rows are compared by index, not by content similarity. A row inserted
//! near the top therefore marks every row below it as changed; that is the
//! intended trade-off for predictable output.

pub mod aligner;
pub mod cell;
pub mod extractor;

pub use aligner::{RowStatus, TableAligner, classify_rows, grid_dimensions};
pub use cell::{CellDiff, align_cell};
pub use extractor::{RowMatrix, extract_rows};

use serde::Serialize;

/// A maximal run of positionally unchanged rows `[start, end)`.
///
/// `rows` holds the old document's rows padded to the table width, and is
/// only filled when the caller's expand state marks the group as expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    pub start: usize,
    pub end: usize,
    pub group_id: String,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,
}

impl RowGroup {
    /// Number of rows folded into this group
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A changed, added or removed row, widened to the table width
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedRow {
    pub index: usize,
    pub cells: Vec<CellDiff>,
}

/// One entry of an aligned table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableRow {
    Group(RowGroup),
    Changed(ChangedRow),
}

/// Aligned rows of one old/new table pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableDiff {
    pub max_rows: usize,
    pub max_cols: usize,
    pub rows: Vec<TableRow>,
}

impl TableDiff {
    pub fn groups(&self) -> impl Iterator<Item = &RowGroup> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Group(group) => Some(group),
            TableRow::Changed(_) => None,
        })
    }

    pub fn changed_rows(&self) -> impl Iterator<Item = &ChangedRow> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Changed(changed) => Some(changed),
            TableRow::Group(_) => None,
        })
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.changed_rows().next().is_some()
    }
}
