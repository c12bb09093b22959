//! Positional alignment of two row matrices.
//!
//! Row `i` of the old table is compared with row `i` of the new table. Rows
//! that are equal element by element (two absent rows included) are
//! unchanged and folded into `RowGroup`s; every other row is emitted on its
//! own, widened to the table width, with each column passed through
//! `align_cell`.

use serde::Serialize;

use super::cell::align_cell;
use super::{ChangedRow, RowGroup, TableDiff, TableRow};
use crate::text::WordDiffer;
use crate::utils::{GROUP_ID_PREFIX, TRAILING_GROUP_SUFFIX};

/// Classification of one row index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Unchanged,
    /// Differs, or exists on one side only
    Changed,
}

fn row_at(rows: &[Vec<String>], index: usize) -> &[String] {
    rows.get(index).map(Vec::as_slice).unwrap_or_default()
}

/// `(max_rows, max_cols)` over both matrices; `(0, 0)` when both are empty.
#[must_use]
pub fn grid_dimensions(old_rows: &[Vec<String>], new_rows: &[Vec<String>]) -> (usize, usize) {
    let max_rows = old_rows.len().max(new_rows.len());
    let max_cols = old_rows
        .iter()
        .chain(new_rows)
        .map(Vec::len)
        .max()
        .unwrap_or(0);
    (max_rows, max_cols)
}

/// Classify every row index in `[0, max_rows)`.
#[must_use]
pub fn classify_rows(old_rows: &[Vec<String>], new_rows: &[Vec<String>]) -> Vec<RowStatus> {
    let (max_rows, _) = grid_dimensions(old_rows, new_rows);
    (0..max_rows)
        .map(|index| {
            if row_at(old_rows, index) == row_at(new_rows, index) {
                RowStatus::Unchanged
            } else {
                RowStatus::Changed
            }
        })
        .collect()
}

/// Id of a group closed by a changed row at `end`, or of the trailing group
/// when `end` is `None`.
fn group_id(start: usize, end: Option<usize>) -> String {
    match end {
        Some(end) => format!("{GROUP_ID_PREFIX}{start}-{end}"),
        None => format!("{GROUP_ID_PREFIX}{start}-{TRAILING_GROUP_SUFFIX}"),
    }
}

/// Aligns table pairs cell by cell with a shared word differ
#[derive(Debug, Clone, Copy)]
pub struct TableAligner<'a> {
    differ: &'a WordDiffer,
}

impl<'a> TableAligner<'a> {
    #[must_use]
    pub fn new(differ: &'a WordDiffer) -> Self {
        Self { differ }
    }

    /// Align two row matrices.
    ///
    /// `is_expanded` is consulted once per group with its `group_id`; an
    /// expanded group also carries its rows. The returned rows cover
    /// `[0, max_rows)` exactly once, in order.
    pub fn align(
        &self,
        old_rows: &[Vec<String>],
        new_rows: &[Vec<String>],
        is_expanded: impl Fn(&str) -> bool,
    ) -> TableDiff {
        let (max_rows, max_cols) = grid_dimensions(old_rows, new_rows);
        let statuses = classify_rows(old_rows, new_rows);

        let mut rows: Vec<TableRow> = Vec::new();
        let mut unchanged_start: Option<usize> = None;

        for (index, status) in statuses.iter().enumerate() {
            if *status == RowStatus::Unchanged {
                unchanged_start.get_or_insert(index);
                continue;
            }

            if let Some(start) = unchanged_start.take() {
                let id = group_id(start, Some(index));
                rows.push(TableRow::Group(self.group(old_rows, start, index, id, max_cols, &is_expanded)));
            }
            rows.push(TableRow::Changed(self.changed_row(
                index,
                row_at(old_rows, index),
                row_at(new_rows, index),
                max_cols,
            )));
        }

        // A run reaching the last row has no changed row to close it.
        if let Some(start) = unchanged_start {
            let id = group_id(start, None);
            rows.push(TableRow::Group(self.group(old_rows, start, max_rows, id, max_cols, &is_expanded)));
        }

        tracing::debug!(
            max_rows,
            max_cols,
            changed = statuses.iter().filter(|s| **s == RowStatus::Changed).count(),
            "aligned table rows"
        );

        TableDiff {
            max_rows,
            max_cols,
            rows,
        }
    }

    fn group(
        &self,
        old_rows: &[Vec<String>],
        start: usize,
        end: usize,
        group_id: String,
        max_cols: usize,
        is_expanded: &impl Fn(&str) -> bool,
    ) -> RowGroup {
        let expanded = is_expanded(&group_id);
        let rows = if expanded {
            (start..end)
                .map(|index| {
                    let row = row_at(old_rows, index);
                    (0..max_cols)
                        .map(|col| row.get(col).cloned().unwrap_or_default())
                        .collect()
                })
                .collect()
        } else {
            Vec::new()
        };

        RowGroup {
            start,
            end,
            group_id,
            expanded,
            rows,
        }
    }

    fn changed_row(&self, index: usize, old_row: &[String], new_row: &[String], max_cols: usize) -> ChangedRow {
        let cells = (0..max_cols)
            .map(|col| {
                align_cell(
                    old_row.get(col).map(String::as_str),
                    new_row.get(col).map(String::as_str),
                    self.differ,
                )
            })
            .collect();
        ChangedRow { index, cells }
    }
}
