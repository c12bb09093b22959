//! Whole-document comparison.
//!
//! Both documents are chunked, new chunks are paired with old chunks of the
//! same kind, and each pair is dispatched to the table aligner or the word
//! differ. Old chunks left unpaired are appended as pure removals without
//! further diffing.

use crate::chunking::{Chunk, ChunkKind, ChunkPair, match_chunks, split_html_into_chunks};
use crate::config::DiffConfig;
use crate::model::{ChunkChange, ChunkDiff, DiffModel, ExpandState};
use crate::table::{TableAligner, extract_rows, grid_dimensions};
use crate::text::{TextDecoder, WordDiffer};

/// Compares rich-text HTML documents.
///
/// Holds no per-comparison state; one instance can serve any number of
/// comparisons.
#[derive(Debug, Default)]
pub struct HtmlDiffer {
    config: DiffConfig,
    differ: WordDiffer,
}

impl HtmlDiffer {
    #[must_use]
    pub fn new(config: DiffConfig) -> Self {
        let differ = WordDiffer::new(&config);
        Self { config, differ }
    }

    /// Use a custom entity decoder ahead of word diffing.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl TextDecoder + 'static) -> Self {
        self.differ = self.differ.with_decoder(decoder);
        self
    }

    #[must_use]
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare two documents.
    ///
    /// `expand` is read to decide which unchanged text chunks and row
    /// groups also carry their content.
    #[must_use]
    pub fn diff(&self, old_html: &str, new_html: &str, expand: &ExpandState) -> DiffModel {
        let old_chunks = split_html_into_chunks(old_html);
        let new_chunks = split_html_into_chunks(new_html);
        let matching = match_chunks(&old_chunks, &new_chunks);

        let chunks: Vec<ChunkDiff> = matching
            .pairs
            .iter()
            .map(|pair| self.diff_pair(pair, expand))
            .collect();
        let removed: Vec<Chunk> = matching.leftover.into_iter().cloned().collect();

        tracing::debug!(
            old_chunks = old_chunks.len(),
            new_chunks = new_chunks.len(),
            removed = removed.len(),
            "assembled document diff"
        );

        DiffModel {
            chunks,
            removed,
            ambiguities: matching.ambiguities,
        }
    }

    /// Compare documents that may be absent; `None` reads as empty.
    #[must_use]
    pub fn diff_optional(&self, old_html: Option<&str>, new_html: Option<&str>, expand: &ExpandState) -> DiffModel {
        self.diff(old_html.unwrap_or_default(), new_html.unwrap_or_default(), expand)
    }

    fn diff_pair(&self, pair: &ChunkPair<'_>, expand: &ExpandState) -> ChunkDiff {
        let new = pair.new;
        let old_content = pair.old.map(|chunk| chunk.content.as_str());

        let change = match new.kind {
            ChunkKind::Table => self.diff_table(old_content.unwrap_or_default(), new, expand),
            ChunkKind::Text => match old_content {
                Some(old) if old == new.content => {
                    let expanded = expand.is_section_expanded(&new.id);
                    ChunkChange::Unchanged {
                        expanded,
                        ops: expanded.then(|| self.differ.diff_text(old, &new.content)),
                    }
                }
                old => ChunkChange::Text {
                    ops: self.differ.diff_text(old.unwrap_or_default(), &new.content),
                },
            },
        };

        ChunkDiff {
            id: new.id.clone(),
            old_id: pair.old.map(|chunk| chunk.id.clone()),
            kind: new.kind,
            change,
        }
    }

    fn diff_table(&self, old_table: &str, new: &Chunk, expand: &ExpandState) -> ChunkChange {
        let old_rows = extract_rows(old_table);
        let new_rows = extract_rows(&new.content);

        if let Some(limit) = self.config.max_table_cells() {
            let (max_rows, max_cols) = grid_dimensions(&old_rows, &new_rows);
            let cells = max_rows.saturating_mul(max_cols);
            if cells > limit {
                tracing::warn!(
                    chunk = %new.id,
                    max_rows,
                    max_cols,
                    limit,
                    "table exceeds cell limit, diffing as text"
                );
                return ChunkChange::Text {
                    ops: self.differ.diff_text(old_table, &new.content),
                };
            }
        }

        let table = TableAligner::new(&self.differ).align(&old_rows, &new_rows, |group_id| {
            expand.is_group_expanded(&new.id, group_id)
        });
        ChunkChange::Table(table)
    }
}

/// Compare two documents with the default configuration and everything
/// collapsed.
#[must_use]
pub fn diff_html(old_html: &str, new_html: &str) -> DiffModel {
    HtmlDiffer::default().diff(old_html, new_html, &ExpandState::default())
}
