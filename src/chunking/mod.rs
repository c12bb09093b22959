//! Splitting rich-text HTML into table and text chunks.
//!
//! A document is cut at top-level `<table>...</table>` blocks. The match is
//! non-greedy, so the first `</table>` closes a block; nested tables are not
//! recognised as such. Everything between blocks is a text chunk.

pub mod matcher;

pub use matcher::{ChunkMatching, ChunkPair, MatchAmbiguity, match_chunks};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::utils::CHUNK_ID_PREFIX;

static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<table.*?</table>")
        .expect("BUG: hardcoded table block regex is statically valid")
});

/// Type of a top-level chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    Table,
    Text,
}

/// A trimmed top-level HTML fragment with a positional id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub content: String,
    pub id: String,
}

impl Chunk {
    #[must_use]
    pub fn is_table(&self) -> bool {
        self.kind == ChunkKind::Table
    }
}

/// Split an HTML document into ordered chunks.
///
/// The split sequence alternates text and table pieces, always starting
/// with a (possibly empty) text piece. Ids count every piece of that
/// sequence, so `chunk-<n>` stays the same whether or not the empty pieces
/// around it survive trimming. An unterminated `<table` never matches and
/// stays part of the surrounding text.
///
/// # Examples
///
/// ```
/// # use kodegen_tools_htmldiff::chunking::{split_html_into_chunks, ChunkKind};
/// let chunks = split_html_into_chunks("<p>intro</p><table><tr><td>a</td></tr></table>");
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].kind, ChunkKind::Text);
/// assert_eq!(chunks[0].id, "chunk-0");
/// assert_eq!(chunks[1].kind, ChunkKind::Table);
/// assert_eq!(chunks[1].id, "chunk-1");
/// ```
#[must_use]
pub fn split_html_into_chunks(html: &str) -> Vec<Chunk> {
    if html.is_empty() {
        return Vec::new();
    }

    let mut pieces: Vec<(ChunkKind, &str)> = Vec::new();
    let mut cursor = 0;
    for block in TABLE_BLOCK.find_iter(html) {
        pieces.push((ChunkKind::Text, &html[cursor..block.start()]));
        pieces.push((ChunkKind::Table, block.as_str()));
        cursor = block.end();
    }
    pieces.push((ChunkKind::Text, &html[cursor..]));

    let chunks: Vec<Chunk> = pieces
        .into_iter()
        .enumerate()
        .filter_map(|(index, (kind, piece))| {
            let content = piece.trim();
            (!content.is_empty()).then(|| Chunk {
                kind,
                content: content.to_string(),
                id: format!("{CHUNK_ID_PREFIX}{index}"),
            })
        })
        .collect();

    tracing::debug!(
        html_len = html.len(),
        chunks = chunks.len(),
        tables = chunks.iter().filter(|c| c.is_table()).count(),
        "split html into chunks"
    );
    chunks
}
