//! Pairing new chunks with old chunks of the same kind.
//!
//! Each new chunk takes the first old chunk of its kind that no earlier new
//! chunk has taken. Since taking always happens front to back, the taken
//! chunks of a kind form a prefix of that kind's chunks, and one queue per
//! kind replaces any scan-and-remove over a shared list. Inputs are never
//! mutated.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use super::{Chunk, ChunkKind};

/// A new chunk and the old chunk it was paired with, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPair<'a> {
    pub old: Option<&'a Chunk>,
    pub new: &'a Chunk,
}

impl ChunkPair<'_> {
    /// True when the new chunk had no old chunk left to pair with
    #[must_use]
    pub fn is_addition(&self) -> bool {
        self.old.is_none()
    }
}

/// Pairing may be wrong for this kind: at least one side holds several
/// chunks of it, and pairing is positional rather than by content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchAmbiguity {
    pub kind: ChunkKind,
    pub old_count: usize,
    pub new_count: usize,
}

/// Result of matching two chunk sequences
#[derive(Debug, Clone, Default)]
pub struct ChunkMatching<'a> {
    /// One pair per new chunk, in new-document order
    pub pairs: Vec<ChunkPair<'a>>,
    /// Old chunks never paired, in old-document order
    pub leftover: Vec<&'a Chunk>,
    pub ambiguities: Vec<MatchAmbiguity>,
}

/// Match new chunks to old chunks by kind, first available wins.
#[must_use]
pub fn match_chunks<'a>(old_chunks: &'a [Chunk], new_chunks: &'a [Chunk]) -> ChunkMatching<'a> {
    let mut queues: BTreeMap<ChunkKind, VecDeque<usize>> = BTreeMap::new();
    for (index, chunk) in old_chunks.iter().enumerate() {
        queues.entry(chunk.kind).or_default().push_back(index);
    }

    let ambiguities = find_ambiguities(old_chunks, new_chunks);

    let pairs: Vec<ChunkPair<'a>> = new_chunks
        .iter()
        .map(|new| {
            let old = queues
                .get_mut(&new.kind)
                .and_then(VecDeque::pop_front)
                .map(|index| &old_chunks[index]);
            ChunkPair { old, new }
        })
        .collect();

    let mut remaining: Vec<usize> = queues.into_values().flatten().collect();
    remaining.sort_unstable();
    let leftover: Vec<&'a Chunk> = remaining.into_iter().map(|index| &old_chunks[index]).collect();

    tracing::debug!(
        pairs = pairs.len(),
        additions = pairs.iter().filter(|p| p.is_addition()).count(),
        removals = leftover.len(),
        "matched chunks"
    );
    for ambiguity in &ambiguities {
        tracing::debug!(
            kind = ?ambiguity.kind,
            old_count = ambiguity.old_count,
            new_count = ambiguity.new_count,
            "positional chunk pairing may mispair reordered chunks"
        );
    }

    ChunkMatching {
        pairs,
        leftover,
        ambiguities,
    }
}

fn find_ambiguities(old_chunks: &[Chunk], new_chunks: &[Chunk]) -> Vec<MatchAmbiguity> {
    let count = |chunks: &[Chunk], kind: ChunkKind| chunks.iter().filter(|c| c.kind == kind).count();

    [ChunkKind::Table, ChunkKind::Text]
        .into_iter()
        .filter_map(|kind| {
            let old_count = count(old_chunks, kind);
            let new_count = count(new_chunks, kind);
            (old_count > 0 && new_count > 0 && old_count.max(new_count) > 1).then_some(
                MatchAmbiguity {
                    kind,
                    old_count,
                    new_count,
                },
            )
        })
        .collect()
}
