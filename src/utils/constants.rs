//! Shared constants for the diff engine
//!
//! Id prefixes and default limits used across chunking, table alignment
//! and configuration, kept here to avoid magic strings.

/// Prefix of positional chunk ids (`chunk-0`, `chunk-1`, ...)
pub const CHUNK_ID_PREFIX: &str = "chunk-";

/// Prefix of row group ids (`unchanged-2-5`, `unchanged-7-end`)
pub const GROUP_ID_PREFIX: &str = "unchanged-";

/// Suffix used in place of the end index for a trailing row group
pub const TRAILING_GROUP_SUFFIX: &str = "end";

/// Maximum cells (`max_rows * max_cols`) aligned as a grid before a table
/// pair falls back to an opaque text diff.
///
/// Limit: 100,000 cells. Every cell of a changed row runs its own word
/// diff, so this bounds the total number of word diffs per table.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 100_000;
