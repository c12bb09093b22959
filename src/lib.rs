pub mod assembler;
pub mod chunking;
pub mod config;
pub mod errors;
pub mod model;
pub mod table;
pub mod text;
pub mod utils;

pub use assembler::{HtmlDiffer, diff_html};
pub use chunking::{Chunk, ChunkKind, ChunkMatching, ChunkPair, MatchAmbiguity, match_chunks, split_html_into_chunks};
pub use config::{DiffAlgorithm, DiffConfig, DiffConfigBuilder};
pub use errors::{DiffError, DiffResult};
pub use model::{ChunkChange, ChunkDiff, DiffModel, DiffSummary, ExpandState};
pub use table::{
    CellDiff, ChangedRow, RowGroup, RowMatrix, RowStatus, TableAligner, TableDiff, TableRow,
    align_cell, classify_rows, extract_rows,
};
pub use text::{DiffKind, DiffOp, HtmlEntityDecoder, TextDecoder, WordDiffer, diff_words};
