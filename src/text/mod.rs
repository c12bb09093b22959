//! Text-level comparison: entity decoding and word diffing.
//!
//! Cell contents and text chunks are compared as decoded text at word
//! granularity. Whitespace runs are tokens of their own, so the resulting
//! operations reconstruct both inputs byte for byte.

pub mod decoder;
pub mod word_diff;

pub use decoder::{HtmlEntityDecoder, TextDecoder, decode_html_entities_text};
pub use word_diff::{DiffKind, DiffOp, WordDiffer, diff_words, reconstruct_new, reconstruct_old};
