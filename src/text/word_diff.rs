//! Word-granularity diff over decoded text.
//!
//! Wraps `similar`'s word tokenizer, which splits text into runs of
//! whitespace and runs of non-whitespace, and merges consecutive changes of
//! the same kind into a single `DiffOp`.

use std::borrow::Cow;

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use super::decoder::{HtmlEntityDecoder, TextDecoder};
use crate::config::DiffConfig;

/// Kind of a word-diff operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

impl From<ChangeTag> for DiffKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => DiffKind::Equal,
            ChangeTag::Insert => DiffKind::Insert,
            ChangeTag::Delete => DiffKind::Delete,
        }
    }
}

/// One element of a word diff.
///
/// `Delete` and `Equal` texts concatenate to the old text, `Insert` and
/// `Equal` texts to the new text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_change(&self) -> bool {
        self.kind != DiffKind::Equal
    }
}

/// Word differ configured with an algorithm and an optional entity decoder
pub struct WordDiffer {
    algorithm: similar::Algorithm,
    decoder: Option<Box<dyn TextDecoder>>,
}

impl Default for WordDiffer {
    fn default() -> Self {
        Self::new(&DiffConfig::default())
    }
}

impl std::fmt::Debug for WordDiffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordDiffer")
            .field("algorithm", &self.algorithm)
            .field("decodes_entities", &self.decoder.is_some())
            .finish()
    }
}

impl WordDiffer {
    #[must_use]
    pub fn new(config: &DiffConfig) -> Self {
        let decoder: Option<Box<dyn TextDecoder>> = if config.decode_entities() {
            Some(Box::new(HtmlEntityDecoder))
        } else {
            None
        };
        Self {
            algorithm: config.algorithm().into(),
            decoder,
        }
    }

    /// Replace the entity decoder.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl TextDecoder + 'static) -> Self {
        self.decoder = Some(Box::new(decoder));
        self
    }

    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.decoder {
            Some(decoder) => decoder.decode(text),
            None => Cow::Borrowed(text),
        }
    }

    /// Diff two texts word by word after decoding entities.
    ///
    /// Identical inputs yield a single `Equal` op (none when both are
    /// empty). An empty old text yields a single `Insert` op.
    #[must_use]
    pub fn diff_text(&self, old_text: &str, new_text: &str) -> Vec<DiffOp> {
        let old_decoded = self.decode(old_text);
        let new_decoded = self.decode(new_text);

        let diff = TextDiff::configure()
            .algorithm(self.algorithm)
            .diff_words(&*old_decoded, &*new_decoded);

        let mut ops: Vec<DiffOp> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = DiffKind::from(change.tag());
            match ops.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => ops.push(DiffOp::new(kind, change.value())),
            }
        }

        tracing::trace!(
            old_len = old_text.len(),
            new_len = new_text.len(),
            ops = ops.len(),
            "word diff computed"
        );
        ops
    }
}

/// Word diff with the default configuration (Myers, entities decoded).
#[must_use]
pub fn diff_words(old_text: &str, new_text: &str) -> Vec<DiffOp> {
    WordDiffer::default().diff_text(old_text, new_text)
}

/// Rebuild the old (`Equal` + `Delete`) side of a diff.
#[must_use]
pub fn reconstruct_old(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.kind != DiffKind::Insert)
        .map(|op| op.text.as_str())
        .collect()
}

/// Rebuild the new (`Equal` + `Insert`) side of a diff.
#[must_use]
pub fn reconstruct_new(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.kind != DiffKind::Delete)
        .map(|op| op.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_is_single_equal() {
        let ops = diff_words("Employee Welfare schemes", "Employee Welfare schemes");
        assert_eq!(ops, vec![DiffOp::new(DiffKind::Equal, "Employee Welfare schemes")]);
    }

    #[test]
    fn test_empty_inputs_yield_no_ops() {
        assert!(diff_words("", "").is_empty());
    }

    #[test]
    fn test_empty_old_is_all_insert() {
        let ops = diff_words("", "r1c1 value");
        assert_eq!(ops, vec![DiffOp::new(DiffKind::Insert, "r1c1 value")]);
    }

    #[test]
    fn test_single_word_replacement() {
        let ops = diff_words("d", "x");
        assert_eq!(
            ops,
            vec![
                DiffOp::new(DiffKind::Delete, "d"),
                DiffOp::new(DiffKind::Insert, "x"),
            ]
        );
    }

    #[test]
    fn test_whitespace_preserved_in_reconstruction() {
        let old = "hello  I am\ta paragraph";
        let new = "hello I am a  long paragraph\n";
        let ops = diff_words(old, new);
        assert_eq!(reconstruct_old(&ops), old);
        assert_eq!(reconstruct_new(&ops), new);
    }

    #[test]
    fn test_entities_decoded_before_diff() {
        let ops = diff_words("Tom &amp; Jerry", "Tom & Jerry");
        assert_eq!(ops, vec![DiffOp::new(DiffKind::Equal, "Tom & Jerry")]);
    }

    #[test]
    fn test_entities_kept_when_decoding_disabled() {
        let config = DiffConfig::builder()
            .decode_entities(false)
            .build()
            .expect("valid config");
        let ops = WordDiffer::new(&config).diff_text("Tom &amp; Jerry", "Tom & Jerry");
        assert!(ops.iter().any(DiffOp::is_change));
        assert_eq!(reconstruct_old(&ops), "Tom &amp; Jerry");
    }

    #[test]
    fn test_custom_decoder_is_used() {
        struct Upper;
        impl TextDecoder for Upper {
            fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
                Cow::Owned(text.to_uppercase())
            }
        }

        let differ = WordDiffer::default().with_decoder(Upper);
        let ops = differ.diff_text("abc", "ABC");
        assert_eq!(ops, vec![DiffOp::new(DiffKind::Equal, "ABC")]);
    }
}
