//! HTML entity decoding ahead of word diffing.
//!
//! Rich-text editors emit `&nbsp;`, `&amp;` and numeric references for
//! characters that are plain text to a reader. Decoding both sides first
//! keeps `&amp;` and `&` from showing up as a change.

use std::borrow::Cow;

use html_escape::decode_html_entities;

/// Resolves HTML entities to literal characters.
///
/// Implementations must leave text without entities untouched, so that
/// decoding already-decoded text is a no-op.
pub trait TextDecoder: Send + Sync {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Default decoder covering named (HTML5) and numeric entities
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntityDecoder;

impl TextDecoder for HtmlEntityDecoder {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        decode_html_entities_text(text)
    }
}

/// Decode HTML entities, borrowing the input when it contains none.
#[inline]
pub fn decode_html_entities_text(text: &str) -> Cow<'_, str> {
    if text.contains('&') {
        decode_html_entities(text)
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_named_and_numeric_entities() {
        assert_eq!(decode_html_entities_text("a &amp; b"), "a & b");
        assert_eq!(decode_html_entities_text("&lt;p&gt;"), "<p>");
        assert_eq!(decode_html_entities_text("&#124; pipe"), "| pipe");
        assert_eq!(decode_html_entities_text("x&nbsp;y"), "x\u{a0}y");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let decoded = decode_html_entities_text("no entities here");
        assert!(matches!(decoded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_is_idempotent_on_decoded_text() {
        for input in ["Insurance", "a &amp; b", "&lt;td&gt;", "caf&eacute;"] {
            let once = HtmlEntityDecoder.decode(input).into_owned();
            let twice = HtmlEntityDecoder.decode(&once).into_owned();
            assert_eq!(once, twice, "decode not idempotent for {input:?}");
        }
    }
}
