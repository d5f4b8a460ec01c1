//! Tag correction and canonicalization.
//!
//! The tagger's generic tagset misclassifies punctuation and bare numerals,
//! so every token's part-of-speech tag is checked against its surface text:
//! punctuation-only tokens become [`PUNCT_TAG`] and numeral-like tokens
//! become [`NUMERAL_TAG`]. For counting, tags are collapsed to a canonical
//! form by stripping a trailing digit suffix (`NN1` → `NN`, `II21` → `II`).

use std::collections::BTreeSet;

use super::types::Corpus;

/// Synthetic tag for punctuation tokens. Tags starting with it are not words.
pub const PUNCT_TAG: &str = "Y";

/// Synthetic tag for cardinal-number-like tokens.
pub const NUMERAL_TAG: &str = "MC";

/// Whether `token` is one or more ASCII punctuation characters, optionally
/// followed by whitespace.
pub fn is_punctuation_token(token: &str) -> bool {
    let core = token.trim_end();
    !core.is_empty() && core.chars().all(|c| c.is_ascii_punctuation())
}

/// Whether `token` is a digit followed by any run of digits or ASCII
/// punctuation, optionally followed by whitespace (`1999`, `3.14`, `1,000`).
pub fn is_numeral_token(token: &str) -> bool {
    let core = token.trim_end();
    let mut chars = core.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => {
            chars.all(|c| c.is_ascii_digit() || c.is_ascii_punctuation())
        }
        _ => false,
    }
}

/// Correct the raw tagger tag of a token from its surface text.
pub fn correct_pos_tag(token: &str, raw_tag: &str) -> String {
    if is_punctuation_token(token) {
        PUNCT_TAG.to_string()
    } else if is_numeral_token(token) {
        NUMERAL_TAG.to_string()
    } else {
        raw_tag.to_string()
    }
}

/// Collapse a tag to its canonical form by removing a trailing run of one
/// or two digits. All-digit tags are returned unchanged.
pub fn canonical_pos_tag(tag: &str) -> &str {
    let bytes = tag.as_bytes();
    if bytes.iter().all(u8::is_ascii_digit) {
        return tag;
    }
    let digits = bytes
        .iter()
        .rev()
        .take(2)
        .take_while(|b| b.is_ascii_digit())
        .count();
    &tag[..tag.len() - digits]
}

/// Whether a corrected tag counts as a word token.
pub fn is_word_tag(tag: &str) -> bool {
    !tag.starts_with(PUNCT_TAG)
}

/// Sorted distinct canonical part-of-speech tags observed in `corpus`.
pub fn pos_tagset(corpus: &Corpus) -> Vec<String> {
    corpus
        .tokens()
        .map(|t| canonical_pos_tag(&t.pos_tag))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted distinct discourse span types that open at least one span in `corpus`.
pub fn ds_tagset(corpus: &Corpus) -> Vec<String> {
    corpus
        .tokens()
        .filter_map(|t| t.ds_tag.begin_type())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::types::{Document, SpanLabel, Token};

    #[test]
    fn test_punctuation_tokens() {
        assert!(is_punctuation_token("."));
        assert!(is_punctuation_token(". "));
        assert!(is_punctuation_token("...  "));
        assert!(is_punctuation_token("?!"));
        assert!(!is_punctuation_token(""));
        assert!(!is_punctuation_token(" "));
        assert!(!is_punctuation_token("a."));
        assert!(!is_punctuation_token(".a"));
    }

    #[test]
    fn test_numeral_tokens() {
        assert!(is_numeral_token("1999"));
        assert!(is_numeral_token("1,000 "));
        assert!(is_numeral_token("3.14"));
        assert!(is_numeral_token("9/11"));
        assert!(!is_numeral_token("3rd"));
        assert!(!is_numeral_token("-5"));
        assert!(!is_numeral_token("x1"));
        assert!(!is_numeral_token(""));
    }

    #[test]
    fn test_correct_pos_tag_overrides() {
        assert_eq!(correct_pos_tag(". ", "NN1"), "Y");
        assert_eq!(correct_pos_tag("\"", "FU"), "Y");
        assert_eq!(correct_pos_tag("42 ", "NN1"), "MC");
        assert_eq!(correct_pos_tag("dog ", "NN1"), "NN1");
    }

    #[test]
    fn test_canonical_pos_tag() {
        assert_eq!(canonical_pos_tag("NN1"), "NN");
        assert_eq!(canonical_pos_tag("NN2"), "NN");
        assert_eq!(canonical_pos_tag("II21"), "II");
        assert_eq!(canonical_pos_tag("VVD"), "VVD");
        assert_eq!(canonical_pos_tag("Y"), "Y");
        assert_eq!(canonical_pos_tag("MC"), "MC");
        assert_eq!(canonical_pos_tag("42"), "42");
        assert_eq!(canonical_pos_tag("123"), "123");
        assert_eq!(canonical_pos_tag("NN123"), "NN1");
    }

    #[test]
    fn test_is_word_tag() {
        assert!(!is_word_tag("Y"));
        assert!(!is_word_tag("YSTP"));
        assert!(is_word_tag("MC"));
        assert!(is_word_tag("NN1"));
    }

    #[test]
    fn test_tagsets() {
        let tok = |text: &str, pos: &str, ds: SpanLabel| Token {
            text: text.to_string(),
            pos_tag: pos.to_string(),
            ds_tag: ds,
        };
        let corpus = Corpus::from_documents(vec![Document {
            id: "a.txt".to_string(),
            tokens: vec![
                tok("I ", "PPIS1", SpanLabel::Begin("FirstPerson".into())),
                tok("saw ", "VVD", SpanLabel::Outside),
                tok("dogs", "NN2", SpanLabel::Inside("Narrative".into())),
                tok("dog", "NN1", SpanLabel::Outside),
                tok(".", "Y", SpanLabel::Outside),
            ],
        }]);
        assert_eq!(pos_tagset(&corpus), vec!["NN", "PPIS", "VVD", "Y"]);
        assert_eq!(ds_tagset(&corpus), vec!["FirstPerson"]);
    }
}
