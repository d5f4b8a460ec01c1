//! Text preparation and normalization before tagging.
//!
//! Normalizes the raw bytes of a document:
//! - UTF-8 decoding that drops undecodable bytes
//! - Transliteration of non-ASCII characters to ASCII
//! - Forced split of the contraction `its`/`Its` into `it s`/`It s`
//! - Whitespace collapse (paragraph breaks are discarded)

use std::sync::LazyLock;

use regex::Regex;

/// Whole-word lowercase `its`.
static ITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bits\b").unwrap());

/// Whole-word capitalized `Its`.
static ITS_CAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bIts\b").unwrap());

/// Decode `bytes` as UTF-8, silently dropping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Prepare already-decoded `text` for tagging.
pub fn prepare_text(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let s = ITS_RE.replace_all(&ascii, "it s");
    let s = ITS_CAP_RE.replace_all(&s, "It s");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode and prepare the raw content of a document.
pub fn prepare_document(bytes: &[u8]) -> String {
    prepare_text(&decode_lossy(bytes))
}
