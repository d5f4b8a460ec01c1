//! Whitespace-preserving tokenizer.
//!
//! Splits normalized text into pieces, each keeping the whitespace that
//! followed it, so that concatenating all pieces reproduces the input.
//!
//! Within a whitespace-delimited chunk:
//! - leading punctuation is split off (runs of one character stay together)
//! - trailing punctuation is split off the same way, except the final dot
//!   of a dotted abbreviation such as `U.S.` or `e.g.`
//! - English clitics (`n't`, `'s`, `'re`, `'ve`, `'ll`, `'d`, `'m`) are
//!   split from their host word
//!
//! Leading whitespace of the whole text is not represented; normalized text
//! never has any.

use std::sync::LazyLock;

use regex::Regex;

/// Dotted abbreviation without its final dot: `U.S`, `e.g`, `i.e`, `Ph.D`.
static DOTTED_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]{1,2}\.)+[A-Za-z]{1,2}$").unwrap());

/// Clitics split from the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// A token with the whitespace that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub whitespace: String,
}

/// Tokenize `text` into whitespace-carrying pieces.
pub fn tokenize(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();

    for (chunk, whitespace) in chunks(text) {
        let parts = split_chunk(chunk);
        let last = parts.len().saturating_sub(1);
        for (i, part) in parts.into_iter().enumerate() {
            pieces.push(Piece {
                text: part.to_string(),
                whitespace: if i == last {
                    whitespace.to_string()
                } else {
                    String::new()
                },
            });
        }
    }

    pieces
}

/// Split `text` into `(chunk, following_whitespace)` pairs.
fn chunks(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let chunk_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (chunk, after) = rest.split_at(chunk_end);
        let ws_end = after
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(after.len());
        let (whitespace, next) = after.split_at(ws_end);
        out.push((chunk, whitespace));
        rest = next;
    }

    out
}

fn is_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Split a chunk into runs of identical characters. Used for chunks made
/// only of punctuation, e.g. `?!` → `?`, `!` and `...` → `...`.
fn split_runs(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in s.char_indices() {
        if prev.is_some_and(|p| p != c) {
            parts.push(&s[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    if start < s.len() {
        parts.push(&s[start..]);
    }
    parts
}

/// Length in bytes of the run of `c` at the start of `s`.
fn leading_run(s: &str, c: char) -> usize {
    s.chars().take_while(|&x| x == c).map(char::len_utf8).sum()
}

/// Length in bytes of the run of `c` at the end of `s`.
fn trailing_run(s: &str, c: char) -> usize {
    s.chars().rev().take_while(|&x| x == c).map(char::len_utf8).sum()
}

fn split_chunk(chunk: &str) -> Vec<&str> {
    if chunk.chars().all(is_punct) {
        return split_runs(chunk);
    }

    let mut prefixes = Vec::new();
    let mut core = chunk;
    while let Some(c) = core.chars().next().filter(|&c| is_punct(c)) {
        let len = leading_run(core, c);
        prefixes.push(&core[..len]);
        core = &core[len..];
    }

    let mut suffixes = Vec::new();
    while let Some(c) = core.chars().next_back().filter(|&c| is_punct(c)) {
        let len = trailing_run(core, c);
        let head = &core[..core.len() - len];
        if c == '.' && len == 1 && DOTTED_ABBREVIATION.is_match(head) {
            break;
        }
        suffixes.push(&core[core.len() - len..]);
        core = head;
    }

    let mut parts = prefixes;
    parts.extend(split_clitic(core));
    parts.extend(suffixes.into_iter().rev());
    parts
}

/// Split a trailing clitic from `word`, keeping a non-empty host.
fn split_clitic(word: &str) -> Vec<&str> {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let at = word.len() - clitic.len();
        if word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(clitic) {
            return vec![&word[..at], &word[at..]];
        }
    }
    vec![word]
}
