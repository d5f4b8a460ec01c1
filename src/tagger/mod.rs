//! Tagger adapter.
//!
//! The linguistic model is an external capability hidden behind the
//! [`Tagger`] trait: given normalized text it returns one [`Annotation`]
//! per token, carrying a part-of-speech tag and a discourse span label.
//!
//! [`RuleTagger`] is the built-in implementation, a deterministic pipeline:
//! 1. Tokenization ([`lexer`])
//! 2. Part-of-speech tagging ([`patterns`])
//! 3. Discourse span annotation ([`lexicon`])

pub mod lexer;
pub mod lexicon;
pub mod patterns;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use strum::{Display, EnumString};

use self::lexicon::DiscourseLexicon;

/// IOB marker of a discourse span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum Iob {
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "I")]
    I,
    #[strum(serialize = "O")]
    O,
}

/// One token as produced by a tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Token surface text without whitespace.
    pub text: String,
    /// Whitespace following the token; empty if none.
    pub whitespace: String,
    /// Raw part-of-speech tag.
    pub pos_tag: String,
    pub iob: Iob,
    /// Discourse span type; empty when `iob` is [`Iob::O`].
    pub span_type: String,
}

/// A deterministic text annotator.
///
/// Concatenating `text` and `whitespace` of every returned annotation must
/// reproduce the input text without its leading whitespace. Normalized
/// text has none, so for it the reconstruction is exact.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<Annotation>;
}

/// Built-in rule-based tagger.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: DiscourseLexicon,
}

impl RuleTagger {
    pub fn new(lexicon: DiscourseLexicon) -> Self {
        Self { lexicon }
    }

    /// Tagger using the embedded default discourse lexicon.
    pub fn with_default_lexicon() -> Result<Self> {
        Ok(Self::new(DiscourseLexicon::embedded()?))
    }

    /// Tagger using a discourse lexicon loaded from a YAML file.
    pub fn from_lexicon_file(path: &Path) -> Result<Self> {
        Ok(Self::new(DiscourseLexicon::from_file(path)?))
    }

    pub fn lexicon(&self) -> &DiscourseLexicon {
        &self.lexicon
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<Annotation> {
        let pieces = lexer::tokenize(text);
        let words: Vec<&str> = pieces.iter().map(|p| p.text.as_str()).collect();
        let pos_tags = patterns::tag_words(&words);
        let spans = self.lexicon.annotate(&words);

        pieces
            .into_iter()
            .zip(pos_tags)
            .zip(spans)
            .map(|((piece, pos_tag), (iob, span_type))| Annotation {
                text: piece.text,
                whitespace: piece.whitespace,
                pos_tag: pos_tag.to_string(),
                iob,
                span_type,
            })
            .collect()
    }
}
