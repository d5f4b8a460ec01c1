//! Core types for the tagged corpus.
//!
//! This module defines:
//! - [`SourceDocument`], a raw `(filename, bytes)` pair handed to ingestion
//! - [`Token`], one annotated token with its trailing whitespace
//! - [`SpanLabel`], the discourse (DocuScope) IOB label of a token
//! - [`Document`] and [`Corpus`], the immutable result of ingestion

use std::fmt;

use serde::Serialize;

/// A document as uploaded: its original filename and raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Discourse span label attached to every token.
///
/// `Begin` opens a span of the given type, `Inside` continues it and
/// `Outside` marks tokens not covered by any span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpanLabel {
    Outside,
    Begin(String),
    Inside(String),
}

impl SpanLabel {
    /// The span type when this label starts a span.
    pub fn begin_type(&self) -> Option<&str> {
        match self {
            SpanLabel::Begin(span_type) => Some(span_type),
            _ => None,
        }
    }
}

impl fmt::Display for SpanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanLabel::Outside => write!(f, "O"),
            SpanLabel::Begin(span_type) => write!(f, "B-{}", span_type),
            SpanLabel::Inside(span_type) => write!(f, "I-{}", span_type),
        }
    }
}

impl Serialize for SpanLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Surface text followed by its trailing whitespace (e.g. `"Hello "`).
    pub text: String,
    /// Part-of-speech tag after punctuation/numeral correction (e.g. `NN1`, `Y`, `MC`).
    pub pos_tag: String,
    /// Discourse span label.
    pub ds_tag: SpanLabel,
}

/// One ingested document: its identifier and ordered token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: String,
    pub tokens: Vec<Token>,
}

impl Document {
    /// Concatenate all token surfaces, reproducing the normalized text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// An immutable collection of documents keyed by unique identifier.
///
/// Documents keep the order in which they were ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from documents whose identifiers are already known to be unique.
    pub(crate) fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Document identifiers in ingestion order.
    pub fn doc_ids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.id.as_str()).collect()
    }

    /// Document identifiers sorted for display.
    pub fn sorted_doc_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.documents.iter().map(|d| d.id.clone()).collect();
        ids.sort();
        ids
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.documents.iter().flat_map(|d| d.tokens.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: &str, ds: SpanLabel) -> Token {
        Token {
            text: text.to_string(),
            pos_tag: pos.to_string(),
            ds_tag: ds,
        }
    }

    #[test]
    fn test_span_label_display() {
        assert_eq!(SpanLabel::Outside.to_string(), "O");
        assert_eq!(SpanLabel::Begin("Narrative".into()).to_string(), "B-Narrative");
        assert_eq!(SpanLabel::Inside("Narrative".into()).to_string(), "I-Narrative");
    }

    #[test]
    fn test_span_label_begin_type() {
        assert_eq!(SpanLabel::Begin("X".into()).begin_type(), Some("X"));
        assert_eq!(SpanLabel::Inside("X".into()).begin_type(), None);
        assert_eq!(SpanLabel::Outside.begin_type(), None);
    }

    #[test]
    fn test_document_text_reconstruction() {
        let doc = Document {
            id: "a.txt".to_string(),
            tokens: vec![
                token("Hello", "UH", SpanLabel::Outside),
                token(". ", "Y", SpanLabel::Outside),
                token("Bye", "UH", SpanLabel::Outside),
            ],
        };
        assert_eq!(doc.text(), "Hello. Bye");
    }

    #[test]
    fn test_corpus_lookup_and_order() {
        let corpus = Corpus::from_documents(vec![
            Document {
                id: "b.txt".to_string(),
                tokens: vec![],
            },
            Document {
                id: "a.txt".to_string(),
                tokens: vec![token("x", "NN1", SpanLabel::Outside)],
            },
        ]);
        assert_eq!(corpus.doc_ids(), vec!["b.txt", "a.txt"]);
        assert_eq!(corpus.sorted_doc_ids(), vec!["a.txt", "b.txt"]);
        assert!(corpus.contains("a.txt"));
        assert!(!corpus.contains("c.txt"));
        assert_eq!(corpus.tokens().count(), 1);
    }

    #[test]
    fn test_span_label_serializes_as_string() {
        let json = serde_json::to_string(&SpanLabel::Begin("Citation".into())).unwrap();
        assert_eq!(json, "\"B-Citation\"");
    }
}
