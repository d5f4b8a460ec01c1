#[cfg(test)]
use crate::corpus::SourceDocument;
#[cfg(test)]
use crate::tagger::{Annotation, Iob, Tagger};
#[cfg(test)]
use std::collections::HashMap;

/// Tagger with a fixed vocabulary: splits on single spaces and looks each
/// word up in a table, falling back to `NN1` outside any span.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubTagger {
    entries: HashMap<String, (String, Iob, String)>,
}

#[cfg(test)]
impl StubTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag `word` with `pos` outside any span.
    pub fn pos(self, word: &str, pos: &str) -> Self {
        self.entry(word, pos, Iob::O, "")
    }

    /// Tag `word` with `pos` and a span label.
    pub fn entry(mut self, word: &str, pos: &str, iob: Iob, span_type: &str) -> Self {
        self.entries.insert(
            word.to_string(),
            (pos.to_string(), iob, span_type.to_string()),
        );
        self
    }
}

#[cfg(test)]
impl Tagger for StubTagger {
    fn tag(&self, text: &str) -> Vec<Annotation> {
        if text.is_empty() {
            return Vec::new();
        }
        let words: Vec<&str> = text.split(' ').collect();
        let last = words.len() - 1;
        words
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                let (pos_tag, iob, span_type) = self
                    .entries
                    .get(word)
                    .cloned()
                    .unwrap_or_else(|| ("NN1".to_string(), Iob::O, String::new()));
                Annotation {
                    text: word.to_string(),
                    whitespace: if i == last { String::new() } else { " ".to_string() },
                    pos_tag,
                    iob,
                    span_type,
                }
            })
            .collect()
    }
}

/// Build source documents from `(filename, content)` pairs.
#[cfg(test)]
pub fn source_documents(pairs: &[(&str, &str)]) -> Vec<SourceDocument> {
    pairs
        .iter()
        .map(|(name, content)| SourceDocument::new(*name, content.as_bytes()))
        .collect()
}
