use serde::Serialize;

use crate::corpus::{Corpus, CorpusError, is_word_tag};

/// Whole-corpus counts, also used as relative-frequency denominators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusMetrics {
    /// Every token, punctuation included.
    pub tokens: usize,
    /// Tokens whose part-of-speech tag is not punctuation.
    pub words: usize,
    pub documents: usize,
}

impl CorpusMetrics {
    /// Count tokens, word tokens and documents. An empty corpus has no
    /// meaningful metrics and is rejected.
    pub fn compute(corpus: &Corpus) -> Result<Self, CorpusError> {
        if corpus.is_empty() {
            return Err(CorpusError::EmptyCorpusOperation {
                operation: "corpus metrics".to_string(),
            });
        }

        let (tokens, words) = corpus.tokens().fold((0, 0), |(tokens, words), token| {
            (tokens + 1, words + usize::from(is_word_tag(&token.pos_tag)))
        });

        Ok(Self {
            tokens,
            words,
            documents: corpus.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Document, SpanLabel, Token};

    fn doc(id: &str, tags: &[&str]) -> Document {
        Document {
            id: id.to_string(),
            tokens: tags
                .iter()
                .map(|tag| Token {
                    text: "x ".to_string(),
                    pos_tag: tag.to_string(),
                    ds_tag: SpanLabel::Outside,
                })
                .collect(),
        }
    }

    #[test]
    fn test_counts() {
        let corpus = Corpus::from_documents(vec![
            doc("a.txt", &["NN1", "VVD", "Y"]),
            doc("b.txt", &["MC", "Y", "YQUO"]),
        ]);
        let metrics = CorpusMetrics::compute(&corpus).unwrap();
        assert_eq!(
            metrics,
            CorpusMetrics {
                tokens: 6,
                words: 3,
                documents: 2
            }
        );
    }

    #[test]
    fn test_documents_without_tokens_still_count() {
        let corpus = Corpus::from_documents(vec![doc("a.txt", &[]), doc("b.txt", &["NN1"])]);
        let metrics = CorpusMetrics::compute(&corpus).unwrap();
        assert_eq!(metrics.documents, 2);
        assert_eq!(metrics.tokens, 1);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = CorpusMetrics::compute(&Corpus::default()).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyCorpusOperation { .. }));
    }
}
