//! Corpus ingestion.
//!
//! Turns a batch of uploaded documents into a [`Corpus`]:
//! 1. Normalize every filename into a document identifier
//! 2. Reject the whole batch if any identifiers collide
//! 3. Prepare, tag, and assemble the tokens of each document
//!
//! Documents are tagged in parallel; the corpus keeps the input order.

use std::collections::HashMap;

use content_inspector::inspect;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::prelude::*;

use super::error::CorpusError;
use super::prepare::prepare_document;
use super::tags::correct_pos_tag;
use super::types::{Corpus, Document, SourceDocument, SpanLabel, Token};
use crate::tagger::{Annotation, Iob, Tagger};

/// Derive a document identifier from a filename by removing whitespace.
pub fn normalize_doc_id(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Identifiers occurring more than once, sorted and listed once each.
pub fn find_duplicate_ids<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        *counts.entry(id.as_ref()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect();
    duplicates.sort();
    duplicates
}

/// Ingest a batch of documents. Fails without producing anything if two
/// documents share an identifier.
pub fn ingest_corpus<T: Tagger + ?Sized>(
    documents: &[SourceDocument],
    tagger: &T,
    progress: &ProgressBar,
) -> Result<Corpus, CorpusError> {
    let ids: Vec<String> = documents.iter().map(|d| normalize_doc_id(&d.name)).collect();

    let duplicates = find_duplicate_ids(&ids);
    if !duplicates.is_empty() {
        warn!("Rejecting batch with duplicate document names: {:?}", duplicates);
        return Err(CorpusError::DuplicateIdentifier { ids: duplicates });
    }

    info!("Tagging {} documents", documents.len());

    let tagged: Vec<Document> = documents
        .par_iter()
        .zip(ids.into_par_iter())
        .map(|(source, id)| {
            let document = tag_document(id, &source.content, tagger);
            progress.inc(1);
            document
        })
        .collect();

    let corpus = Corpus::from_documents(tagged);
    info!(
        "Ingested {} documents ({} tokens)",
        corpus.len(),
        corpus.tokens().count()
    );
    Ok(corpus)
}

/// Prepare and tag the raw content of one document.
pub fn tag_document<T: Tagger + ?Sized>(id: String, content: &[u8], tagger: &T) -> Document {
    if inspect(content).is_binary() {
        warn!("Document {} does not look like text, decoding anyway", id);
    }

    let text = prepare_document(content);
    let tokens: Vec<Token> = tagger
        .tag(&text)
        .into_iter()
        .map(token_from_annotation)
        .collect();

    debug!("Tagged {}: {} tokens", id, tokens.len());
    Document { id, tokens }
}

fn token_from_annotation(annotation: Annotation) -> Token {
    let Annotation {
        text,
        whitespace,
        pos_tag,
        iob,
        span_type,
    } = annotation;

    let text = text + &whitespace;
    let pos_tag = correct_pos_tag(&text, &pos_tag);
    let ds_tag = match iob {
        Iob::B => SpanLabel::Begin(span_type),
        Iob::I => SpanLabel::Inside(span_type),
        Iob::O => SpanLabel::Outside,
    };

    Token {
        text,
        pos_tag,
        ds_tag,
    }
}
