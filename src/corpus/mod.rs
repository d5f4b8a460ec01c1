//! Corpus construction.
//!
//! Builds an immutable tagged corpus from raw documents using a four-stage
//! pipeline:
//! 1. Text preparation (decoding, transliteration, whitespace collapse)
//! 2. Tagging through a [`Tagger`](crate::tagger::Tagger)
//! 3. Tag correction (punctuation and numerals)
//! 4. Assembly into documents keyed by normalized filename

mod categories;
mod error;
mod ingest;
mod prepare;
mod tags;
mod types;


pub use categories::{MAX_CATEGORIES, MIN_CATEGORIES, count_categories, extract_categories};
pub use error::CorpusError;
pub use ingest::{find_duplicate_ids, ingest_corpus, normalize_doc_id, tag_document};
pub use prepare::{decode_lossy, prepare_document, prepare_text};
pub use tags::{
    NUMERAL_TAG, PUNCT_TAG, canonical_pos_tag, correct_pos_tag, ds_tagset, is_numeral_token,
    is_punctuation_token, is_word_tag, pos_tagset,
};
pub use types::{Corpus, Document, SourceDocument, SpanLabel, Token};
