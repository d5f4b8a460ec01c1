//! Tag frequency tables.
//!
//! For each tag of a tagset this computes:
//! - `AF`: absolute frequency
//! - `RF`: frequency per 100 tokens of the tagset's denominator
//! - `Range`: percentage of documents containing the tag
//!
//! Part-of-speech tags are counted on every token using their canonical
//! form and normalized against word tokens. Discourse tags count span
//! starts (`B-` labels) only and are normalized against all tokens.

use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use strum::{Display, EnumString};

use super::metrics::CorpusMetrics;
use crate::corpus::{Corpus, CorpusError, canonical_pos_tag};

/// Which tag vocabulary a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tagset {
    /// Part-of-speech tags
    Pos,
    /// DocuScope discourse span tags
    Ds,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "AF")]
    pub absolute_frequency: usize,
    #[serde(rename = "RF")]
    pub relative_frequency: f64,
    #[serde(rename = "Range")]
    pub range: f64,
}

#[derive(Debug, Default)]
struct TagAccumulator {
    count: usize,
    documents: usize,
    last_document: Option<usize>,
}

/// Compute the frequency table of `tagset` over `corpus` in one pass.
///
/// `denominator` is the token count relative frequencies are normalized
/// against: word tokens for [`Tagset::Pos`], all tokens for [`Tagset::Ds`].
/// Rows are sorted by absolute frequency, then tag.
pub fn tags_table(
    corpus: &Corpus,
    tagset: Tagset,
    denominator: usize,
) -> Result<Vec<FrequencyRow>, CorpusError> {
    if corpus.is_empty() || denominator == 0 {
        return Err(CorpusError::EmptyCorpusOperation {
            operation: format!("{} tag frequencies", tagset),
        });
    }

    let mut accumulators: HashMap<&str, TagAccumulator> = HashMap::new();

    for (doc_index, document) in corpus.documents().iter().enumerate() {
        for token in &document.tokens {
            let tag = match tagset {
                Tagset::Pos => Some(canonical_pos_tag(&token.pos_tag)),
                Tagset::Ds => token.ds_tag.begin_type(),
            };
            let Some(tag) = tag else {
                continue;
            };

            let acc = accumulators.entry(tag).or_default();
            acc.count += 1;
            if acc.last_document != Some(doc_index) {
                acc.documents += 1;
                acc.last_document = Some(doc_index);
            }
        }
    }

    let denominator = denominator as f64;
    let documents = corpus.len() as f64;

    let mut rows: Vec<FrequencyRow> = accumulators
        .into_iter()
        .map(|(tag, acc)| FrequencyRow {
            tag: tag.to_string(),
            absolute_frequency: acc.count,
            relative_frequency: acc.count as f64 * 100.0 / denominator,
            range: acc.documents as f64 * 100.0 / documents,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.absolute_frequency
            .cmp(&a.absolute_frequency)
            .then_with(|| a.tag.cmp(&b.tag))
    });

    Ok(rows)
}

/// Frequency tables for both tagsets of one corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTables {
    pub pos: Vec<FrequencyRow>,
    pub ds: Vec<FrequencyRow>,
}

impl FrequencyTables {
    /// Build both tables with their matching denominators.
    pub fn compute(corpus: &Corpus, metrics: &CorpusMetrics) -> Result<Self, CorpusError> {
        Ok(Self {
            pos: tags_table(corpus, Tagset::Pos, metrics.words)?,
            ds: tags_table(corpus, Tagset::Ds, metrics.tokens)?,
        })
    }

    pub fn get(&self, tagset: Tagset) -> &[FrequencyRow] {
        match tagset {
            Tagset::Pos => &self.pos,
            Tagset::Ds => &self.ds,
        }
    }
}

/// Write `rows` as CSV with a `Tag,AF,RF,Range` header, even when empty.
pub fn write_csv<W: Write>(rows: &[FrequencyRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["Tag", "AF", "RF", "Range"])?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
