//! The corpus workspace: one target corpus, an optional reference corpus,
//! and everything derived from them.
//!
//! Every operation either completes and commits its result, or fails and
//! leaves the workspace exactly as it was.

use std::collections::BTreeMap;

use indicatif::ProgressBar;
use log::{info, warn};

use crate::corpus::{
    Corpus, CorpusError, SourceDocument, count_categories, ds_tagset, extract_categories,
    ingest_corpus, pos_tagset,
};
use crate::frequency::{CorpusMetrics, FrequencyTables};
use crate::tagger::Tagger;

/// A tagged corpus together with its metrics and tag vocabularies.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub metrics: CorpusMetrics,
    /// Sorted canonical part-of-speech tags.
    pub pos_tags: Vec<String>,
    /// Sorted discourse span types.
    pub ds_tags: Vec<String>,
}

impl LoadedCorpus {
    fn ingest<T: Tagger + ?Sized>(
        documents: &[SourceDocument],
        tagger: &T,
        progress: &ProgressBar,
    ) -> Result<Self, CorpusError> {
        let corpus = ingest_corpus(documents, tagger, progress)?;
        let metrics = CorpusMetrics::compute(&corpus)?;
        let pos_tags = pos_tagset(&corpus);
        let ds_tags = ds_tagset(&corpus);
        Ok(Self {
            corpus,
            metrics,
            pos_tags,
            ds_tags,
        })
    }
}

#[derive(Debug, Default)]
pub struct Workspace {
    target: Option<LoadedCorpus>,
    reference: Option<LoadedCorpus>,
    categories: Option<Vec<String>>,
    frequency_tables: Option<FrequencyTables>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest `documents` as the target corpus, replacing any previous one.
    ///
    /// Categories and frequency tables derived from the old target are
    /// discarded. A loaded reference corpus is kept, so the new target must
    /// not share identifiers with it.
    pub fn load_target<T: Tagger + ?Sized>(
        &mut self,
        documents: &[SourceDocument],
        tagger: &T,
        progress: &ProgressBar,
    ) -> Result<&LoadedCorpus, CorpusError> {
        let loaded = LoadedCorpus::ingest(documents, tagger, progress)?;

        if let Some(reference) = &self.reference {
            check_collisions(&loaded.corpus, &reference.corpus)?;
        }

        info!(
            "Loaded target corpus: {} documents, {} tokens",
            loaded.metrics.documents, loaded.metrics.tokens
        );
        self.categories = None;
        self.frequency_tables = None;
        Ok(self.target.insert(loaded))
    }

    /// Ingest `documents` as the reference corpus. A target corpus must
    /// already be loaded and the two may not share document identifiers.
    pub fn load_reference<T: Tagger + ?Sized>(
        &mut self,
        documents: &[SourceDocument],
        tagger: &T,
        progress: &ProgressBar,
    ) -> Result<&LoadedCorpus, CorpusError> {
        let Some(target) = &self.target else {
            return Err(CorpusError::MissingTargetCorpus);
        };

        let loaded = LoadedCorpus::ingest(documents, tagger, progress)?;
        check_collisions(&loaded.corpus, &target.corpus)?;

        info!(
            "Loaded reference corpus: {} documents, {} tokens",
            loaded.metrics.documents, loaded.metrics.tokens
        );
        Ok(self.reference.insert(loaded))
    }

    /// Assign filename categories to the target corpus documents.
    ///
    /// A malformed convention is reported and leaves the corpus
    /// uncategorized; the corpus itself stays usable.
    pub fn assign_categories(&mut self) -> Result<BTreeMap<String, usize>, CorpusError> {
        let target = self.target.as_ref().ok_or(CorpusError::MissingTargetCorpus)?;

        match extract_categories(&target.corpus.doc_ids()) {
            Ok(categories) => {
                let counts = count_categories(&categories);
                info!("Assigned {} categories", counts.len());
                self.categories = Some(categories);
                Ok(counts)
            }
            Err(err) => {
                warn!("{}", err);
                self.categories = None;
                Err(err)
            }
        }
    }

    /// Compute and store the target corpus frequency tables.
    pub fn build_frequency_tables(&mut self) -> Result<&FrequencyTables, CorpusError> {
        let target = self.target.as_ref().ok_or(CorpusError::MissingTargetCorpus)?;
        let tables = FrequencyTables::compute(&target.corpus, &target.metrics)?;
        Ok(self.frequency_tables.insert(tables))
    }

    /// Discard every corpus and everything derived from them.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn target(&self) -> Option<&LoadedCorpus> {
        self.target.as_ref()
    }

    pub fn reference(&self) -> Option<&LoadedCorpus> {
        self.reference.as_ref()
    }

    /// Category of each target document, in corpus order.
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn category_counts(&self) -> Option<BTreeMap<String, usize>> {
        self.categories.as_deref().map(count_categories)
    }

    pub fn frequency_tables(&self) -> Option<&FrequencyTables> {
        self.frequency_tables.as_ref()
    }
}

fn check_collisions(incoming: &Corpus, existing: &Corpus) -> Result<(), CorpusError> {
    let mut ids: Vec<String> = incoming
        .doc_ids()
        .into_iter()
        .filter(|id| existing.contains(id))
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Ok(());
    }

    ids.sort();
    warn!("Rejecting corpus sharing documents with the loaded corpus: {:?}", ids);
    Err(CorpusError::CrossCorpusCollision { ids })
}
