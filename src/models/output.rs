use std::collections::BTreeMap;

use serde::Serialize;

use crate::frequency::{CorpusMetrics, FrequencyTables};
use crate::workspace::LoadedCorpus;

pub const OUTPUT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub target: CorpusSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<CorpusSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, usize>>,
    pub frequency_tables: FrequencyTables,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub extra_data: ExtraData,
    pub warnings: Vec<String>,
    pub output_format_version: String,
}

#[derive(Serialize, Debug)]
pub struct ExtraData {
    pub documents_count: usize,
    pub excluded_count: usize,
    pub lexicon_categories: usize,
    pub system_environment: SystemEnvironment,
}

#[derive(Serialize, Debug)]
pub struct SystemEnvironment {
    pub operating_system: Option<String>,
    pub cpu_architecture: String,
    pub platform: String,
    pub rust_version: String,
}

/// Metrics, sorted document identifiers and tag vocabularies of one
/// loaded corpus.
#[derive(Serialize, Debug, PartialEq)]
pub struct CorpusSummary {
    pub metrics: CorpusMetrics,
    pub documents: Vec<String>,
    pub pos_tags: Vec<String>,
    pub ds_tags: Vec<String>,
}

impl From<&LoadedCorpus> for CorpusSummary {
    fn from(loaded: &LoadedCorpus) -> Self {
        Self {
            metrics: loaded.metrics,
            documents: loaded.corpus.sorted_doc_ids(),
            pos_tags: loaded.pos_tags.clone(),
            ds_tags: loaded.ds_tags.clone(),
        }
    }
}
