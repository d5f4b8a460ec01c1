pub mod cli;
pub mod corpus;
pub mod frequency;
pub mod models;
pub mod scanner;
pub mod tagger;
pub mod utils;
pub mod workspace;

#[cfg(test)]
mod test_utils;

pub use corpus::{Corpus, CorpusError, Document, SourceDocument, SpanLabel, Token};
pub use frequency::{CorpusMetrics, FrequencyRow, FrequencyTables, Tagset};
pub use models::{CorpusSummary, ExtraData, Header, Output, SystemEnvironment};
pub use scanner::{ScanResult, collect_documents};
pub use tagger::{Annotation, Iob, RuleTagger, Tagger};
pub use workspace::{LoadedCorpus, Workspace};
