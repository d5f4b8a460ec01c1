//! Corpus metrics and tag frequency tables.

mod metrics;
mod table;


pub use metrics::CorpusMetrics;
pub use table::{FrequencyRow, FrequencyTables, Tagset, tags_table, write_csv};
