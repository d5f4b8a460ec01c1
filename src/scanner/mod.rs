//! Corpus directory scanning.

mod collect;

use crate::corpus::SourceDocument;

pub struct ScanResult {
    pub documents: Vec<SourceDocument>,
    pub excluded_count: usize,
}

pub use self::collect::collect_documents;
