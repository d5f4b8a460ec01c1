/// Error type for corpus ingestion and aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Two or more documents in one batch normalize to the same identifier
    DuplicateIdentifier { ids: Vec<String> },

    /// Identifiers in a new batch already exist in the other loaded corpus
    CrossCorpusCollision { ids: Vec<String> },

    /// Filename-prefix categories are missing, empty, or out of range
    MalformedCategoryConvention { reason: String },

    /// Metrics or frequency tables requested for a corpus with nothing to count
    EmptyCorpusOperation { operation: String },

    /// A reference corpus was loaded before any target corpus
    MissingTargetCorpus,
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier { ids } => {
                write!(f, "Documents contain duplicate names: {}", ids.join(", "))
            }
            Self::CrossCorpusCollision { ids } => write!(
                f,
                "Documents duplicated between target and reference corpora: {}",
                ids.join(", ")
            ),
            Self::MalformedCategoryConvention { reason } => {
                write!(f, "Categories are not formatted correctly: {}", reason)
            }
            Self::EmptyCorpusOperation { operation } => {
                write!(f, "Cannot compute {} on an empty corpus", operation)
            }
            Self::MissingTargetCorpus => {
                write!(f, "A target corpus must be loaded before a reference corpus")
            }
        }
    }
}

impl std::error::Error for CorpusError {}
