//! Typed errors for the clustering core

use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// Every variant is recoverable at the call boundary; the caller is
/// responsible for turning it into a user-facing message. The pipeline
/// returns no partial results on error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The vectorizer was handed zero documents.
    #[error("no documents to analyze")]
    EmptyCorpus,

    /// Clustering needs at least two documents to be meaningful.
    #[error("need at least 2 usable documents, got {0}")]
    NotEnoughDocuments(usize),

    /// Fewer than two topics were requested.
    #[error("number of topics must be at least 2, got {0}")]
    InvalidClusterCount(usize),

    /// More topics were requested than there are documents.
    #[error("cannot split {documents} documents into {clusters} topics")]
    TooManyClusters { clusters: usize, documents: usize },

    /// Every term in the corpus was removed by stop-word filtering.
    #[error("no usable terms remain after stop-word filtering")]
    EmptyVocabulary,

    /// K-means could not be fitted at all. Non-convergence within the
    /// iteration bound is not an error; the best labeling is kept.
    #[error("k-means fitting failed: {0}")]
    Clustering(String),

    /// A document carries a label outside [0, K). Defensive only: the
    /// clusterer contract makes this unreachable.
    #[error("document {index} has label {label} outside of 0..{clusters}")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        clusters: usize,
    },
}
