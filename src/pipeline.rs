//! End-to-end analysis pipeline
//!
//! Runs the four core stages in sequence — vectorize, cluster, project,
//! extract keywords — and joins their outputs by document index. Each
//! stage hands the next an immutable value object; a run owns all of its
//! intermediate state, so concurrent runs cannot share fitted
//! vocabularies or centroids.

use crate::cluster::fit_kmeans;
use crate::error::PipelineError;
use crate::keywords::{top_terms, topic_label, TopicSummary};
use crate::project::project_2d;
use crate::vectorize::vectorize;

/// A single input document, already decoded to plain text.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique name within the batch, e.g. the filename
    pub name: String,
    pub text: String,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of topic clusters K
    pub clusters: usize,
    /// Keywords reported per topic
    pub top_terms: usize,
    /// Vocabulary size cap for the TF-IDF matrix
    pub max_vocab: usize,
    /// Seed for reproducible clustering
    pub seed: u64,
    /// Preview length in characters
    pub preview_len: usize,
    /// Iteration bound for K-means
    pub max_iters: usize,
    /// Convergence tolerance for K-means
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clusters: 3,
            top_terms: 5,
            max_vocab: 1000,
            seed: 42,
            preview_len: 100,
            max_iters: 300,
            tolerance: 1e-4,
        }
    }
}

/// Per-document output record, joinable to its topic by `topic`.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub name: String,
    /// Cluster id in [0, K)
    pub topic: usize,
    /// Human-readable topic label, e.g. "Topic 2"
    pub topic_label: String,
    pub x: f64,
    pub y: f64,
    /// Bounded-length prefix of the raw text
    pub preview: String,
}

/// Full output of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// One record per input document, in input order
    pub documents: Vec<DocumentRecord>,
    /// One summary per topic cluster, indexed by cluster id
    pub topics: Vec<TopicSummary>,
}

/// Run the full pipeline over `documents`.
///
/// Input bounds are validated before any numeric work: at least two
/// documents, and 2 ≤ K ≤ document count. On error nothing is returned;
/// there are no partial results.
pub fn analyze(documents: &[Document], config: &Config) -> Result<Analysis, PipelineError> {
    if documents.len() < 2 {
        return Err(PipelineError::NotEnoughDocuments(documents.len()));
    }
    if config.clusters < 2 {
        return Err(PipelineError::InvalidClusterCount(config.clusters));
    }
    if config.clusters > documents.len() {
        return Err(PipelineError::TooManyClusters {
            clusters: config.clusters,
            documents: documents.len(),
        });
    }

    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
    let terms = vectorize(&texts, config.max_vocab)?;

    // Clustering and projection both consume the same matrix in the
    // same row order, so labels and coordinates join by index
    let assignment = fit_kmeans(
        &terms,
        config.clusters,
        config.seed,
        config.max_iters,
        config.tolerance,
    )?;
    let coords = project_2d(&terms.matrix);
    let topics = top_terms(&terms, &assignment, config.top_terms)?;

    let records = documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let topic = assignment.labels[i];
            DocumentRecord {
                name: doc.name.clone(),
                topic,
                topic_label: topic_label(topic),
                x: coords[[i, 0]],
                y: coords[[i, 1]],
                preview: preview_of(&doc.text, config.preview_len),
            }
        })
        .collect();

    Ok(Analysis {
        documents: records,
        topics,
    })
}

/// Bounded character prefix shown in the document table
fn preview_of(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(len).collect();
        format!("{cut}...")
    }
}
