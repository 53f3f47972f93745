//! TopicMap: research document topic clustering and 2D mapping
//!
//! This library turns a batch of research documents into K topic groups
//! with representative keywords and a 2D coordinate per document for
//! plotting, using TF-IDF weighting, K-Means clustering, and principal
//! component projection.

pub mod cli;
pub mod cluster;
pub mod error;
pub mod ingest;
pub mod keywords;
pub mod pipeline;
pub mod project;
pub mod vectorize;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use cluster::{fit_kmeans, ClusterAssignment};
pub use error::PipelineError;
pub use keywords::{top_terms, TopicSummary};
pub use pipeline::{analyze, Analysis, Config, Document, DocumentRecord};
pub use project::project_2d;
pub use vectorize::{vectorize, TermMatrix};

/// Common result type used at the I/O boundary of the application
pub type Result<T> = anyhow::Result<T>;
