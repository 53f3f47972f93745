//! Seeded K-means clustering over the term matrix

use linfa::prelude::*;
use linfa_clustering::KMeans;
use linfa_nn::distance::L2Dist;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PipelineError;
use crate::vectorize::TermMatrix;

/// Result of a K-means run: one label per document plus the fitted
/// centroids in term-weight space.
#[derive(Debug, Clone)]
pub struct ClusterAssignment {
    /// Cluster label per document, in document order, each in [0, K)
    pub labels: Array1<usize>,
    /// Number of clusters requested
    pub n_clusters: usize,
    /// Cluster centroids, shape (K, terms)
    pub centroids: Array2<f64>,
    /// Within-cluster sum of squares
    pub inertia: f64,
}

impl ClusterAssignment {
    /// Get cluster sizes
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for &label in self.labels.iter() {
            if label < self.n_clusters {
                sizes[label] += 1;
            }
        }
        sizes
    }
}

/// Partition the documents of `terms` into `n_clusters` groups.
///
/// K-means runs in the native term-weight space with squared Euclidean
/// distance, seeded so that identical (matrix, K, seed) always yields
/// identical labels. Hitting the iteration bound without converging is
/// tolerated: the best labeling found so far is returned.
///
/// # Arguments
/// * `terms` - Fitted term matrix
/// * `n_clusters` - Number of clusters (2 ≤ K ≤ document count)
/// * `seed` - Seed for reproducible centroid initialization
/// * `max_iters` - Iteration bound for centroid updates
/// * `tolerance` - Convergence tolerance
pub fn fit_kmeans(
    terms: &TermMatrix,
    n_clusters: usize,
    seed: u64,
    max_iters: usize,
    tolerance: f64,
) -> Result<ClusterAssignment, PipelineError> {
    let n_docs = terms.n_documents();

    if n_clusters < 2 {
        return Err(PipelineError::InvalidClusterCount(n_clusters));
    }
    if n_docs < n_clusters {
        return Err(PipelineError::TooManyClusters {
            clusters: n_clusters,
            documents: n_docs,
        });
    }

    // k-means++ needs at least K distinct points to seed from; a corpus
    // of duplicated documents would starve it. Group identical rows
    // directly instead of fitting.
    let (n_distinct, grouped) = distinct_row_labels(&terms.matrix);
    if n_distinct < n_clusters {
        return Ok(group_identical_rows(terms, n_clusters, grouped));
    }

    // Dummy targets for unsupervised fitting
    let targets: Array1<usize> = Array1::zeros(n_docs);
    let dataset = Dataset::new(terms.matrix.clone(), targets);

    let rng = StdRng::seed_from_u64(seed);
    let model = KMeans::params_with(n_clusters, rng, L2Dist)
        .max_n_iterations(max_iters as u64)
        .tolerance(tolerance)
        .fit(&dataset)
        .map_err(|e| PipelineError::Clustering(e.to_string()))?;

    let labels = model.predict(&dataset);
    let centroids = model.centroids().clone();
    let inertia = compute_inertia(&terms.matrix, &labels, &centroids);

    Ok(ClusterAssignment {
        labels,
        n_clusters,
        centroids,
        inertia,
    })
}

/// Label every row by the index of its first occurrence among the
/// distinct row values, returning the distinct count as well.
fn distinct_row_labels(matrix: &Array2<f64>) -> (usize, Vec<usize>) {
    let mut reps: Vec<usize> = Vec::new();
    let mut labels = Vec::with_capacity(matrix.nrows());
    for i in 0..matrix.nrows() {
        match reps.iter().position(|&r| matrix.row(r) == matrix.row(i)) {
            Some(pos) => labels.push(pos),
            None => {
                labels.push(reps.len());
                reps.push(i);
            }
        }
    }
    (reps.len(), labels)
}

/// Assignment for the duplicate-heavy degenerate case: each distinct
/// row value becomes its own cluster, surplus clusters stay empty.
fn group_identical_rows(
    terms: &TermMatrix,
    n_clusters: usize,
    labels: Vec<usize>,
) -> ClusterAssignment {
    let mut centroids = Array2::zeros((n_clusters, terms.n_terms()));
    for (row, &label) in labels.iter().enumerate() {
        centroids.row_mut(label).assign(&terms.matrix.row(row));
    }

    let labels = Array1::from(labels);
    let inertia = compute_inertia(&terms.matrix, &labels, &centroids);
    ClusterAssignment {
        labels,
        n_clusters,
        centroids,
        inertia,
    }
}

/// Compute within-cluster sum of squares (inertia)
fn compute_inertia(features: &Array2<f64>, labels: &Array1<usize>, centroids: &Array2<f64>) -> f64 {
    let mut inertia = 0.0;

    for (i, &cluster) in labels.iter().enumerate() {
        if cluster < centroids.nrows() {
            let point = features.row(i);
            let centroid = centroids.row(cluster);
            let distance_sq = point
                .iter()
                .zip(centroid.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>();
            inertia += distance_sq;
        }
    }

    inertia
}
