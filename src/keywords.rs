//! Representative terms per topic cluster

use std::cmp::Ordering;

use ndarray::Array1;

use crate::cluster::ClusterAssignment;
use crate::error::PipelineError;
use crate::vectorize::TermMatrix;

/// A cluster summarized by its highest-weighted terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    /// Cluster id, in [0, K)
    pub id: usize,
    /// Human-readable label, e.g. "Topic 1"
    pub label: String,
    /// Top terms by descending mean weight; empty for an empty cluster
    pub terms: Vec<String>,
}

/// Human-readable label for cluster `id`
pub fn topic_label(id: usize) -> String {
    format!("Topic {}", id + 1)
}

/// Summarize every cluster with its `n_terms` highest mean-weight terms.
///
/// For each cluster the mean weight vector over its member rows is
/// ranked descending; ties break by lexical term order so the result is
/// deterministic. A cluster without members keeps its slot with an
/// empty term list.
pub fn top_terms(
    terms: &TermMatrix,
    assignment: &ClusterAssignment,
    n_terms: usize,
) -> Result<Vec<TopicSummary>, PipelineError> {
    let k = assignment.n_clusters;

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (index, &label) in assignment.labels.iter().enumerate() {
        if label >= k {
            return Err(PipelineError::LabelOutOfRange {
                index,
                label,
                clusters: k,
            });
        }
        members[label].push(index);
    }

    let mut topics = Vec::with_capacity(k);
    for (id, rows) in members.iter().enumerate() {
        let top = if rows.is_empty() {
            Vec::new()
        } else {
            let mut mean = Array1::<f64>::zeros(terms.n_terms());
            for &row in rows {
                mean += &terms.matrix.row(row);
            }
            mean /= rows.len() as f64;

            let mut ranked: Vec<(usize, f64)> = mean.iter().cloned().enumerate().collect();
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| terms.vocabulary[a.0].cmp(&terms.vocabulary[b.0]))
            });
            ranked
                .into_iter()
                .take(n_terms)
                .map(|(col, _)| terms.vocabulary[col].clone())
                .collect()
        };

        topics.push(TopicSummary {
            id,
            label: topic_label(id),
            terms: top,
        });
    }

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn assignment(labels: Vec<usize>, k: usize) -> ClusterAssignment {
        let n = labels.len();
        ClusterAssignment {
            labels: Array1::from(labels),
            n_clusters: k,
            centroids: Array2::zeros((k, 1)),
            inertia: 0.0,
        }
    }

    fn two_cluster_terms() -> TermMatrix {
        // columns: deep, learning, neural, pasta
        TermMatrix {
            matrix: array![
                [0.4, 0.8, 0.4, 0.0],
                [0.5, 0.6, 0.5, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            vocabulary: vec![
                "deep".to_string(),
                "learning".to_string(),
                "neural".to_string(),
                "pasta".to_string(),
            ],
        }
    }

    #[test]
    fn test_top_terms_ranked_by_mean_weight() {
        let terms = two_cluster_terms();
        let topics = top_terms(&terms, &assignment(vec![0, 0, 1], 2), 2).unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].label, "Topic 1");
        assert_eq!(topics[0].terms, vec!["learning".to_string(), "deep".to_string()]);
        assert_eq!(topics[1].terms, vec!["pasta".to_string(), "deep".to_string()]);
    }

    #[test]
    fn test_ties_break_lexically() {
        // deep and neural carry identical means in cluster 0
        let terms = TermMatrix {
            matrix: array![[0.5, 0.5], [0.5, 0.5]],
            vocabulary: vec!["neural".to_string(), "deep".to_string()],
        };
        let topics = top_terms(&terms, &assignment(vec![0, 0], 2), 2).unwrap();

        assert_eq!(topics[0].terms, vec!["deep".to_string(), "neural".to_string()]);
    }

    #[test]
    fn test_empty_cluster_gets_empty_terms() {
        let terms = two_cluster_terms();
        let topics = top_terms(&terms, &assignment(vec![0, 0, 0], 2), 2).unwrap();

        assert_eq!(topics[0].terms.len(), 2);
        assert!(topics[1].terms.is_empty());
    }

    #[test]
    fn test_at_most_n_terms() {
        let terms = two_cluster_terms();
        let topics = top_terms(&terms, &assignment(vec![0, 0, 1], 2), 10).unwrap();

        for topic in &topics {
            assert!(topic.terms.len() <= terms.n_terms());
            assert!(topic.terms.iter().all(|t| terms.vocabulary.contains(t)));
        }
    }

    #[test]
    fn test_label_out_of_range_fails() {
        let terms = two_cluster_terms();
        let result = top_terms(&terms, &assignment(vec![0, 2, 1], 2), 2);

        assert_eq!(
            result.unwrap_err(),
            PipelineError::LabelOutOfRange {
                index: 1,
                label: 2,
                clusters: 2
            }
        );
    }

    #[test]
    fn test_topic_labels_are_one_based() {
        assert_eq!(topic_label(0), "Topic 1");
        assert_eq!(topic_label(4), "Topic 5");
    }
}
