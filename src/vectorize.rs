//! TF-IDF vectorization of raw document text

use std::collections::{HashMap, HashSet};

use ndarray::Array2;
use stop_words::{get, LANGUAGE};

use crate::error::PipelineError;

/// Shortest token kept by the tokenizer
const MIN_TOKEN_LEN: usize = 2;

/// Weighted term matrix together with its vocabulary.
///
/// Rows follow the input document order, one row per document; columns
/// follow `vocabulary`. Both are fixed once built.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// L2-normalized TF-IDF weights, shape (documents, terms)
    pub matrix: Array2<f64>,
    /// Lexically ordered terms, one per matrix column
    pub vocabulary: Vec<String>,
}

impl TermMatrix {
    pub fn n_documents(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Build an L2-normalized TF-IDF matrix over `texts`.
///
/// Terms are lowercased alphanumeric tokens with English stop words
/// removed. When the corpus has more distinct terms than `max_vocab`,
/// the most frequent across the corpus are kept (ties broken lexically).
/// Weights use the smoothed IDF `ln((1 + n) / (1 + df)) + 1`.
///
/// The transform is pure: identical input and configuration always
/// produce the identical matrix.
pub fn vectorize(texts: &[&str], max_vocab: usize) -> Result<TermMatrix, PipelineError> {
    if texts.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }

    let stop_list: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

    // Per-document term counts, stop words removed
    let doc_counts: Vec<HashMap<String, usize>> = texts
        .iter()
        .map(|text| {
            let mut counts = HashMap::new();
            for token in tokenize(text) {
                if !stop_list.contains(&token) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
            counts
        })
        .collect();

    let vocabulary = build_vocabulary(&doc_counts, max_vocab)?;
    let column: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    // Document frequency per retained term
    let mut doc_freq = vec![0usize; vocabulary.len()];
    for counts in &doc_counts {
        for term in counts.keys() {
            if let Some(&col) = column.get(term.as_str()) {
                doc_freq[col] += 1;
            }
        }
    }

    let n_docs = texts.len();
    let mut matrix = Array2::zeros((n_docs, vocabulary.len()));
    for (row, counts) in doc_counts.iter().enumerate() {
        for (term, &count) in counts {
            if let Some(&col) = column.get(term.as_str()) {
                let idf = ((1.0 + n_docs as f64) / (1.0 + doc_freq[col] as f64)).ln() + 1.0;
                matrix[[row, col]] = count as f64 * idf;
            }
        }
        let norm = matrix.row(row).dot(&matrix.row(row)).sqrt();
        if norm > 0.0 {
            matrix.row_mut(row).mapv_inplace(|w| w / norm);
        }
    }

    Ok(TermMatrix { matrix, vocabulary })
}

/// Lowercased alphanumeric tokens of at least `MIN_TOKEN_LEN` characters
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .map(|s| s.to_lowercase())
}

/// Rank terms by corpus-wide count, cap at `max_vocab`, return them in
/// lexical order for a stable column layout.
fn build_vocabulary(
    doc_counts: &[HashMap<String, usize>],
    max_vocab: usize,
) -> Result<Vec<String>, PipelineError> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for counts in doc_counts {
        for (term, &count) in counts {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }
    }

    if totals.is_empty() {
        return Err(PipelineError::EmptyVocabulary);
    }

    let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_vocab);

    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term.to_string()).collect();
    vocabulary.sort();
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_unit_length() {
        let texts = vec![
            "machine learning neural networks deep learning",
            "cooking recipes pasta italian food",
        ];
        let terms = vectorize(&texts, 1000).unwrap();

        assert_eq!(terms.n_documents(), 2);
        for row in terms.matrix.rows() {
            let norm = row.dot(&row).sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "row norm was {}", norm);
        }
    }

    #[test]
    fn test_stop_words_removed() {
        let texts = vec!["the cat and the dog", "the cat sat near the dog"];
        let terms = vectorize(&texts, 1000).unwrap();

        assert!(!terms.vocabulary.iter().any(|t| t == "the" || t == "and"));
        assert!(terms.vocabulary.iter().any(|t| t == "cat"));
        assert!(terms.vocabulary.iter().any(|t| t == "dog"));
    }

    #[test]
    fn test_vocabulary_is_lexical_and_capped() {
        // gamma appears 3 times, alpha and beta twice each; the cap keeps
        // gamma plus the lexically first of the tied pair
        let texts = vec!["gamma gamma alpha beta", "gamma alpha beta"];
        let terms = vectorize(&texts, 2).unwrap();

        assert_eq!(terms.vocabulary, vec!["alpha".to_string(), "gamma".to_string()]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let texts = vec!["x y neural networks", "z neural networks training"];
        let terms = vectorize(&texts, 1000).unwrap();

        assert!(!terms.vocabulary.iter().any(|t| t == "x" || t == "y" || t == "z"));
    }

    #[test]
    fn test_empty_corpus_fails() {
        let result = vectorize(&[], 1000);
        assert_eq!(result.unwrap_err(), PipelineError::EmptyCorpus);
    }

    #[test]
    fn test_all_stop_words_fails() {
        let texts = vec!["the and of", "is was the"];
        let result = vectorize(&texts, 1000);
        assert_eq!(result.unwrap_err(), PipelineError::EmptyVocabulary);
    }

    #[test]
    fn test_deterministic() {
        let texts = vec![
            "machine learning neural networks deep learning",
            "cooking recipes pasta italian food",
            "neural network training deep learning models",
        ];
        let first = vectorize(&texts, 1000).unwrap();
        let second = vectorize(&texts, 1000).unwrap();

        assert_eq!(first.vocabulary, second.vocabulary);
        assert_eq!(first.matrix, second.matrix);
    }

    #[test]
    fn test_rare_terms_outweigh_common_ones() {
        // "shared" appears in every document, "rare" in one; with equal
        // counts inside a document the rare term must score higher
        let texts = vec!["shared rare", "shared filler", "shared filler"];
        let terms = vectorize(&texts, 1000).unwrap();

        let shared = terms.vocabulary.iter().position(|t| t == "shared").unwrap();
        let rare = terms.vocabulary.iter().position(|t| t == "rare").unwrap();
        assert!(terms.matrix[[0, rare]] > terms.matrix[[0, shared]]);
    }
}
