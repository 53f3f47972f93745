//! Command-line interface definitions and argument parsing

use clap::Parser;

use crate::pipeline::Config;

/// Research document topic clustering using TF-IDF and K-Means
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing input documents (.txt / .pdf)
    #[arg(short, long, default_value = "documents")]
    pub input: String,

    /// Number of topic clusters
    #[arg(short = 'k', long, default_value = "3")]
    pub clusters: usize,

    /// Keywords reported per topic
    #[arg(short = 'n', long, default_value = "5")]
    pub terms: usize,

    /// Maximum vocabulary size for the TF-IDF matrix
    #[arg(long, default_value = "1000")]
    pub max_vocab: usize,

    /// Random seed for reproducible clustering
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output path for the topic map plot
    #[arg(short, long, default_value = "topic_map.png")]
    pub output: String,

    /// Preview length (characters) in the document table
    #[arg(long, default_value = "100")]
    pub preview_len: usize,

    /// Maximum iterations for K-Means
    #[arg(long, default_value = "300")]
    pub max_iters: usize,

    /// Tolerance for K-Means convergence
    #[arg(long, default_value = "1e-4")]
    pub tolerance: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Reject topic counts outside the supported interface range
    pub fn validate_clusters(&self) -> crate::Result<()> {
        if !(2..=10).contains(&self.clusters) {
            anyhow::bail!(
                "Number of topics must be between 2 and 10, got {}",
                self.clusters
            );
        }
        Ok(())
    }

    /// Pipeline configuration derived from the parsed arguments
    pub fn to_config(&self) -> Config {
        Config {
            clusters: self.clusters,
            top_terms: self.terms,
            max_vocab: self.max_vocab,
            seed: self.seed,
            preview_len: self.preview_len,
            max_iters: self.max_iters,
            tolerance: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_clusters(clusters: usize) -> Args {
        Args {
            input: "documents".to_string(),
            clusters,
            terms: 5,
            max_vocab: 1000,
            seed: 42,
            output: "topic_map.png".to_string(),
            preview_len: 100,
            max_iters: 300,
            tolerance: 1e-4,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_clusters() {
        assert!(args_with_clusters(2).validate_clusters().is_ok());
        assert!(args_with_clusters(10).validate_clusters().is_ok());
        assert!(args_with_clusters(1).validate_clusters().is_err());
        assert!(args_with_clusters(11).validate_clusters().is_err());
    }

    #[test]
    fn test_to_config() {
        let config = args_with_clusters(4).to_config();
        assert_eq!(config.clusters, 4);
        assert_eq!(config.top_terms, 5);
        assert_eq!(config.max_vocab, 1000);
        assert_eq!(config.seed, 42);
    }
}
