//! Pipeline configuration.
//!
//! All tunables live in one immutable [`PipelineConfig`] value that is
//! passed by reference into every stage, keeping the stages pure and
//! independently testable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the source CSV of per-security rows.
    pub data_path: PathBuf,

    /// Fundamental feature columns used for aggregation and clustering.
    pub fundamental_features: Vec<String>,

    /// Technical feature columns used for aggregation and clustering.
    pub technical_features: Vec<String>,

    /// Number of clusters K (default: 6).
    pub n_clusters: usize,

    /// Seed for the k-means pseudo-random generator (default: 42).
    pub seed: u64,

    /// Number of random k-means restarts; the lowest-inertia fit wins
    /// (default: 10).
    pub n_init: usize,

    /// Iteration cap per k-means restart (default: 300).
    pub max_iter: usize,
}

impl PipelineConfig {
    /// The full feature set: fundamentals followed by technicals.
    pub fn all_features(&self) -> Vec<String> {
        self.fundamental_features
            .iter()
            .chain(self.technical_features.iter())
            .cloned()
            .collect()
    }

    /// Replace the source path, keeping everything else.
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Replace the cluster count, keeping everything else.
    #[must_use]
    pub const fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Replace the random seed, keeping everything else.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/nifty_500_validated_v19.csv"),
            fundamental_features: vec![
                "Stock P/E".to_string(),
                "ROE".to_string(),
                "Debt to Equity".to_string(),
                "Market Cap".to_string(),
                "Dividend Yield".to_string(),
                "ROCE".to_string(),
            ],
            technical_features: vec!["Volatility".to_string(), "Return 3M".to_string()],
            n_clusters: 6,
            seed: 42,
            n_init: 10,
            max_iter: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.n_clusters, 6);
        assert_eq!(config.seed, 42);
        assert_eq!(config.n_init, 10);
        assert_eq!(config.max_iter, 300);
        assert_eq!(config.fundamental_features.len(), 6);
        assert_eq!(config.technical_features.len(), 2);
    }

    #[test]
    fn test_all_features_order() {
        let config = PipelineConfig::default();
        let features = config.all_features();
        assert_eq!(features.len(), 8);
        assert_eq!(features[0], "Stock P/E");
        assert_eq!(features[6], "Volatility");
        assert_eq!(features[7], "Return 3M");
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_data_path("fixtures/universe.csv")
            .with_n_clusters(2)
            .with_seed(7);
        assert_eq!(config.data_path, PathBuf::from("fixtures/universe.csv"));
        assert_eq!(config.n_clusters, 2);
        assert_eq!(config.seed, 7);
    }
}
