#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kolar-analytics/kolar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Deterministic unsupervised grouping for industry feature vectors.

pub mod kmeans;
pub mod scale;

// Re-export main types
pub use kmeans::{KMeans, KMeansConfig, KMeansFit};
pub use scale::standardize_matrix;
