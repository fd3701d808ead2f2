#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kolar-analytics/kolar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Pipeline stages for industry signal generation.
//!
//! Data flows strictly loader → aggregate → cluster → signal → propagate.
//! Each stage is a pure function of its input table and the shared
//! [`PipelineConfig`](kolar_traits::PipelineConfig); the [`pipeline`]
//! module wires them together and owns the error-to-empty-sentinel policy.

pub mod aggregate;
pub mod cache;
pub mod cluster;
pub mod loader;
pub mod pipeline;
pub mod propagate;
pub mod signal;

// Re-export main types
pub use aggregate::aggregate_by_industry;
pub use cache::CachedPipeline;
pub use cluster::cluster_industries;
pub use loader::load_securities;
pub use pipeline::{Pipeline, PipelineOutput};
pub use propagate::propagate_to_securities;
pub use signal::{assign_signals, cluster_profiles};
