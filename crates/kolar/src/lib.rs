#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kolar-analytics/kolar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # kolar
//!
//! Industry signal generation for an equity universe.
//!
//! kolar is an umbrella crate that re-exports all kolar sub-crates for
//! convenience. It provides a unified API for running the aggregation →
//! clustering → signal-classification pipeline.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kolar::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let output = pipeline.run();
//! if output.is_empty() {
//!     println!("no signals (missing or unusable source data)");
//! } else {
//!     println!("{} industries signalled", output.industries.height());
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types ([`PipelineConfig`], [`Signal`], errors)
//! - [`cluster`] - Feature scaling and seeded k-means partitioning
//! - [`pipeline`] - The five pipeline stages and the orchestrator
//!
//! ## Architecture
//!
//! 1. **Loader** reads the per-security CSV into a [`SecurityUniverse`]
//! 2. **Aggregator** reduces securities to one mean feature vector per industry
//! 3. **Clusterer** standardizes and partitions industries deterministically
//! 4. **Classifier** labels each cluster from percentile thresholds over
//!    cluster-mean ROE and debt-to-equity
//! 5. **Propagator** joins the labels back onto every security

/// Version information for the kolar crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core types for the pipeline.
///
/// Re-exports [`kolar_traits`]: the configuration object, the signal
/// label, the security universe wrapper, and the shared error type.
pub mod traits {
    pub use kolar_traits::*;
}

/// Feature scaling and seeded k-means.
///
/// Re-exports [`kolar_cluster`].
pub mod cluster {
    pub use kolar_cluster::*;
}

/// Pipeline stages and orchestration.
///
/// Re-exports [`kolar_pipeline`].
pub mod pipeline {
    pub use kolar_pipeline::*;
}

// Re-export the working surface at the top level for convenience.
pub use kolar_pipeline::{CachedPipeline, Pipeline, PipelineOutput};
pub use kolar_traits::{KolarError, PipelineConfig, Result, SecurityUniverse, Signal};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use kolar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{CachedPipeline, Pipeline, PipelineOutput};
    pub use crate::{KolarError, PipelineConfig, Result, SecurityUniverse, Signal};
}
