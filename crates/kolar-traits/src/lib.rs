#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kolar-analytics/kolar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Kolar industry signal pipeline.
//!
//! This crate provides the shared vocabulary used by every pipeline stage:
//! the security universe, the directional signal label, the pipeline
//! configuration, and the error type.

/// The version of the kolar-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod config;
pub mod error;
pub mod stats;
pub mod types;

// Re-exports
pub use config::PipelineConfig;
pub use error::{KolarError, Result};
pub use types::{SecurityUniverse, Signal};
