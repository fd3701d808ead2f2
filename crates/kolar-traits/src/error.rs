//! Error types for the Kolar pipeline.
//!
//! This module defines the error type shared by every pipeline stage. The
//! pipeline orchestrator catches all of these at its boundary and converts
//! them into the empty-output sentinel, so no error reaches a presentation
//! consumer.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Kolar operations.
#[derive(Debug, Error)]
pub enum KolarError {
    /// The source dataset file is absent or unreadable.
    #[error("Source dataset not found: {0}")]
    SourceMissing(PathBuf),

    /// A required column is missing from the data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The data is present but unusable (e.g. no configured feature column
    /// is numeric).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The configuration is inconsistent with the data (e.g. more clusters
    /// requested than complete industry rows).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Not enough data for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// I/O error while reading the source dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for KolarError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for KolarError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Kolar operations.
pub type Result<T> = std::result::Result<T, KolarError>;
