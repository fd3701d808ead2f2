//! CLI subcommand modules.
//!
//! This module contains the implementations for all kolar CLI subcommands.

pub(crate) mod export;
pub(crate) mod run;

use anyhow::Result;
use polars::prelude::*;

/// Extract a string column as owned values, empty string for nulls.
pub(crate) fn str_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    Ok(df
        .column(name)
        .map_err(|e| anyhow::anyhow!("Missing {} column: {}", name, e))?
        .as_materialized_series()
        .str()
        .map_err(|e| anyhow::anyhow!("{} column error: {}", name, e))?
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect())
}

/// Extract a numeric column as f64 values, NaN for nulls.
pub(crate) fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(df
        .column(name)
        .map_err(|e| anyhow::anyhow!("Missing {} column: {}", name, e))?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|e| anyhow::anyhow!("{} column error: {}", name, e))?
        .f64()
        .map_err(|e| anyhow::anyhow!("{} column error: {}", name, e))?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// Extract the cluster id column; nulls stay `None` (rendered as "-").
pub(crate) fn cluster_column(df: &DataFrame, name: &str) -> Result<Vec<Option<u32>>> {
    Ok(df
        .column(name)
        .map_err(|e| anyhow::anyhow!("Missing {} column: {}", name, e))?
        .as_materialized_series()
        .u32()
        .map_err(|e| anyhow::anyhow!("{} column error: {}", name, e))?
        .into_iter()
        .collect())
}
