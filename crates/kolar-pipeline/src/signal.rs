//! Signal classification stage.
//!
//! Each cluster is reduced to its profile (the mean of every feature over
//! member industries), two distributional thresholds are derived from the
//! profiles, and every cluster is assigned exactly one directional label
//! which its industries inherit.

use std::collections::HashMap;

use polars::prelude::*;

use kolar_traits::stats::quantile;
use kolar_traits::types::{COL_CLUSTER, COL_DEBT_TO_EQUITY, COL_ROE, COL_SIGNAL};
use kolar_traits::{KolarError, PipelineConfig, Result, Signal};

/// Percentile for the upper threshold over cluster-profile values.
const UPPER_QUANTILE: f64 = 0.66;
/// Percentile for the lower threshold over cluster-profile values.
const LOWER_QUANTILE: f64 = 0.33;

/// Compute per-cluster feature means over the clustered industry table.
///
/// One row per cluster id, sorted by cluster id, columns = `Cluster` plus
/// the configured features.
pub fn cluster_profiles(clustered: &DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    if clustered.column(COL_CLUSTER).is_err() {
        return Err(KolarError::MissingColumn(COL_CLUSTER.to_string()));
    }

    let aggs: Vec<Expr> = config
        .all_features()
        .iter()
        .filter(|name| clustered.column(name.as_str()).is_ok())
        .map(|name| col(name.as_str()).mean())
        .collect();

    let profiles = clustered
        .clone()
        .lazy()
        .group_by([col(COL_CLUSTER)])
        .agg(aggs)
        .sort([COL_CLUSTER], SortMultipleOptions::default())
        .collect()?;
    Ok(profiles)
}

/// Classify each cluster and append the `Signal` column to the clustered
/// industry table.
///
/// Thresholds are the 66th and 33rd percentiles of cluster-mean ROE and
/// cluster-mean debt-to-equity across the cluster profiles — derived from
/// the observed distribution, not fixed cutoffs, so the rule adapts to the
/// loaded universe. Comparisons are strict: a cluster sitting exactly on a
/// threshold stays `Neutral`.
///
/// # Errors
///
/// Returns [`KolarError::MissingColumn`] when the `Cluster`, `ROE`, or
/// `Debt to Equity` column is absent.
pub fn assign_signals(clustered: DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    let profiles = cluster_profiles(&clustered, config)?;
    let signal_map = classify_profiles(&profiles)?;

    let labels: Vec<&str> = clustered
        .column(COL_CLUSTER)?
        .as_materialized_series()
        .u32()?
        .into_iter()
        .map(|id| {
            id.and_then(|id| signal_map.get(&id))
                .map_or(Signal::Neutral.label(), Signal::label)
        })
        .collect();

    let mut signalled = clustered;
    signalled.with_column(Column::new(COL_SIGNAL.into(), labels))?;

    tracing::info!(
        clusters = signal_map.len(),
        "assigned signals to industries from cluster profiles"
    );
    Ok(signalled)
}

/// Derive one [`Signal`] per cluster from the profile table.
fn classify_profiles(profiles: &DataFrame) -> Result<HashMap<u32, Signal>> {
    let ids: Vec<u32> = profiles
        .column(COL_CLUSTER)?
        .as_materialized_series()
        .u32()?
        .into_iter()
        .flatten()
        .collect();

    let roe = profile_values(profiles, COL_ROE)?;
    let debt = profile_values(profiles, COL_DEBT_TO_EQUITY)?;

    let roe_top = threshold(&roe, UPPER_QUANTILE, COL_ROE)?;
    let roe_bottom = threshold(&roe, LOWER_QUANTILE, COL_ROE)?;
    let debt_top = threshold(&debt, UPPER_QUANTILE, COL_DEBT_TO_EQUITY)?;
    let debt_bottom = threshold(&debt, LOWER_QUANTILE, COL_DEBT_TO_EQUITY)?;

    let map = ids
        .into_iter()
        .zip(roe.iter().zip(debt.iter()))
        .map(|(id, (&roe, &debt))| {
            let signal = if roe > roe_top && debt < debt_bottom {
                Signal::StrongLong
            } else if roe < roe_bottom && debt > debt_top {
                Signal::StrongShort
            } else {
                Signal::Neutral
            };
            (id, signal)
        })
        .collect();
    Ok(map)
}

fn profile_values(profiles: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(profiles
        .column(name)
        .map_err(|_| KolarError::MissingColumn(name.to_string()))?
        .as_materialized_series()
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

fn threshold(values: &[f64], q: f64, name: &str) -> Result<f64> {
    quantile(values, q).ok_or_else(|| {
        KolarError::InvalidData(format!("no finite cluster-mean {} values", name))
    })
}
