//! Industry aggregation.

use polars::prelude::*;

use kolar_traits::types::COL_INDUSTRY;
use kolar_traits::{KolarError, PipelineConfig, Result, SecurityUniverse};

/// Aggregate the security universe into one mean feature vector per industry.
///
/// Only configured features that are present with a numeric dtype take part
/// in the aggregation; per column, securities lacking a value are excluded
/// from that column's group mean. Rows without an industry label are
/// dropped. The output is sorted by industry label so downstream stages see
/// a deterministic row order.
///
/// # Errors
///
/// Returns [`KolarError::InvalidData`] when none of the configured features
/// are present and numeric — there is nothing to cluster on.
pub fn aggregate_by_industry(
    universe: &SecurityUniverse,
    config: &PipelineConfig,
) -> Result<DataFrame> {
    let df = universe.data();

    let features: Vec<String> = config
        .all_features()
        .into_iter()
        .filter(|name| {
            df.column(name)
                .map(|c| c.dtype().is_primitive_numeric())
                .unwrap_or(false)
        })
        .collect();

    if features.is_empty() {
        return Err(KolarError::InvalidData(
            "none of the configured feature columns are present and numeric".to_string(),
        ));
    }

    let aggs: Vec<Expr> = features
        .iter()
        .map(|name| col(name.as_str()).cast(DataType::Float64).mean())
        .collect();

    let industries = df
        .clone()
        .lazy()
        .drop_nulls(Some(vec![col(COL_INDUSTRY)]))
        .group_by([col(COL_INDUSTRY)])
        .agg(aggs)
        .sort([COL_INDUSTRY], SortMultipleOptions::default())
        .collect()?;

    tracing::info!(
        industries = industries.height(),
        features = features.len(),
        "aggregated securities by industry"
    );
    Ok(industries)
}
