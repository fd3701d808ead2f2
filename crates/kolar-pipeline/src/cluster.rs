//! Clustering stage: standardize the industry feature matrix and partition
//! it with seeded k-means.

use ndarray::Array2;
use polars::prelude::*;

use kolar_cluster::{KMeans, KMeansConfig, standardize_matrix};
use kolar_traits::types::COL_CLUSTER;
use kolar_traits::{KolarError, PipelineConfig, Result};

/// Partition the aggregated industries into `config.n_clusters` clusters.
///
/// Industries with a missing value in any feature column are dropped first;
/// clustering needs a complete feature vector. The surviving matrix is
/// standardized column-wise and fed to the seeded k-means fit. The output
/// is the surviving table with an added `Cluster` column of ids in
/// `[0, n_clusters)`.
///
/// # Errors
///
/// Returns [`KolarError::MissingColumn`] when a configured feature column
/// is absent and [`KolarError::InvalidConfig`] when fewer complete industry
/// rows remain than the configured cluster count.
pub fn cluster_industries(industries: DataFrame, config: &PipelineConfig) -> Result<DataFrame> {
    let features = config.all_features();
    for name in &features {
        if industries.column(name).is_err() {
            return Err(KolarError::MissingColumn(name.clone()));
        }
    }

    let complete = industries
        .lazy()
        .drop_nulls(Some(features.iter().map(|f| col(f.as_str())).collect()))
        .collect()?;

    if complete.height() < config.n_clusters {
        return Err(KolarError::InvalidConfig(format!(
            "{} clusters requested but only {} industries have complete feature vectors",
            config.n_clusters,
            complete.height()
        )));
    }

    let matrix = feature_matrix(&complete, &features)?;
    let scaled = standardize_matrix(matrix.view());

    let fit = KMeans::new(KMeansConfig {
        n_clusters: config.n_clusters,
        n_init: config.n_init,
        max_iter: config.max_iter,
        seed: config.seed,
    })
    .fit(scaled.view())?;

    let mut clustered = complete;
    clustered.with_column(Column::new(COL_CLUSTER.into(), fit.labels))?;

    tracing::info!(
        clusters = config.n_clusters,
        industries = clustered.height(),
        inertia = fit.inertia,
        "clustered industries"
    );
    Ok(clustered)
}

/// Extract the feature columns into a dense row-major matrix.
fn feature_matrix(df: &DataFrame, features: &[String]) -> Result<Array2<f64>> {
    let mut matrix = Array2::zeros((df.height(), features.len()));
    for (j, name) in features.iter().enumerate() {
        let series = df
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        for (i, value) in series.f64()?.into_iter().enumerate() {
            matrix[[i, j]] = value.unwrap_or(f64::NAN);
        }
    }
    Ok(matrix)
}
