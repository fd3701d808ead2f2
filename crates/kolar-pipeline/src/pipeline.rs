//! Pipeline orchestration.
//!
//! Runs the five stages strictly in sequence and owns the error policy:
//! every stage failure is logged with enough context to diagnose offline
//! and converted into the empty-output sentinel. No error crosses into a
//! presentation consumer.

use polars::prelude::*;

use kolar_traits::PipelineConfig;

use crate::{
    aggregate_by_industry, assign_signals, cluster_industries, load_securities,
    propagate_to_securities,
};

/// The two tables a pipeline run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Industry-level table: one row per clustered industry with its mean
    /// features, `Cluster` id, and `Signal` label.
    pub industries: DataFrame,
    /// Security-level table: the input universe with `Signal` and
    /// `Cluster` columns appended.
    pub securities: DataFrame,
}

impl PipelineOutput {
    /// The sentinel returned when any stage fails: two zero-row tables.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            industries: DataFrame::default(),
            securities: DataFrame::default(),
        }
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.securities.is_empty()
    }
}

/// The full aggregation → clustering → classification → propagation run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Execute all stages and return the two output tables.
    ///
    /// Never fails: a missing source file, an aggregate with no usable
    /// features, or a cluster count exceeding the clusterable industries
    /// all collapse to [`PipelineOutput::empty`], logged at the point of
    /// failure.
    pub fn run(&self) -> PipelineOutput {
        let universe = match load_securities(&self.config) {
            Ok(universe) if !universe.is_empty() => universe,
            Ok(_) => {
                tracing::warn!(
                    path = %self.config.data_path.display(),
                    "source dataset has no rows"
                );
                return PipelineOutput::empty();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.config.data_path.display(),
                    error = %e,
                    "failed to load source dataset"
                );
                return PipelineOutput::empty();
            }
        };

        let industries = match aggregate_by_industry(&universe, &self.config) {
            Ok(df) if !df.is_empty() => df,
            Ok(_) => {
                tracing::warn!(securities = universe.len(), "aggregation produced no industries");
                return PipelineOutput::empty();
            }
            Err(e) => {
                tracing::error!(securities = universe.len(), error = %e, "aggregation failed");
                return PipelineOutput::empty();
            }
        };

        let clustered = match cluster_industries(industries, &self.config) {
            Ok(df) => df,
            Err(e) => {
                tracing::error!(
                    clusters = self.config.n_clusters,
                    error = %e,
                    "clustering failed"
                );
                return PipelineOutput::empty();
            }
        };

        let industry_signals = match assign_signals(clustered, &self.config) {
            Ok(df) => df,
            Err(e) => {
                tracing::error!(error = %e, "signal classification failed");
                return PipelineOutput::empty();
            }
        };

        let securities = match propagate_to_securities(&universe, &industry_signals) {
            Ok(df) => df,
            Err(e) => {
                tracing::error!(error = %e, "signal propagation failed");
                return PipelineOutput::empty();
            }
        };

        tracing::info!(
            industries = industry_signals.height(),
            securities = securities.height(),
            "pipeline complete"
        );
        PipelineOutput {
            industries: industry_signals,
            securities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolar_traits::types::{COL_CLUSTER, COL_SIGNAL, COL_SYMBOL};
    use std::path::PathBuf;

    const HEADER: &str = "Symbol,Industry,Current Price,Stock P/E,ROE,Debt to Equity,Market Cap,Dividend Yield,ROCE,Volatility,Return 3M";

    fn temp_csv(name: &str, rows: &[String]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "kolar-pipeline-{}-{}.csv",
            std::process::id(),
            name
        ));
        let mut contents = String::from(HEADER);
        contents.push('\n');
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Five securities each for a quality industry and a junk industry.
    fn two_industry_rows() -> Vec<String> {
        let mut rows = Vec::new();
        for i in 0..5 {
            rows.push(format!(
                "QL{i},Quality,100.0,20.0,{roe},0.1,50000,1.5,25.0,0.2,5.0",
                roe = 30.0 + i as f64
            ));
            rows.push(format!(
                "JK{i},Junk,10.0,8.0,{roe},3.5,800,0.0,3.0,0.6,-12.0",
                roe = 1.0 + i as f64 * 0.1
            ));
        }
        rows
    }

    fn column_strs(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_source_yields_empty_output() {
        let config = PipelineConfig::default().with_data_path("/nonexistent/kolar/data.csv");
        let output = Pipeline::new(config).run();
        assert!(output.is_empty());
        assert_eq!(output.industries.height(), 0);
        assert_eq!(output.securities.height(), 0);
    }

    #[test]
    fn test_excessive_cluster_count_yields_empty_output() {
        let path = temp_csv("too-many-k", &two_industry_rows());
        let config = PipelineConfig::default()
            .with_data_path(path.as_path())
            .with_n_clusters(6); // only 2 industries
        let output = Pipeline::new(config).run();
        assert!(output.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_two_industry_scenario() {
        let path = temp_csv("two-industries", &two_industry_rows());
        let config = PipelineConfig::default()
            .with_data_path(path.as_path())
            .with_n_clusters(2);
        let output = Pipeline::new(config).run();
        assert!(!output.is_empty());

        // Industry table: both industries present, opposite signals.
        assert_eq!(output.industries.height(), 2);
        let industries = column_strs(&output.industries, "Industry");
        let signals = column_strs(&output.industries, COL_SIGNAL);
        for (industry, signal) in industries.iter().zip(signals.iter()) {
            match industry.as_deref() {
                Some("Quality") => assert_eq!(signal.as_deref(), Some("Strong Long")),
                Some("Junk") => assert_eq!(signal.as_deref(), Some("Strong Short")),
                other => panic!("unexpected industry {:?}", other),
            }
        }

        // Security table: all ten rows, each carrying its industry's signal.
        assert_eq!(output.securities.height(), 10);
        let symbols = column_strs(&output.securities, COL_SYMBOL);
        let signals = column_strs(&output.securities, COL_SIGNAL);
        for (symbol, signal) in symbols.iter().zip(signals.iter()) {
            let expected = if symbol.as_deref().unwrap().starts_with("QL") {
                "Strong Long"
            } else {
                "Strong Short"
            };
            assert_eq!(signal.as_deref(), Some(expected));
        }

        // Cluster ids are in [0, K).
        let clusters: Vec<u32> = output
            .securities
            .column(COL_CLUSTER)
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(clusters.len(), 10);
        assert!(clusters.iter().all(|&c| c < 2));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_determinism_across_runs() {
        let path = temp_csv("deterministic", &two_industry_rows());
        let config = PipelineConfig::default()
            .with_data_path(path.as_path())
            .with_n_clusters(2);

        let a = Pipeline::new(config.clone()).run();
        let b = Pipeline::new(config).run();
        assert_eq!(a.industries, b.industries);
        assert_eq!(a.securities, b.securities);

        std::fs::remove_file(path).unwrap();
    }
}
