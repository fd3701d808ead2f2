//! Propagation stage: every security inherits its industry's signal.

use polars::prelude::*;

use kolar_traits::types::{COL_CLUSTER, COL_INDUSTRY, COL_SIGNAL};
use kolar_traits::{Result, SecurityUniverse};

/// Left-join the industry-level signal and cluster id back onto the
/// original security table.
///
/// Every input security keeps its row; a security whose industry failed to
/// cluster gets null `Signal` and `Cluster` values instead of being
/// dropped.
pub fn propagate_to_securities(
    universe: &SecurityUniverse,
    industry_signals: &DataFrame,
) -> Result<DataFrame> {
    let signals = industry_signals
        .clone()
        .lazy()
        .select([col(COL_INDUSTRY), col(COL_SIGNAL), col(COL_CLUSTER)]);

    let securities = universe
        .data()
        .clone()
        .lazy()
        .join(
            signals,
            [col(COL_INDUSTRY)],
            [col(COL_INDUSTRY)],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;

    tracing::info!(
        securities = securities.height(),
        "propagated industry signals to securities"
    );
    Ok(securities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolar_traits::types::COL_SYMBOL;

    #[test]
    fn test_every_security_retained() {
        let universe = SecurityUniverse::new(
            df! {
                COL_SYMBOL => &["A1", "A2", "B1", "ORPHAN"],
                COL_INDUSTRY => &["Banks", "Banks", "Cement", "Shipping"],
            }
            .unwrap(),
        );
        let industry_signals = df! {
            COL_INDUSTRY => &["Banks", "Cement"],
            COL_SIGNAL => &["Strong Long", "Neutral"],
            COL_CLUSTER => &[0u32, 1],
        }
        .unwrap();

        let out = propagate_to_securities(&universe, &industry_signals).unwrap();
        assert_eq!(out.height(), 4);

        let signals: Vec<Option<&str>> = out
            .column(COL_SIGNAL)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(signals[0], Some("Strong Long"));
        assert_eq!(signals[1], Some("Strong Long"));
        assert_eq!(signals[2], Some("Neutral"));
        // Unclustered industry: row retained, signal null.
        assert_eq!(signals[3], None);

        let clusters: Vec<Option<u32>> = out
            .column(COL_CLUSTER)
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(clusters[3], None);
    }

    #[test]
    fn test_signal_matches_industry() {
        let universe = SecurityUniverse::new(
            df! {
                COL_SYMBOL => &["X", "Y"],
                COL_INDUSTRY => &["Banks", "Banks"],
            }
            .unwrap(),
        );
        let industry_signals = df! {
            COL_INDUSTRY => &["Banks"],
            COL_SIGNAL => &["Strong Short"],
            COL_CLUSTER => &[2u32],
        }
        .unwrap();

        let out = propagate_to_securities(&universe, &industry_signals).unwrap();
        let signals: Vec<&str> = out
            .column(COL_SIGNAL)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(signals, vec!["Strong Short", "Strong Short"]);
    }
}
