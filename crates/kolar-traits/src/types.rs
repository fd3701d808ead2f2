//! Common types used throughout the Kolar pipeline.
//!
//! This module defines the security universe wrapper, the directional
//! signal label, and the column-name contract shared with the presentation
//! collaborator.

use std::fmt;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Column holding the unique security identifier.
pub const COL_SYMBOL: &str = "Symbol";
/// Column holding the industry label a security belongs to.
pub const COL_INDUSTRY: &str = "Industry";
/// Column holding the latest traded price of a security.
pub const COL_CURRENT_PRICE: &str = "Current Price";
/// Cluster id column appended by the clustering stage.
pub const COL_CLUSTER: &str = "Cluster";
/// Signal label column appended by the classification stage.
pub const COL_SIGNAL: &str = "Signal";

/// Return-on-equity feature column, one of the two classification drivers.
pub const COL_ROE: &str = "ROE";
/// Debt-to-equity feature column, the other classification driver.
pub const COL_DEBT_TO_EQUITY: &str = "Debt to Equity";

/// A directional trade signal attached to a cluster, an industry, and by
/// propagation every security in that industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// High profitability, low leverage cluster profile.
    StrongLong,
    /// Low profitability, high leverage cluster profile.
    StrongShort,
    /// Everything in between.
    Neutral,
}

impl Signal {
    /// The display string stored in the `Signal` output column.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StrongLong => "Strong Long",
            Self::StrongShort => "Strong Short",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Container for the loaded per-security table.
///
/// `SecurityUniverse` wraps a Polars DataFrame with one row per financial
/// instrument. The table is immutable once loaded; pipeline stages read
/// from it and produce new tables.
///
/// # Expected Schema
///
/// The DataFrame should contain at minimum:
/// - [`COL_SYMBOL`]: security identifier (unique key)
/// - [`COL_INDUSTRY`]: industry label
/// - [`COL_CURRENT_PRICE`]: latest price
/// - The configured numeric feature columns
#[derive(Debug, Clone)]
pub struct SecurityUniverse {
    /// The underlying DataFrame of per-security rows.
    data: DataFrame,
}

impl SecurityUniverse {
    /// Creates a new `SecurityUniverse` from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of securities in the universe.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the column names in the universe table.
    pub fn columns(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Checks if a column exists in the universe table.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.column(name).ok()
    }
}

impl From<DataFrame> for SecurityUniverse {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for SecurityUniverse {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_labels() {
        assert_eq!(Signal::StrongLong.label(), "Strong Long");
        assert_eq!(Signal::StrongShort.label(), "Strong Short");
        assert_eq!(Signal::Neutral.label(), "Neutral");
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(Signal::StrongLong.to_string(), "Strong Long");
        assert_eq!(format!("{}", Signal::Neutral), "Neutral");
    }

    #[test]
    fn test_universe_from_dataframe() {
        let df = df! {
            COL_SYMBOL => &["RELIANCE", "TCS"],
            COL_INDUSTRY => &["Refineries", "IT Services"],
            COL_CURRENT_PRICE => &[2900.0, 3850.0],
        }
        .unwrap();

        let universe = SecurityUniverse::from(df);
        assert_eq!(universe.len(), 2);
        assert!(universe.has_column(COL_SYMBOL));
        assert!(universe.has_column(COL_INDUSTRY));
        assert!(!universe.has_column(COL_CLUSTER));
    }

    #[test]
    fn test_universe_empty() {
        let universe = SecurityUniverse::new(DataFrame::default());
        assert!(universe.is_empty());
        assert!(universe.columns().is_empty());
    }

    #[test]
    fn test_universe_column_access() {
        let df = df! {
            COL_SYMBOL => &["INFY"],
            COL_ROE => &[31.2],
        }
        .unwrap();

        let universe = SecurityUniverse::new(df);
        assert!(universe.column(COL_ROE).is_some());
        assert!(universe.column(COL_DEBT_TO_EQUITY).is_none());
    }

    #[test]
    fn test_universe_into_inner() {
        let df = df! {
            COL_SYMBOL => &["HDFCBANK"],
        }
        .unwrap();

        let universe = SecurityUniverse::new(df);
        let inner = universe.into_inner();
        assert_eq!(inner.height(), 1);
    }
}
