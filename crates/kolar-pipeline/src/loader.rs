//! Source dataset loader.

use polars::prelude::*;

use kolar_traits::types::{COL_INDUSTRY, COL_SYMBOL};
use kolar_traits::{KolarError, PipelineConfig, Result, SecurityUniverse};

/// Load the per-security table from the CSV at the configured path.
///
/// The schema is checked only as far as downstream stages require:
/// `Symbol` and `Industry` must exist so that a malformed file fails here
/// with a clear error instead of deep inside aggregation or the join.
///
/// # Errors
///
/// Returns [`KolarError::SourceMissing`] when the file is absent and
/// [`KolarError::MissingColumn`] when a required column is not present.
pub fn load_securities(config: &PipelineConfig) -> Result<SecurityUniverse> {
    let path = config.data_path.as_path();
    if !path.is_file() {
        return Err(KolarError::SourceMissing(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1024))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    for required in [COL_SYMBOL, COL_INDUSTRY] {
        if df.column(required).is_err() {
            return Err(KolarError::MissingColumn(required.to_string()));
        }
    }

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded security universe"
    );
    Ok(SecurityUniverse::new(df))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("kolar-loader-{}-{}.csv", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let config =
            PipelineConfig::default().with_data_path("/nonexistent/kolar/universe.csv");
        let err = load_securities(&config).unwrap_err();
        assert!(matches!(err, KolarError::SourceMissing(_)));
    }

    #[test]
    fn test_load_small_universe() {
        let path = temp_csv(
            "small",
            "Symbol,Industry,Current Price,ROE\nRELIANCE,Refineries,2900.0,9.2\nTCS,IT Services,3850.0,46.9\n",
        );
        let config = PipelineConfig::default().with_data_path(path.as_path());

        let universe = load_securities(&config).unwrap();
        assert_eq!(universe.len(), 2);
        assert!(universe.has_column(COL_SYMBOL));
        assert!(universe.has_column("ROE"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_rejects_missing_industry_column() {
        let path = temp_csv("noindustry", "Symbol,Current Price\nRELIANCE,2900.0\n");
        let config = PipelineConfig::default().with_data_path(path.as_path());

        let err = load_securities(&config).unwrap_err();
        assert!(matches!(err, KolarError::MissingColumn(name) if name == COL_INDUSTRY));

        std::fs::remove_file(path).unwrap();
    }
}
