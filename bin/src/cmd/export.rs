//! Export command implementation.

use std::fs::{self, File};
use std::path::Path;

use anyhow::Result;
use kolar_pipeline::Pipeline;
use kolar_traits::PipelineConfig;
use polars::prelude::*;

/// Run the pipeline and write both tables as CSV files into `out`.
pub(crate) fn export_tables(config: PipelineConfig, out: &Path) -> Result<()> {
    let pipeline = Pipeline::new(config);
    let output = pipeline.run();

    if output.is_empty() {
        println!("Nothing to export: source data missing or not clusterable.");
        return Ok(());
    }

    fs::create_dir_all(out)?;

    let mut industries = output.industries;
    let industry_path = out.join("industry_signals.csv");
    CsvWriter::new(File::create(&industry_path)?)
        .include_header(true)
        .finish(&mut industries)?;
    println!(
        "Wrote {} industries to {}",
        industries.height(),
        industry_path.display()
    );

    let mut securities = output.securities;
    let security_path = out.join("stock_signals.csv");
    CsvWriter::new(File::create(&security_path)?)
        .include_header(true)
        .finish(&mut securities)?;
    println!(
        "Wrote {} securities to {}",
        securities.height(),
        security_path.display()
    );

    Ok(())
}
