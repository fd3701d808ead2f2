//! Run command implementation.

use anyhow::Result;
use kolar_pipeline::{Pipeline, PipelineOutput};
use kolar_traits::PipelineConfig;
use kolar_traits::types::{COL_CLUSTER, COL_CURRENT_PRICE, COL_INDUSTRY, COL_SIGNAL, COL_SYMBOL};

use crate::cmd::{cluster_column, f64_column, str_column};

/// Run the pipeline and render both output tables.
pub(crate) fn run_pipeline(config: PipelineConfig, format: &str, sample: usize) -> Result<()> {
    let pipeline = Pipeline::new(config);
    let output = pipeline.run();

    if output.is_empty() {
        println!("No signals generated: source data missing or not clusterable.");
        println!(
            "Checked: {}",
            pipeline.config().data_path.display()
        );
        return Ok(());
    }

    match format {
        "json" => render_json(&output),
        _ => render_text(&output, sample),
    }
}

fn render_json(output: &PipelineOutput) -> Result<()> {
    let doc = serde_json::json!({
        "industries": &output.industries,
        "securities": &output.securities,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn render_text(output: &PipelineOutput, sample: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Industry Signals                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let industries = &output.industries;
    let names = str_column(industries, COL_INDUSTRY)?;
    let signals = str_column(industries, COL_SIGNAL)?;
    let clusters = cluster_column(industries, COL_CLUSTER)?;
    let roe = f64_column(industries, "ROE")?;
    let debt = f64_column(industries, "Debt to Equity")?;
    let volatility = f64_column(industries, "Volatility")?;
    let ret_3m = f64_column(industries, "Return 3M")?;

    println!(
        "{:<28} {:<13} {:>7} {:>8} {:>8} {:>8} {:>9}",
        "Industry", "Signal", "Cluster", "ROE", "D/E", "Vol", "Ret 3M"
    );
    println!("{}", "─".repeat(86));
    for i in 0..industries.height() {
        println!(
            "{:<28} {:<13} {:>7} {:>8.2} {:>8.2} {:>8.2} {:>9.2}",
            truncate(&names[i], 28),
            signals[i],
            fmt_cluster(clusters[i]),
            roe[i],
            debt[i],
            volatility[i],
            ret_3m[i]
        );
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Securities (sample)                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let securities = &output.securities;
    let symbols = str_column(securities, COL_SYMBOL)?;
    let sec_industries = str_column(securities, COL_INDUSTRY)?;
    let sec_signals = str_column(securities, COL_SIGNAL)?;
    let prices = f64_column(securities, COL_CURRENT_PRICE)?;

    println!(
        "{:<12} {:<28} {:<13} {:>12}",
        "Symbol", "Industry", "Signal", "Price"
    );
    println!("{}", "─".repeat(68));
    for i in 0..securities.height().min(sample) {
        println!(
            "{:<12} {:<28} {:<13} {:>12.2}",
            symbols[i],
            truncate(&sec_industries[i], 28),
            sec_signals[i],
            prices[i]
        );
    }
    if securities.height() > sample {
        println!("... {} more securities", securities.height() - sample);
    }
    println!();

    Ok(())
}

fn fmt_cluster(cluster: Option<u32>) -> String {
    cluster.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
