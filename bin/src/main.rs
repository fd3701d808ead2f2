//! Kolar CLI binary.
//!
//! Provides a command-line interface for the industry signal pipeline.

mod cmd;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kolar_traits::PipelineConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kolar")]
#[command(about = "Industry signal generation from security fundamentals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and render the two signal tables
    Run {
        /// Path to the source CSV (defaults to the configured dataset)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Number of clusters
        #[arg(short = 'k', long)]
        clusters: Option<usize>,

        /// Seed for the k-means pseudo-random generator
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Number of security rows to show in text mode
        #[arg(long, default_value = "15")]
        sample: usize,
    },

    /// Run the pipeline and export both tables as CSV files
    Export {
        /// Path to the source CSV (defaults to the configured dataset)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Number of clusters
        #[arg(short = 'k', long)]
        clusters: Option<usize>,

        /// Output directory for the two CSV files
        #[arg(short, long, default_value = "output")]
        out: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            clusters,
            seed,
            format,
            sample,
        } => cmd::run::run_pipeline(build_config(data, clusters, seed), &format, sample),
        Commands::Export {
            data,
            clusters,
            out,
        } => cmd::export::export_tables(build_config(data, clusters, None), &out),
    }
}

fn build_config(
    data: Option<PathBuf>,
    clusters: Option<usize>,
    seed: Option<u64>,
) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(clusters) = clusters {
        config.n_clusters = clusters;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config
}
