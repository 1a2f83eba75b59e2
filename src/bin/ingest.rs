//! Ingestion pipeline binary
//!
//! Run with: cargo run --bin eco-ingest -- --config ingest.toml

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eco_ingest::{pipeline, IngestConfig};

#[derive(Debug, Parser)]
#[command(name = "eco-ingest", version, about = "Ingest, merge, and chunk documents for vector indexing")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory scanned for PDF files (overrides config)
    #[arg(long)]
    pdf_dir: Option<PathBuf>,

    /// URL to fetch; repeatable (overrides config)
    #[arg(long = "url")]
    urls: Vec<String>,

    /// CSV file to load; repeatable (overrides config)
    #[arg(long = "csv")]
    csv_paths: Vec<PathBuf>,

    /// Path of the chunk artifact (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the chunk-distribution histogram
    #[arg(long)]
    no_report: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eco_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => IngestConfig::from_file(path)?,
        None => IngestConfig::default(),
    };

    if let Some(pdf_dir) = cli.pdf_dir {
        config.sources.pdf_dir = pdf_dir;
    }
    if !cli.urls.is_empty() {
        config.sources.urls = cli.urls;
    }
    if !cli.csv_paths.is_empty() {
        config.sources.csv_paths = cli.csv_paths;
    }
    if let Some(output) = cli.output {
        config.output.artifact_path = output;
    }
    if cli.no_report {
        config.output.report = false;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - PDF directory: {}", config.sources.pdf_dir.display());
    tracing::info!("  - URLs: {}", config.sources.urls.len());
    tracing::info!("  - CSV files: {}", config.sources.csv_paths.len());
    tracing::info!(
        "  - Chunk size: {} / overlap: {}",
        config.chunking.chunk_size,
        config.chunking.chunk_overlap
    );

    let summary = pipeline::run(&config).await?;

    println!(
        "Done: {} documents loaded, {} after merge, {} chunks ({} bytes) -> {}",
        summary.documents_loaded,
        summary.documents_merged,
        summary.chunks,
        summary.artifact_bytes,
        summary.artifact_path.display()
    );

    Ok(())
}
