//! Top-level pipeline orchestration
//!
//! Load, merge, chunk, report, persist, strictly in that order. The
//! configuration is the only input; all stage outputs flow through
//! explicit values, no process-wide state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::chunker::TextChunker;
use crate::config::IngestConfig;
use crate::error::Result;
use crate::{loaders, merge, persist, report};

/// Per-stage counts for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Raw documents produced by all loaders
    pub documents_loaded: usize,
    /// Documents after the merge-by-source-key reduction
    pub documents_merged: usize,
    /// Chunks in the persisted artifact
    pub chunks: usize,
    /// Bytes written to the artifact
    pub artifact_bytes: usize,
    /// Where the artifact was written
    pub artifact_path: PathBuf,
}

/// Run the full ingestion pipeline.
pub async fn run(config: &IngestConfig) -> Result<IngestSummary> {
    let chunker = TextChunker::from_config(&config.chunking)?;

    let documents = loaders::load_all(config).await?;
    let documents_loaded = documents.len();

    let merged = merge::merge_documents(documents);
    let chunks = chunker.chunk_all(&merged);

    if config.output.report {
        report::render_histogram(&chunks, config.output.top_sources);
    }

    let artifact_bytes = persist::write_chunks(&config.output.artifact_path, &chunks)?;

    Ok(IngestSummary {
        documents_loaded,
        documents_merged: merged.len(),
        chunks: chunks.len(),
        artifact_bytes,
        artifact_path: config.output.artifact_path.clone(),
    })
}
