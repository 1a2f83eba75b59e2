//! eco-ingest: multi-source document ingestion and chunking pipeline
//!
//! Loads documents from local PDFs, remote web pages, and CSV files,
//! normalizes them into one document representation, merges fragments that
//! belong to the same logical source, splits the merged documents into
//! bounded overlapping chunks, and persists the chunk list as a binary
//! artifact for a downstream vector-indexing stage.

pub mod chunker;
pub mod config;
pub mod error;
pub mod loaders;
pub mod merge;
pub mod persist;
pub mod pipeline;
pub mod report;
pub mod types;

pub use chunker::TextChunker;
pub use config::IngestConfig;
pub use error::{Error, Result};
pub use pipeline::IngestSummary;
pub use types::{Chunk, DocMetadata, MergedDocument, RawDocument, SourceKind};
