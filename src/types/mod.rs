//! Core types for the ingestion pipeline

pub mod document;

pub use document::{Chunk, DocMetadata, MergedDocument, RawDocument, SourceKind};
