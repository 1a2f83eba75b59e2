//! Document, merged-document, and chunk types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of source a document was loaded from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Local PDF file
    Pdf,
    /// Remote web page
    Web,
    /// CSV file row
    Csv,
}

/// Metadata attached to a document.
///
/// The two keys the merge and report logic inspect (`file_name`, `source`)
/// are typed fields; everything else a loader records passes through
/// untouched in `extra`. A `BTreeMap` keeps the serialized form stable
/// across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocMetadata {
    /// Originating file name, if the document came from a local file
    #[serde(default)]
    pub file_name: Option<String>,
    /// Source identifier (URL or path) when no file name applies
    #[serde(default)]
    pub source: Option<String>,
    /// Kind of loader that produced the document
    pub kind: SourceKind,
    /// Loader-specific metadata, passed through unchanged
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DocMetadata {
    /// Metadata for a document loaded from a local file
    pub fn from_file(file_name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            file_name: Some(file_name.into()),
            source: None,
            kind,
            extra: BTreeMap::new(),
        }
    }

    /// Metadata for a document identified only by a source string (e.g. a URL)
    pub fn from_source(source: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            file_name: None,
            source: Some(source.into()),
            kind,
            extra: BTreeMap::new(),
        }
    }

    /// File name, treating an empty string as absent
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Label used for grouping in the chunk report: file name,
    /// else source, else `"Unknown"`
    pub fn display_label(&self) -> &str {
        self.file_name()
            .or(self.source.as_deref())
            .unwrap_or("Unknown")
    }

    /// Record an extra metadata value
    pub fn insert_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra.insert(key.into(), value);
    }
}

/// A document as produced by a loader, before merging.
///
/// Immutable once created; several raw documents may belong to the same
/// logical source (e.g. the pages of one PDF).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Extracted text content
    pub text: String,
    /// Loader-assigned metadata
    pub metadata: DocMetadata,
}

impl RawDocument {
    /// Create a new raw document
    pub fn new(text: impl Into<String>, metadata: DocMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

/// All fragments sharing one logical source key, concatenated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedDocument {
    /// Logical source key the fragments were merged under
    pub key: String,
    /// Newline-joined fragment texts, in encounter order
    pub text: String,
    /// Metadata of the first fragment encountered for this key
    pub metadata: DocMetadata,
    /// SHA-256 hex digest of the merged text
    pub content_hash: String,
    /// Number of raw documents merged into this one
    pub fragments: u32,
}

/// A bounded slice of a merged document's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text
    pub text: String,
    /// Parent document's metadata, copied unchanged
    pub metadata: DocMetadata,
    /// Start position in the parent text (grapheme clusters)
    pub char_start: usize,
    /// End position in the parent text (grapheme clusters, exclusive)
    pub char_end: usize,
    /// Index of this chunk within its parent document
    pub chunk_index: u32,
}
