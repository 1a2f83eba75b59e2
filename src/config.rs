//! Configuration for the ingestion pipeline

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Input sources
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// HTTP fetch configuration
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl IngestConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }
}

/// Input source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Directory scanned (non-recursively) for PDF files
    pub pdf_dir: PathBuf,
    /// URLs to fetch and parse
    #[serde(default)]
    pub urls: Vec<String>,
    /// CSV files to load; missing paths are skipped with a warning
    #[serde(default)]
    pub csv_paths: Vec<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            pdf_dir: PathBuf::from("data/raw"),
            urls: Vec::new(),
            csv_paths: Vec::new(),
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between adjacent chunks in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,   // Larger chunks = more context
            chunk_overlap: 200, // More overlap = better continuity
        }
    }
}

/// HTTP fetch configuration for the web loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("eco-ingest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the serialized chunk artifact
    pub artifact_path: PathBuf,
    /// Render the chunk-count histogram after chunking
    pub report: bool,
    /// Number of sources shown in the histogram
    pub top_sources: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("data/chunks.bin"),
            report: true,
            top_sources: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_pipeline_constants() {
        let config = IngestConfig::default();
        assert_eq!(config.chunking.chunk_size, 1024);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.output.top_sources, 15);
        assert!(config.output.report);
        assert!(config.sources.urls.is_empty());
    }

    #[test]
    fn loads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[sources]
pdf_dir = "docs/pdfs"
urls = ["https://example.org/report"]

[chunking]
chunk_size = 512
chunk_overlap = 64
"#
        )
        .unwrap();

        let config = IngestConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sources.pdf_dir, PathBuf::from("docs/pdfs"));
        assert_eq!(config.sources.urls.len(), 1);
        assert_eq!(config.chunking.chunk_size, 512);
        // Unspecified sections keep their defaults
        assert_eq!(config.output.artifact_path, PathBuf::from("data/chunks.bin"));
        assert_eq!(config.fetch.timeout_secs, 30);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = IngestConfig::from_file("no/such/config.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
