//! Error types for the ingestion pipeline

use thiserror::Error;

/// Pipeline error
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a file
    #[error("Failed to parse {filename}: {message}")]
    FileParse {
        /// File that failed to parse
        filename: String,
        /// Underlying parser message
        message: String,
    },

    /// Failed to fetch a URL
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// URL that failed
        url: String,
        /// Underlying client message
        message: String,
    },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to write or read the chunk artifact
    #[error("Persistence error: {0}")]
    Persist(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, Error>;
