//! CSV file loader
//!
//! Each record becomes one raw document of `header: value` lines, with the
//! CSV's file name as the logical source key. The merge step joins the rows
//! of one file back into a single document. Missing paths are skipped with
//! a warning rather than aborting the run.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{DocMetadata, RawDocument, SourceKind};

/// Load every configured CSV file, skipping paths that do not exist.
pub fn load_csv_files(paths: &[PathBuf]) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::new();

    for path in paths {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "CSV file not found, skipping");
            continue;
        }
        let docs = load_csv_file(path)?;
        tracing::debug!(path = %path.display(), rows = docs.len(), "Loaded CSV");
        documents.extend(docs);
    }

    Ok(documents)
}

/// Load one CSV file, one document per record
fn load_csv_file(path: &Path) -> Result<Vec<RawDocument>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut documents = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // The reader's default strict mode rejects records whose field
        // count differs from the header's, so the zip below is lossless.
        debug_assert_eq!(headers.len(), record.len());
        let text = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| format!("{}: {}", header, value))
            .collect::<Vec<_>>()
            .join("\n");

        let mut metadata = DocMetadata::from_file(&file_name, SourceKind::Csv);
        metadata.insert_extra("row_number", serde_json::json!(row + 1));
        documents.push(RawDocument::new(text, metadata));
    }

    Ok(documents)
}
