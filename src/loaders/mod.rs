//! Document loaders and the source aggregator

pub mod csv;
pub mod pdf;
pub mod web;

use crate::config::IngestConfig;
use crate::error::Result;
use crate::types::RawDocument;

/// Load documents from every configured source and concatenate them in the
/// fixed order PDF, then web, then CSV. No deduplication or validation;
/// absent sources contribute zero documents.
pub async fn load_all(config: &IngestConfig) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::new();

    let pdf_docs = pdf::load_pdf_dir(&config.sources.pdf_dir)?;
    tracing::info!(count = pdf_docs.len(), "Loaded PDF documents");
    documents.extend(pdf_docs);

    if !config.sources.urls.is_empty() {
        let client = web::build_client(&config.fetch)?;
        let web_docs = web::load_urls(&client, &config.sources.urls).await?;
        tracing::info!(count = web_docs.len(), "Loaded web pages");
        documents.extend(web_docs);
    }

    if !config.sources.csv_paths.is_empty() {
        let csv_docs = csv::load_csv_files(&config.sources.csv_paths)?;
        tracing::info!(count = csv_docs.len(), "Loaded CSV documents");
        documents.extend(csv_docs);
    }

    tracing::info!(total = documents.len(), "Loaded documents from all sources");
    Ok(documents)
}
