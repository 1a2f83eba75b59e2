//! Web page loader
//!
//! Fetches each configured URL with a single shared client and extracts
//! visible text from the page body. One raw document per URL, keyed by the
//! URL through `metadata.source`.

use reqwest::Client;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::types::{DocMetadata, RawDocument, SourceKind};

/// Build the HTTP client used for all page fetches
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Fetch and parse every URL, in order. Fetch failures and non-success
/// statuses abort the run.
pub async fn load_urls(client: &Client, urls: &[String]) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::with_capacity(urls.len());

    for url in urls {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url, format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        let doc = parse_web_page(url, &body);
        tracing::debug!(url = %url, chars = doc.text.len(), "Fetched web page");
        documents.push(doc);
    }

    Ok(documents)
}

/// Extract body text and title from an HTML page
fn parse_web_page(url: &str, html: &str) -> RawDocument {
    let document = scraper::Html::parse_document(html);

    let body_selector = scraper::Selector::parse("body").unwrap();
    let mut text = String::new();
    if let Some(body) = document.select(&body_selector).next() {
        for fragment in body.text() {
            let trimmed = fragment.trim();
            if !trimmed.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(trimmed);
            }
        }
    }

    let mut metadata = DocMetadata::from_source(url, SourceKind::Web);

    let title_selector = scraper::Selector::parse("title").unwrap();
    if let Some(title) = document.select(&title_selector).next() {
        let title = title.text().collect::<String>().trim().to_string();
        if !title.is_empty() {
            metadata.insert_extra("title", serde_json::json!(title));
        }
    }

    RawDocument::new(text, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_body_text_and_title() {
        let html = r#"<html><head><title> Annual Report </title></head>
            <body><h1>Biodiversity</h1><p>Funding gap widens.</p></body></html>"#;
        let doc = parse_web_page("https://example.org/report", html);

        assert!(doc.text.contains("Biodiversity"));
        assert!(doc.text.contains("Funding gap widens."));
        assert_eq!(doc.metadata.source.as_deref(), Some("https://example.org/report"));
        assert_eq!(doc.metadata.file_name, None);
        assert_eq!(
            doc.metadata.extra.get("title"),
            Some(&serde_json::json!("Annual Report"))
        );
    }

    #[test]
    fn page_without_body_text_yields_empty_document() {
        let doc = parse_web_page("https://example.org", "<html><body></body></html>");
        assert!(doc.text.is_empty());
        assert_eq!(doc.metadata.display_label(), "https://example.org");
    }

    #[tokio::test]
    async fn empty_url_list_contributes_zero_documents() {
        let client = build_client(&FetchConfig::default()).unwrap();
        let docs = load_urls(&client, &[]).await.unwrap();
        assert!(docs.is_empty());
    }
}
