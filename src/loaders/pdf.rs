//! PDF directory loader
//!
//! Scans a directory (non-recursively) for `.pdf` files and emits one raw
//! document per page, all sharing the file's `file_name` so the merge step
//! can reassemble them. Extraction goes through `lopdf` page by page, with
//! whole-file `pdf-extract` as a fallback when that yields nothing.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::{DocMetadata, RawDocument, SourceKind};

/// Load every PDF in `dir`, one document per extractable page.
///
/// Files are processed in name order so the output is deterministic. A
/// missing directory contributes zero documents with a warning; a PDF with
/// no extractable text is a fatal parse error.
pub fn load_pdf_dir(dir: &Path) -> Result<Vec<RawDocument>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "PDF directory not found, skipping");
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let data = std::fs::read(&path)?;
        let docs = parse_pdf(&file_name, &data)?;
        tracing::debug!(file = %file_name, pages = docs.len(), "Parsed PDF");
        documents.extend(docs);
    }

    Ok(documents)
}

/// Parse one PDF into per-page documents
fn parse_pdf(file_name: &str, data: &[u8]) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::new();

    if let Ok(doc) = lopdf::Document::load_mem(data) {
        let pages = doc.get_pages();
        let page_count = pages.len() as u32;

        for page_number in pages.keys() {
            let text = match doc.extract_text(&[*page_number]) {
                Ok(text) => normalize_extracted_text(&text),
                Err(e) => {
                    tracing::debug!(
                        file = %file_name,
                        page = page_number,
                        "Page extraction failed: {}",
                        e
                    );
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }

            let mut metadata = DocMetadata::from_file(file_name, SourceKind::Pdf);
            metadata.insert_extra("page_number", serde_json::json!(page_number));
            metadata.insert_extra("page_count", serde_json::json!(page_count));
            documents.push(RawDocument::new(text, metadata));
        }
    }

    if !documents.is_empty() {
        return Ok(documents);
    }

    // Per-page extraction produced nothing; fall back to whole-file extraction
    tracing::warn!(file = %file_name, "Per-page extraction empty, trying whole-file fallback");
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| Error::file_parse(file_name, e.to_string()))?;
    let text = normalize_extracted_text(&text);

    if text.is_empty() {
        return Err(Error::file_parse(
            file_name,
            "No text content could be extracted from PDF",
        ));
    }

    Ok(vec![RawDocument::new(
        text,
        DocMetadata::from_file(file_name, SourceKind::Pdf),
    )])
}

/// Fold problem glyphs from PDF fonts into ASCII approximations and strip
/// empty lines and null characters.
fn normalize_extracted_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\0' => {}
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' => out.push('-'),
            '\u{2014}' | '\u{2015}' => out.push_str("--"),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2022}' => out.push_str("* "),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            _ => out.push(ch),
        }
    }

    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_contributes_zero_documents() {
        let docs = load_pdf_dir(Path::new("no/such/dir")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn empty_directory_contributes_zero_documents() {
        let dir = tempfile::tempdir().unwrap();
        let docs = load_pdf_dir(dir.path()).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn non_pdf_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a pdf").unwrap();
        let docs = load_pdf_dir(dir.path()).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn normalization_folds_glyphs_and_blank_lines() {
        let raw = "first \u{2013} line\u{FB01}\n\n   \n second \u{2019}quoted\u{2019}\0";
        let text = normalize_extracted_text(raw);
        assert_eq!(text, "first - linefi\nsecond 'quoted'");
    }

    #[test]
    fn normalization_of_clean_text_is_identity_per_line() {
        assert_eq!(normalize_extracted_text("a\nb"), "a\nb");
    }
}
