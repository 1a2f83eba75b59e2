//! Merge raw documents by logical source key
//!
//! Fragments belonging to one logical source (the pages of a PDF, the rows
//! of a CSV) arrive as separate raw documents. This fold concatenates their
//! texts under a single key while keeping the first fragment's metadata.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use crate::types::{MergedDocument, RawDocument};

/// Reduce the aggregated document sequence to one merged document per
/// logical source key, in order of first appearance.
///
/// The key is the document's non-empty `file_name`, else its `source`, else
/// a synthesized `source_{k}`. Synthesized keys come from a counter over
/// keyless documents, so two documents lacking both `file_name` and
/// `source` never merge with each other.
pub fn merge_documents(documents: Vec<RawDocument>) -> Vec<MergedDocument> {
    let mut merged: Vec<MergedDocument> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut fallback_seq = 0usize;

    for doc in documents {
        let key = match source_key(&doc) {
            Some(key) => key.to_string(),
            None => {
                let key = next_fallback_key(&mut fallback_seq, &index);
                tracing::debug!(key = %key, "Document without file_name or source, synthesized key");
                key
            }
        };

        match index.get(&key) {
            Some(&pos) => {
                let entry = &mut merged[pos];
                entry.text.push('\n');
                entry.text.push_str(&doc.text);
                entry.fragments += 1;
                // metadata stays frozen to the first fragment's
            }
            None => {
                index.insert(key.clone(), merged.len());
                merged.push(MergedDocument {
                    key,
                    text: doc.text,
                    metadata: doc.metadata,
                    content_hash: String::new(),
                    fragments: 1,
                });
            }
        }
    }

    for doc in &mut merged {
        doc.content_hash = hash_content(&doc.text);
    }

    tracing::info!(merged = merged.len(), "Merged documents by source key");
    merged
}

/// Logical source key: non-empty file name, else source
fn source_key(doc: &RawDocument) -> Option<&str> {
    doc.metadata.file_name().or(doc.metadata.source.as_deref())
}

/// Next unused synthesized key.
///
/// The counter runs over keyless documents only; it also skips past any
/// real key that happens to be named `source_{k}` already.
fn next_fallback_key(seq: &mut usize, index: &HashMap<String, usize>) -> String {
    loop {
        let key = format!("source_{}", *seq);
        *seq += 1;
        if !index.contains_key(&key) {
            return key;
        }
    }
}

/// SHA-256 hex digest of the merged text
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
