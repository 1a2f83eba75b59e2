//! Fixed-window text chunking with overlap
//!
//! Windows advance by `chunk_size - overlap` grapheme clusters. A tail
//! shorter than the overlap is absorbed into the preceding window, so the
//! final chunk of a document may exceed `chunk_size` by up to
//! `overlap - 1` clusters instead of producing a fragment that is mostly
//! overlap.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::types::{Chunk, MergedDocument};

/// Text chunker with configurable size and overlap
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Target chunk size in grapheme clusters
    chunk_size: usize,
    /// Overlap between adjacent chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker. The overlap must be smaller than the chunk size.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::Config("chunk_size must be non-zero".to_string()));
        }
        if overlap >= chunk_size {
            return Err(Error::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from pipeline configuration
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split a merged document into overlapping chunks.
    ///
    /// Every document yields at least one chunk; chunks carry the parent's
    /// metadata unchanged. Boundaries are deterministic for a given text
    /// and configuration.
    pub fn chunk_document(&self, doc: &MergedDocument) -> Vec<Chunk> {
        let graphemes: Vec<(usize, &str)> = doc.text.grapheme_indices(true).collect();
        let total = graphemes.len();

        let byte_at = |pos: usize| -> usize {
            if pos == total {
                doc.text.len()
            } else {
                graphemes[pos].0
            }
        };

        let mut chunks = Vec::new();
        let mut start = 0usize;

        loop {
            let mut end = (start + self.chunk_size).min(total);
            // Absorb a tail shorter than the overlap into this chunk
            if total - end < self.overlap {
                end = total;
            }

            chunks.push(Chunk {
                text: doc.text[byte_at(start)..byte_at(end)].to_string(),
                metadata: doc.metadata.clone(),
                char_start: start,
                char_end: end,
                chunk_index: chunks.len() as u32,
            });

            if end == total {
                break;
            }
            start = end - self.overlap;
        }

        chunks
    }

    /// Chunk every merged document, flattening into one ordered list
    pub fn chunk_all(&self, documents: &[MergedDocument]) -> Vec<Chunk> {
        let chunks: Vec<Chunk> = documents
            .iter()
            .flat_map(|doc| self.chunk_document(doc))
            .collect();

        tracing::info!(
            documents = documents.len(),
            chunks = chunks.len(),
            "Chunked documents"
        );
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocMetadata, SourceKind};

    fn doc(text: &str) -> MergedDocument {
        MergedDocument {
            key: "report.pdf".to_string(),
            text: text.to_string(),
            metadata: DocMetadata::from_file("report.pdf", SourceKind::Pdf),
            content_hash: String::new(),
            fragments: 1,
        }
    }

    #[test]
    fn rejects_overlap_not_smaller_than_size() {
        assert!(TextChunker::new(100, 100).is_err());
        assert!(TextChunker::new(0, 0).is_err());
        assert!(TextChunker::new(100, 99).is_ok());
    }

    #[test]
    fn short_text_yields_single_chunk() {
        let chunker = TextChunker::new(1024, 200).unwrap();
        let chunks = chunker.chunk_document(&doc("short text"));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "short text");
        assert_eq!(chunks[0].char_start, 0);
        assert_eq!(chunks[0].char_end, 10);
    }

    #[test]
    fn empty_text_still_yields_one_chunk() {
        let chunker = TextChunker::new(1024, 200).unwrap();
        let chunks = chunker.chunk_document(&doc(""));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "");
    }

    #[test]
    fn two_thousand_chars_yield_exactly_two_chunks() {
        // The documented contract: 2000 characters at 1024/200 produce two
        // chunks whose concatenation minus the overlap region reconstructs
        // the original text.
        let text: String = (0..2000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let chunker = TextChunker::new(1024, 200).unwrap();
        let chunks = chunker.chunk_document(&doc(&text));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].char_start, 0);
        assert_eq!(chunks[0].char_end, 1024);
        assert_eq!(chunks[1].char_start, 824);
        assert_eq!(chunks[1].char_end, 2000);

        let reconstructed = format!("{}{}", chunks[0].text, &chunks[1].text[200..]);
        assert_eq!(reconstructed, text);
    }

    #[test]
    fn adjacent_chunks_share_the_overlap_region() {
        let text: String = "x".repeat(3000);
        let chunker = TextChunker::new(1024, 200).unwrap();
        let chunks = chunker.chunk_document(&doc(&text));

        for pair in chunks.windows(2) {
            assert_eq!(pair[0].char_end - pair[1].char_start, 200);
            let tail = &pair[0].text[pair[0].text.len() - 200..];
            let head = &pair[1].text[..200];
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn chunks_carry_parent_metadata_unchanged() {
        let mut parent = doc(&"y".repeat(2500));
        parent
            .metadata
            .insert_extra("page_count", serde_json::json!(3));
        let chunker = TextChunker::new(1024, 200).unwrap();
        for chunk in chunker.chunk_document(&parent) {
            assert_eq!(chunk.metadata, parent.metadata);
        }
    }

    #[test]
    fn offsets_count_graphemes_not_bytes() {
        // 10 two-byte characters; window math must not split inside one
        let text = "é".repeat(10);
        let chunker = TextChunker::new(4, 1).unwrap();
        let chunks = chunker.chunk_document(&doc(&text));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text.chars().count(), 4);
        assert_eq!(chunks[2].char_end, 10);
        let joined: String = chunks
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    c.text.clone()
                } else {
                    c.text.chars().skip(1).collect()
                }
            })
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn flat_count_is_sum_of_per_document_counts() {
        let docs = vec![doc(&"a".repeat(2000)), doc("tiny"), doc(&"b".repeat(5000))];
        let chunker = TextChunker::new(1024, 200).unwrap();

        let per_doc: usize = docs
            .iter()
            .map(|d| chunker.chunk_document(d).len())
            .sum();
        let flat = chunker.chunk_all(&docs);
        assert_eq!(flat.len(), per_doc);

        // chunk_index restarts per document
        assert_eq!(flat[0].chunk_index, 0);
    }

    #[test]
    fn same_input_gives_same_boundaries() {
        let text: String = "deterministic ".repeat(400);
        let chunker = TextChunker::new(1024, 200).unwrap();
        let a = chunker.chunk_document(&doc(&text));
        let b = chunker.chunk_document(&doc(&text));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.text, y.text);
            assert_eq!(x.char_start, y.char_start);
            assert_eq!(x.char_end, y.char_end);
        }
    }
}
