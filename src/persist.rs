//! Chunk artifact persistence
//!
//! The flat chunk list is bincode-encoded and written to a single file,
//! overwriting any previous artifact. The downstream indexing stage reads
//! it back with [`read_chunks`]; there is no version tag, the encoding is
//! the whole contract at this boundary.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Chunk;

/// Serialize the chunk list to `path`, creating parent directories as
/// needed. Returns the number of bytes written.
pub fn write_chunks(path: &Path, chunks: &[Chunk]) -> Result<usize> {
    let bytes = bincode::serde::encode_to_vec(chunks, bincode::config::standard())
        .map_err(|e| Error::Persist(format!("Failed to encode chunks: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &bytes)?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        sha256 = %format!("{:x}", hasher.finalize()),
        "Wrote chunk artifact"
    );
    Ok(bytes.len())
}

/// Read a chunk artifact back from disk.
pub fn read_chunks(path: &Path) -> Result<Vec<Chunk>> {
    let bytes = std::fs::read(path)?;
    let (chunks, _) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
        .map_err(|e| Error::Persist(format!("Failed to decode chunks: {}", e)))?;
    Ok(chunks)
}
