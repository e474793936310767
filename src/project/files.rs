//! Uploaded file batches
//!
//! Uploads arrive as raw bytes per file. Decoding is best-effort: a file
//! that is not valid UTF-8 gets an opaque placeholder body instead of
//! failing, so one binary never sinks the whole batch. Classification only
//! ever runs on a fully decoded batch.

use serde::{Deserialize, Serialize};

/// One file from an upload, with its text content decoded best-effort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// Original size in bytes (not the decoded length)
    pub size: u64,
    pub content: String,
}

impl UploadedFile {
    /// Decode raw bytes; undecodable content becomes a placeholder marker
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Self {
        let content = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                log::warn!("Failed to decode '{}' as text, using placeholder", name);
                format!("[Binary file: {name}]")
            }
        };
        Self {
            name: name.to_string(),
            size: bytes.len() as u64,
            content,
        }
    }

    pub fn text(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            size: content.len() as u64,
            content: content.to_string(),
        }
    }
}

/// Decode a whole upload batch, preserving input order. This is the
/// join point: the classifier never sees a partial batch.
pub fn decode_batch<'a>(raw: impl IntoIterator<Item = (&'a str, &'a [u8])>) -> Vec<UploadedFile> {
    raw.into_iter()
        .map(|(name, bytes)| UploadedFile::from_bytes(name, bytes))
        .collect()
}
