//! Cache descriptor sidecar file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Revalidation tokens from the last successfully fetched metadata document.
///
/// Persisted as JSON alongside the metadata file. An absent or corrupt
/// descriptor downgrades to "no cache info", which forces an unconditional
/// fetch on the next refresh; it is never a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDescriptor {
    /// `ETag` response header of the cached document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// `Last-Modified` response header of the cached document
    #[serde(
        rename = "lastModified",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
}

impl CacheDescriptor {
    /// Read a descriptor from disk, downgrading any failure to `None`.
    pub async fn read(path: &Path) -> Option<Self> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable cache descriptor, refetching unconditionally");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt cache descriptor, refetching unconditionally");
                None
            }
        }
    }

    /// Whether the descriptor carries any revalidation token.
    pub fn has_validators(&self) -> bool {
        self.etag.is_some() || self.last_modified.is_some()
    }
}
