//! Metadata cache controller.

use crate::CacheDescriptor;
use mixmoji_core::MetadataDocument;
use mixmoji_error::{
    FetchError, FetchErrorKind, JsonError, MixmojiResult, StorageError, StorageErrorKind,
};
use reqwest::header::{HeaderMap, HeaderName, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File holding the raw bytes of the last fetched metadata document.
const METADATA_FILE: &str = "metadata.json";

/// Sidecar file holding the revalidation tokens for the metadata file.
const DESCRIPTOR_FILE: &str = "metadata.cache.json";

/// What a refresh pass did.
///
/// The `Display` rendering is the host-facing message for manual refreshes.
///
/// # Examples
///
/// ```
/// use mixmoji_cache::RefreshOutcome;
///
/// assert_eq!(format!("{}", RefreshOutcome::Updated), "updated");
/// assert_eq!(format!("{}", RefreshOutcome::NotModified), "unchanged");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RefreshOutcome {
    /// New content was fetched and written to disk
    #[display("updated")]
    Updated,
    /// The cached content is still current; disk was not touched
    #[display("unchanged")]
    NotModified,
}

/// Manager for the on-disk metadata file and its cache descriptor.
///
/// One fetch and one disk write group are in flight per refresh invocation;
/// callers that can race (a periodic timer and a manual command) serialize
/// refreshes behind a single-flight guard at the orchestration layer.
#[derive(Debug, Clone)]
pub struct MetadataCache {
    client: Client,
    source_url: String,
    timeout: Duration,
    data_dir: PathBuf,
}

impl MetadataCache {
    /// Create a cache controller over a plugin-private data directory.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        source_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            source_url: source_url.into(),
            timeout,
            data_dir: data_dir.into(),
        }
    }

    /// Path of the metadata file.
    pub fn metadata_path(&self) -> PathBuf {
        self.data_dir.join(METADATA_FILE)
    }

    /// Path of the cache descriptor file.
    pub fn descriptor_path(&self) -> PathBuf {
        self.data_dir.join(DESCRIPTOR_FILE)
    }

    /// Whether a metadata file exists on disk.
    pub async fn has_metadata(&self) -> bool {
        tokio::fs::try_exists(self.metadata_path())
            .await
            .unwrap_or(false)
    }

    /// Parse the on-disk metadata file.
    ///
    /// # Errors
    ///
    /// Fails with `MissingMetadata` when the file is absent, `FileRead` on
    /// other I/O failures, and a `JsonError` when the bytes do not parse.
    #[tracing::instrument(skip(self))]
    pub async fn read_document(&self) -> MixmojiResult<MetadataDocument> {
        let path = self.metadata_path();
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::MissingMetadata(
                    path.display().to_string(),
                ))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;
        MetadataDocument::from_slice(&bytes)
    }

    /// Revalidate the cached metadata against the upstream source.
    ///
    /// Issues a conditional GET carrying `If-None-Match` / `If-Modified-Since`
    /// when the descriptor knows the matching token. A 304 leaves disk
    /// untouched; fresh content is written metadata-first, descriptor second,
    /// each via a temp-file rename.
    ///
    /// # Errors
    ///
    /// Fails on timeout, transport failure, non-2xx/non-304 status, or disk
    /// I/O failure. An empty 2xx body is a soft no-op, not an error.
    #[tracing::instrument(skip(self), fields(url = %self.source_url))]
    pub async fn refresh(&self) -> MixmojiResult<RefreshOutcome> {
        self.ensure_dir().await?;

        let descriptor = CacheDescriptor::read(&self.descriptor_path())
            .await
            .unwrap_or_default();

        let mut request = self.client.get(&self.source_url).timeout(self.timeout);
        if let Some(etag) = &descriptor.etag {
            request = request.header(IF_NONE_MATCH, etag.as_str());
        }
        if let Some(last_modified) = &descriptor.last_modified {
            request = request.header(IF_MODIFIED_SINCE, last_modified.as_str());
        }

        tracing::debug!(
            conditional = descriptor.has_validators(),
            "Requesting metadata"
        );

        let response = request.send().await.map_err(fetch_error)?;

        if response.status() == StatusCode::NOT_MODIFIED {
            tracing::debug!("Metadata unchanged upstream");
            return Ok(RefreshOutcome::NotModified);
        }

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "Metadata source returned error status");
            return Err(FetchError::new(FetchErrorKind::Status(status.as_u16())).into());
        }

        let etag = header_value(response.headers(), ETAG);
        let last_modified = header_value(response.headers(), LAST_MODIFIED);

        let body = response.bytes().await.map_err(fetch_error)?;
        if body.is_empty() {
            // Some servers answer 200 with an empty payload; keep what we have.
            tracing::warn!("Metadata source returned an empty body, keeping cached copy");
            return Ok(RefreshOutcome::NotModified);
        }

        // Content lands before the descriptor: a crash between the two writes
        // leaves fresh content that refetches unconditionally next time,
        // never a descriptor claiming stale content is current.
        write_atomic(&self.metadata_path(), &body).await?;

        let next = CacheDescriptor {
            etag,
            last_modified,
        };
        let descriptor_bytes = serde_json::to_vec(&next)
            .map_err(|e| JsonError::new(format!("Failed to serialize cache descriptor: {}", e)))?;
        write_atomic(&self.descriptor_path(), &descriptor_bytes).await?;

        tracing::info!(
            bytes = body.len(),
            etag = ?next.etag,
            last_modified = ?next.last_modified,
            "Metadata updated"
        );
        Ok(RefreshOutcome::Updated)
    }

    async fn ensure_dir(&self) -> MixmojiResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.data_dir.display(),
                e
            )))
            .into()
        })
    }
}

/// Map a reqwest failure onto the fetch error taxonomy.
#[track_caller]
fn fetch_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::new(FetchErrorKind::Timeout)
    } else {
        FetchError::new(FetchErrorKind::Transport(e.to_string()))
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Write to a temp file first, then rename for atomicity.
async fn write_atomic(path: &Path, bytes: &[u8]) -> MixmojiResult<()> {
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;
    Ok(())
}
