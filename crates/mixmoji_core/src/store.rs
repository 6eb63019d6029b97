//! In-memory metadata snapshot holder.

use crate::{EmojiEntry, MetadataDocument};
use mixmoji_error::{LookupError, LookupErrorKind, MixmojiResult};
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide holder for the active metadata document.
///
/// The document is absent until the first [`load`](Self::load) and replaced
/// wholesale on each subsequent one. Queries are synchronous and safe from
/// any number of concurrent callers; the lock is held only long enough to
/// clone the `Arc`, so readers never observe a partially-updated document.
#[derive(Debug, Default)]
pub struct MetadataStore {
    current: RwLock<Option<Arc<MetadataDocument>>>,
}

impl MetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active document with a new snapshot.
    pub fn load(&self, doc: MetadataDocument) {
        tracing::debug!(
            supported = doc.known_supported_emoji.len(),
            entries = doc.data.len(),
            "Loading metadata snapshot"
        );
        // Poisoning only means another thread panicked mid-clone; the slot
        // itself is still a valid Option<Arc<_>>.
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(doc));
    }

    /// Whether a document has ever been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Get the current snapshot.
    ///
    /// # Errors
    ///
    /// Fails with `NotLoaded` before the first load.
    pub fn snapshot(&self) -> MixmojiResult<Arc<MetadataDocument>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| LookupError::new(LookupErrorKind::NotLoaded).into())
    }

    /// Look up the combination entry for a base codepoint string.
    ///
    /// # Errors
    ///
    /// Fails with `NotLoaded` before the first load.
    pub fn lookup(&self, codepoint: &str) -> MixmojiResult<Option<EmojiEntry>> {
        Ok(self.snapshot()?.entry(codepoint).cloned())
    }

    /// The ordered list of base emoji the loaded document covers.
    ///
    /// # Errors
    ///
    /// Fails with `NotLoaded` before the first load.
    pub fn supported(&self) -> MixmojiResult<Vec<String>> {
        Ok(self.snapshot()?.known_supported_emoji.clone())
    }
}
